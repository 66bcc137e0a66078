//! Floating-body sampling parameters.

/// How a floating object samples the ocean surface under it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuoyancyParams {
    /// Standard deviation of the Gaussian sample weights (grid cells)
    pub sigma: f32,

    /// Half-width of the square sampling window (grid cells)
    pub window_radius: i32,

    /// Uniform scale applied to the object's model matrix
    pub model_scale: f32,
}

impl Default for BuoyancyParams {
    fn default() -> Self {
        Self {
            sigma: 1.0,
            window_radius: 11,
            model_scale: 0.5,
        }
    }
}
