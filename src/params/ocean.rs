//! Wave-field physics parameters.

use glam::Vec2;

use crate::error::{OceanError, Result};

/// Gravitational acceleration used by the spectrum and dispersion relation (m/s²)
pub const GRAVITY_M_PER_S2: f32 = 9.81;

/// Fraction of the largest wave scale below which waves are suppressed
const MIN_WAVE_FRACTION: f32 = 1e-4;

/// Tolerance on `|wind_dir| == 1`
const WIND_DIR_TOLERANCE: f32 = 1e-3;

/// Immutable parameters of the statistical wave model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveConfig {
    /// Time after which the animation repeats exactly (seconds)
    pub period_s: f32,

    /// Physical extent of one simulated tile (meters, x and z)
    pub patch_size_m: Vec2,

    /// Wind speed driving the spectrum (m/s)
    pub wind_speed_m_per_s: f32,

    /// Unit vector of the wind on the xz plane
    pub wind_dir: Vec2,

    /// Dimensionless spectrum gain ("A" in the Phillips spectrum)
    pub spectrum_scale: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            period_s: 10.0,
            patch_size_m: Vec2::new(64.0, 64.0),
            wind_speed_m_per_s: 12.0,
            wind_dir: Vec2::new(0.2, 1.0).normalize(),
            spectrum_scale: 3.0,
        }
    }
}

impl WaveConfig {
    /// Replace the wind, normalizing `direction`.
    pub fn with_wind(mut self, speed_m_per_s: f32, direction: Vec2) -> Self {
        self.wind_speed_m_per_s = speed_m_per_s;
        self.wind_dir = direction.normalize_or_zero();
        self
    }

    /// Largest wave scale sustained by the wind: `V² / g` (meters)
    pub fn max_wave_height(&self) -> f32 {
        self.wind_speed_m_per_s * self.wind_speed_m_per_s / GRAVITY_M_PER_S2
    }

    /// Short-wave cutoff below which capillary waves are damped (meters)
    pub fn min_wave_height(&self) -> f32 {
        MIN_WAVE_FRACTION * self.max_wave_height()
    }

    /// Fundamental temporal frequency `2π / period` (rad/s)
    pub fn fundamental_frequency(&self) -> f32 {
        std::f32::consts::TAU / self.period_s
    }

    /// Check the invariants every spectral function assumes.
    pub fn validate(&self) -> Result<()> {
        if !(self.period_s.is_finite() && self.period_s > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "period must be > 0, got {}",
                self.period_s
            )));
        }
        if !(self.patch_size_m.is_finite() && self.patch_size_m.min_element() > 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "patch size components must be > 0, got {}",
                self.patch_size_m
            )));
        }
        if !(self.wind_speed_m_per_s.is_finite() && self.wind_speed_m_per_s >= 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "wind speed must be finite and >= 0, got {}",
                self.wind_speed_m_per_s
            )));
        }
        if (self.wind_dir.length() - 1.0).abs() > WIND_DIR_TOLERANCE {
            return Err(OceanError::InvalidConfig(format!(
                "wind direction must be normalized, got {} (length {})",
                self.wind_dir,
                self.wind_dir.length()
            )));
        }
        if !(self.spectrum_scale.is_finite() && self.spectrum_scale >= 0.0) {
            return Err(OceanError::InvalidConfig(format!(
                "spectrum scale must be finite and >= 0, got {}",
                self.spectrum_scale
            )));
        }
        Ok(())
    }
}

/// Grid resolution and random seed of one simulation instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationParams {
    /// Cells along x
    pub grid_size_x: usize,

    /// Cells along z
    pub grid_size_y: usize,

    /// Seed for the initialization vector (`None` draws from OS entropy)
    pub seed: Option<u64>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            grid_size_x: 128,
            grid_size_y: 128,
            seed: None,
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<()> {
        if self.grid_size_x == 0 || self.grid_size_y == 0 {
            return Err(OceanError::InvalidConfig(format!(
                "grid size must be non-zero, got {}x{}",
                self.grid_size_x, self.grid_size_y
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_wave_heights() {
        let config = WaveConfig::default();
        let max = config.max_wave_height();
        assert!((max - 144.0 / 9.81).abs() < 1e-4);
        assert!((config.min_wave_height() - 1e-4 * max).abs() < 1e-8);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(WaveConfig::default().validate().is_ok());
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let unnormalized = WaveConfig {
            wind_dir: Vec2::new(0.2, 1.0),
            ..WaveConfig::default()
        };
        assert!(unnormalized.validate().is_err());

        let zero_period = WaveConfig {
            period_s: 0.0,
            ..WaveConfig::default()
        };
        assert!(zero_period.validate().is_err());

        let flat_patch = WaveConfig {
            patch_size_m: Vec2::new(64.0, 0.0),
            ..WaveConfig::default()
        };
        assert!(flat_patch.validate().is_err());

        let empty = SimulationParams {
            grid_size_x: 0,
            ..SimulationParams::default()
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_with_wind_normalizes() {
        let config = WaveConfig::default().with_wind(20.0, Vec2::new(3.0, 4.0));
        assert!((config.wind_dir.length() - 1.0).abs() < 1e-6);
        assert_eq!(config.wind_speed_m_per_s, 20.0);
        assert!(config.validate().is_ok());
    }
}
