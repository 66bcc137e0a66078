//! Pose of a small object riding the simulated surface.

use std::f32::consts::PI;

use glam::{Mat4, Quat, Vec3, Vec4Swizzles};

use crate::error::{OceanError, Result};
use crate::grid::Grid;
use crate::params::BuoyancyParams;

/// Smoothed surface position and normal under a floating object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePose {
    pub position: Vec3,
    pub normal: Vec3,
    pub model_scale: f32,
}

impl SurfacePose {
    /// `translate(position) · rotate(Z → normal) · scale(model_scale)`
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.model_scale),
            Quat::from_rotation_arc(Vec3::Z, self.normal),
            self.position,
        )
    }
}

/// Gaussian-weighted surface sample around the centre of the maps.
///
/// Each cell of a `(2r + 1)²` window contributes its height and its normal
/// `(gx, 1, gz)` transformed by the inverse transpose of `ocean_transform`.
/// Window indices wrap, matching the tiling of the wave field.
pub fn sample_surface(
    height: &Grid<f32>,
    grad_x: &Grid<f32>,
    grad_z: &Grid<f32>,
    ocean_transform: Mat4,
    params: &BuoyancyParams,
) -> Result<SurfacePose> {
    height.ensure_same_dims(grad_x, "sample_surface (gradX)")?;
    height.ensure_same_dims(grad_z, "sample_surface (gradZ)")?;
    if height.is_empty() {
        return Err(OceanError::EmptyGrid);
    }

    let (size_x, size_y) = height.dims();
    let (cx, cy) = ((size_x / 2) as i32, (size_y / 2) as i32);
    let wrap = |v: i32, n: usize| v.rem_euclid(n as i32) as usize;
    let normal_matrix = ocean_transform.inverse().transpose();
    let two_sigma_sq = 2.0 * params.sigma * params.sigma;

    let mut position = Vec3::ZERO;
    let mut normal_sum = Vec3::ZERO;
    let r = params.window_radius;
    for dx in -r..=r {
        for dy in -r..=r {
            let (x, y) = (wrap(cx + dx, size_x), wrap(cy + dy, size_y));

            let local = Vec3::new(grad_x.get(x, y), 1.0, grad_z.get(x, y));
            let normal = (normal_matrix * local.extend(0.0)).xyz().normalize_or_zero();

            let dist_sq = (dx * dx + dy * dy) as f32;
            let weight = (-dist_sq / two_sigma_sq).exp() / (PI * two_sigma_sq);

            position += weight * Vec3::new(0.0, height.get(x, y), 0.0);
            normal_sum += weight * normal;
        }
    }

    Ok(SurfacePose {
        position,
        normal: normal_sum.try_normalize().unwrap_or(Vec3::Y),
        model_scale: params.model_scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_sea_floats_level() {
        let height = Grid::from_fn(32, 32, |_, _| 2.0);
        let flat = Grid::new(32, 32);
        let params = BuoyancyParams::default();
        let pose = sample_surface(&height, &flat, &flat, Mat4::IDENTITY, &params).unwrap();

        // weights integrate to ~1 for sigma = 1
        assert!((pose.position.y - 2.0).abs() < 1e-2);
        assert_eq!(pose.position.x, 0.0);
        assert!((pose.normal - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_tilted_sea_tilts_normal() {
        let height = Grid::new(16, 16);
        let slope = Grid::from_fn(16, 16, |_, _| 0.5);
        let level = Grid::new(16, 16);
        let params = BuoyancyParams::default();
        let pose = sample_surface(&height, &slope, &level, Mat4::IDENTITY, &params).unwrap();

        let expected = Vec3::new(0.5, 1.0, 0.0).normalize();
        assert!((pose.normal - expected).length() < 1e-5);
    }

    #[test]
    fn test_model_matrix_maps_z_to_normal() {
        let pose = SurfacePose {
            position: Vec3::new(0.0, 1.5, 0.0),
            normal: Vec3::Y,
            model_scale: 0.5,
        };
        let m = pose.model_matrix();

        let z_axis = m.transform_vector3(Vec3::Z);
        assert!((z_axis - Vec3::Y * 0.5).length() < 1e-5);
        assert!((m.transform_point3(Vec3::ZERO) - pose.position).length() < 1e-6);
    }

    #[test]
    fn test_mismatched_maps_are_rejected() {
        let height = Grid::new(8, 8);
        let grad = Grid::new(4, 4);
        let params = BuoyancyParams::default();
        assert!(sample_surface(&height, &grad, &grad, Mat4::IDENTITY, &params).is_err());
    }
}
