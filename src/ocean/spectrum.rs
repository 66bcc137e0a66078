//! Phillips spectrum and deep-water dispersion relation.

use std::f32::consts::TAU;

use glam::{IVec2, Vec2};

use crate::params::{WaveConfig, GRAVITY_M_PER_S2};

/// Wavenumbers below this carry no energy (the DC component)
const MIN_WAVENUMBER: f32 = 1e-7;

/// Statistical wave energy at wavevector `k`.
///
/// `A · (k̂·ŵ)² · exp(−1/(k²L²)) / k⁴ · exp(−k²l²)` with `L` the largest
/// wave scale sustained by the wind and `l` the capillary cutoff.
pub fn phillips_spectrum(k_vec: Vec2, config: &WaveConfig) -> f32 {
    let k = k_vec.length();
    if k.abs() < MIN_WAVENUMBER {
        return 0.0;
    }

    let k_squared = k * k;
    let max_wave = config.max_wave_height();
    let min_wave = config.min_wave_height();

    let large_wave = (-1.0 / (k_squared * max_wave * max_wave)).exp() / (k_squared * k_squared);
    let alignment = (k_vec / k).dot(config.wind_dir);
    let small_wave = (-k_squared * min_wave * min_wave).exp();

    config.spectrum_scale * large_wave * alignment * alignment * small_wave
}

/// Continuous wavevector of a centered grid index: `2π · index / patch_size`.
pub fn vec_k(index: IVec2, config: &WaveConfig) -> Vec2 {
    TAU * index.as_vec2() / config.patch_size_m
}

/// Deep-water angular frequency `sqrt(g·k)`, snapped down to a multiple of
/// `2π / period` so the field repeats exactly every period.
pub fn dispersion_relation(k: f32, config: &WaveConfig) -> f32 {
    let omega_k = (GRAVITY_M_PER_S2 * k).sqrt();
    let omega_0 = config.fundamental_frequency();
    (omega_k / omega_0).floor() * omega_0
}

/// Map a raw index in `[0, n)` to the signed range `[-n/2, n/2)`.
#[inline]
pub fn centered_index(i: usize, n: usize) -> i32 {
    let half = n / 2;
    ((i + half) % n) as i32 - half as i32
}

/// Centered wavevector index of grid cell `(x, y)` in a `size_x × size_y` grid.
#[inline]
pub fn centered_wavevector_index(x: usize, y: usize, size_x: usize, size_y: usize) -> IVec2 {
    IVec2::new(centered_index(x, size_x), centered_index(y, size_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_energy_at_dc() {
        assert_eq!(phillips_spectrum(Vec2::ZERO, &WaveConfig::default()), 0.0);

        let calm = WaveConfig::default().with_wind(0.5, Vec2::X);
        assert_eq!(phillips_spectrum(Vec2::ZERO, &calm), 0.0);
    }

    #[test]
    fn test_spectrum_decreases_along_wind() {
        let config = WaveConfig::default();
        let along = |k: f32| phillips_spectrum(config.wind_dir * k, &config);

        let (p1, p10, p100) = (along(1.0), along(10.0), along(100.0));
        assert!(p1 > p10, "{p1} <= {p10}");
        assert!(p10 > p100, "{p10} <= {p100}");
        assert!(p100 >= 0.0);
    }

    #[test]
    fn test_spectrum_vanishes_across_wind() {
        let config = WaveConfig::default();
        let across = config.wind_dir.perp();
        assert!(phillips_spectrum(across * 0.5, &config).abs() < 1e-6);
        assert!(phillips_spectrum(config.wind_dir * 0.5, &config) > 0.0);
    }

    #[test]
    fn test_spectrum_is_even() {
        let config = WaveConfig::default();
        let k = Vec2::new(0.3, -0.7);
        let a = phillips_spectrum(k, &config);
        let b = phillips_spectrum(-k, &config);
        assert!((a - b).abs() <= 1e-6 * a.abs());
    }

    #[test]
    fn test_vec_k_scales_by_patch() {
        let config = WaveConfig {
            patch_size_m: Vec2::new(64.0, 32.0),
            ..WaveConfig::default()
        };
        let k = vec_k(IVec2::new(1, -2), &config);
        assert!((k.x - TAU / 64.0).abs() < 1e-6);
        assert!((k.y + 2.0 * TAU / 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_dispersion_is_quantized() {
        let config = WaveConfig::default();
        let omega_0 = config.fundamental_frequency();

        for k in [0.05_f32, 0.3, 1.0, 2.5] {
            let omega = dispersion_relation(k, &config);
            let multiple = omega / omega_0;
            assert!((multiple - multiple.round()).abs() < 1e-4);
            assert!(omega <= (GRAVITY_M_PER_S2 * k).sqrt() + 1e-5);
            assert!((GRAVITY_M_PER_S2 * k).sqrt() - omega < omega_0);
        }
        assert_eq!(dispersion_relation(0.0, &config), 0.0);
    }

    #[test]
    fn test_centered_index_wraps() {
        let centered: Vec<i32> = (0..8).map(|i| centered_index(i, 8)).collect();
        assert_eq!(centered, vec![0, 1, 2, 3, -4, -3, -2, -1]);

        let odd: Vec<i32> = (0..5).map(|i| centered_index(i, 5)).collect();
        assert_eq!(odd, vec![0, 1, 2, -2, -1]);
    }
}
