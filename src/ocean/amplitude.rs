//! Time-varying Fourier amplitudes of the height field and its slopes.

use glam::IVec2;
use rayon::prelude::*;
use rustfft::num_complex::Complex32;

use super::spectrum::{
    centered_index, centered_wavevector_index, dispersion_relation, phillips_spectrum, vec_k,
};
use crate::error::Result;
use crate::grid::Grid;
use crate::params::WaveConfig;

/// `h₀(k) = ξ(k) · sqrt(P(k)) / √2` for a centered wavevector index.
///
/// Negative indices wrap into the initialization vector.
pub fn fourier_amplitude_initial(
    iv: &Grid<Complex32>,
    index: IVec2,
    config: &WaveConfig,
) -> Complex32 {
    let x = index.x.rem_euclid(iv.size_x() as i32) as usize;
    let y = index.y.rem_euclid(iv.size_y() as i32) as usize;
    let xi = iv.get(x, y);
    let phillips = phillips_spectrum(vec_k(index, config), config);
    xi * (phillips.sqrt() * std::f32::consts::FRAC_1_SQRT_2)
}

/// `h(k, t) = h₀(k)·e^{iωt} + conj(h₀(−k))·e^{−iωt}`.
///
/// Pairing each wave with its mirrored conjugate keeps the amplitude grid
/// Hermitian, so the inverse transform is real.
pub fn fourier_amplitude(
    iv: &Grid<Complex32>,
    index: IVec2,
    t: f32,
    config: &WaveConfig,
) -> Complex32 {
    let k = vec_k(index, config).length();
    let phase = Complex32::from_polar(1.0, dispersion_relation(k, config) * t);
    let forward = fourier_amplitude_initial(iv, index, config) * phase;
    let mirrored = fourier_amplitude_initial(iv, -index, config).conj() * phase.conj();
    forward + mirrored
}

/// Fill `out` with the amplitude of every grid frequency at time `t`.
pub fn fourier_amplitudes(
    out: &mut Grid<Complex32>,
    iv: &Grid<Complex32>,
    t: f32,
    config: &WaveConfig,
) -> Result<()> {
    iv.ensure_same_dims(out, "fourier_amplitudes")?;
    let (size_x, size_y) = iv.dims();
    if out.is_empty() {
        return Ok(());
    }

    out.as_mut_slice()
        .par_chunks_mut(size_y)
        .enumerate()
        .for_each(|(x, row)| {
            let kx = centered_index(x, size_x);
            for (y, cell) in row.iter_mut().enumerate() {
                let index = IVec2::new(kx, centered_index(y, size_y));
                *cell = fourier_amplitude(iv, index, t, config);
            }
        });
    Ok(())
}

/// Slope spectra `i·kx·A` and `i·kz·A` of the amplitude grid.
///
/// Multiplying by `i·k` differentiates along that axis once transformed back.
pub fn gradient_amplitudes(
    out_x: &mut Grid<Complex32>,
    out_z: &mut Grid<Complex32>,
    amplitudes: &Grid<Complex32>,
    config: &WaveConfig,
) -> Result<()> {
    amplitudes.ensure_same_dims(out_x, "gradient_amplitudes (x)")?;
    amplitudes.ensure_same_dims(out_z, "gradient_amplitudes (z)")?;
    let (size_x, size_y) = amplitudes.dims();
    if amplitudes.is_empty() {
        return Ok(());
    }

    out_x
        .as_mut_slice()
        .par_chunks_mut(size_y)
        .zip(out_z.as_mut_slice().par_chunks_mut(size_y))
        .zip(amplitudes.as_slice().par_chunks(size_y))
        .enumerate()
        .for_each(|(x, ((row_x, row_z), row_a))| {
            for (y, amplitude) in row_a.iter().enumerate() {
                let k = vec_k(centered_wavevector_index(x, y, size_x, size_y), config);
                row_x[y] = Complex32::new(0.0, k.x) * amplitude;
                row_z[y] = Complex32::new(0.0, k.y) * amplitude;
            }
        });
    Ok(())
}
