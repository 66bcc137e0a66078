//! 2D inverse FFT from amplitude grids to real spatial fields.

use std::sync::Arc;

use rustfft::{num_complex::Complex32, Fft, FftPlanner};

use crate::error::{OceanError, Result};
use crate::grid::Grid;

/// Inverse 2D transform planned for one grid size.
///
/// Holds the per-axis plans and a column buffer so repeated frames do not
/// replan or allocate.
pub struct InverseFft2d {
    size_x: usize,
    size_y: usize,
    fft_x: Arc<dyn Fft<f32>>,
    fft_y: Arc<dyn Fft<f32>>,
    column: Vec<Complex32>,
}

impl InverseFft2d {
    /// Plan inverse transforms for a `size_x × size_y` grid.
    pub fn new(size_x: usize, size_y: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            size_x,
            size_y,
            fft_x: planner.plan_fft_inverse(size_x),
            fft_y: planner.plan_fft_inverse(size_y),
            column: vec![Complex32::new(0.0, 0.0); size_x],
        }
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    /// Inverse-transform `amplitudes` into `scratch`, then copy the real part
    /// of every cell into `out`.
    ///
    /// The result is scaled by `1/sqrt(size_x·size_y)` when `normalize` is
    /// set and left unscaled otherwise. The imaginary part stays in
    /// `scratch` for inspection.
    pub fn process(
        &mut self,
        out: &mut Grid<f32>,
        amplitudes: &Grid<Complex32>,
        scratch: &mut Grid<Complex32>,
        normalize: bool,
    ) -> Result<()> {
        out.ensure_same_dims(amplitudes, "ifft (amplitudes)")?;
        out.ensure_same_dims(scratch, "ifft (scratch)")?;
        if out.dims() != self.dims() {
            return Err(OceanError::DimensionMismatch {
                context: "ifft (plan)",
                expected: self.dims(),
                found: out.dims(),
            });
        }
        if out.is_empty() {
            return Ok(());
        }

        scratch.copy_from(amplitudes)?;
        self.inverse_in_place(scratch);

        let scale = if normalize {
            1.0 / ((self.size_x * self.size_y) as f32).sqrt()
        } else {
            1.0
        };
        for (value, cell) in out.as_mut_slice().iter_mut().zip(scratch.as_mut_slice()) {
            *cell *= scale;
            *value = cell.re;
        }
        Ok(())
    }

    /// Unnormalized inverse transform along both axes.
    fn inverse_in_place(&mut self, grid: &mut Grid<Complex32>) {
        // y is contiguous: every row is one transform
        self.fft_y.process(grid.as_mut_slice());

        let size_y = self.size_y;
        let data = grid.as_mut_slice();
        for y in 0..size_y {
            for (x, value) in self.column.iter_mut().enumerate() {
                *value = data[x * size_y + y];
            }
            self.fft_x.process(&mut self.column);
            for (x, value) in self.column.iter().enumerate() {
                data[x * size_y + y] = *value;
            }
        }
    }
}

/// One-shot inverse transform; plans for the size of `out` on every call.
///
/// Use [`InverseFft2d`] when transforming every frame.
pub fn ifft(
    out: &mut Grid<f32>,
    amplitudes: &Grid<Complex32>,
    scratch: &mut Grid<Complex32>,
    normalize: bool,
) -> Result<()> {
    let (size_x, size_y) = out.dims();
    InverseFft2d::new(size_x, size_y).process(out, amplitudes, scratch, normalize)
}
