//! Initialization vector: the fixed random field the spectrum modulates.

use rand::Rng;
use rand_distr::StandardNormal;
use rustfft::num_complex::Complex32;

use crate::grid::Grid;

/// Draw an independent standard-normal complex sample for every cell.
///
/// Cells are filled in storage order, real part first, so a seeded `rng`
/// always produces the same field.
pub fn sample_initialization_vector<R: Rng + ?Sized>(
    size_x: usize,
    size_y: usize,
    rng: &mut R,
) -> Grid<Complex32> {
    Grid::from_fn(size_x, size_y, |_, _| {
        let re: f32 = rng.sample(StandardNormal);
        let im: f32 = rng.sample(StandardNormal);
        Complex32::new(re, im)
    })
}

/// Deterministic field for correctness checks: cell `(x, y)` holds
/// `n + n·i` with `n = x · size_y + y`.
pub fn test_initialization_vector(size_x: usize, size_y: usize) -> Grid<Complex32> {
    Grid::from_fn(size_x, size_y, |x, y| {
        let n = (x * size_y + y) as f32;
        Complex32::new(n, n)
    })
}
