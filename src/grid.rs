//! Dense 2D storage shared by every stage of the wave pipeline.
//!
//! Cells are laid out with the `y` axis contiguous: cell `(x, y)` lives at
//! `x * size_y + y`. The inverse transform relies on this layout to run the
//! `y`-axis pass directly over the backing buffer.

use std::ops::{Index, IndexMut};

use crate::error::{OceanError, Result};

/// Fixed-size 2D buffer of scalar or complex cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    size_x: usize,
    size_y: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Allocate a `size_x * size_y` grid with every cell set to `T::default()`.
    pub fn new(size_x: usize, size_y: usize) -> Self {
        Self {
            size_x,
            size_y,
            data: vec![T::default(); size_x * size_y],
        }
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(size_x: usize, size_y: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(size_x * size_y);
        for x in 0..size_x {
            for y in 0..size_y {
                data.push(f(x, y));
            }
        }
        Self {
            size_x,
            size_y,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.offset(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let offset = self.offset(x, y);
        self.data[offset] = value;
    }

    /// Overwrite every cell with the contents of `other`.
    pub fn copy_from(&mut self, other: &Grid<T>) -> Result<()> {
        self.ensure_same_dims(other, "Grid::copy_from")?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }
}

impl<T> Grid<T> {
    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// `(size_x, size_y)`
    pub fn dims(&self) -> (usize, usize) {
        (self.size_x, self.size_y)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Fail with [`OceanError::DimensionMismatch`] unless `other` has the same shape.
    pub fn ensure_same_dims<U>(&self, other: &Grid<U>, context: &'static str) -> Result<()> {
        if self.dims() == other.dims() {
            Ok(())
        } else {
            Err(OceanError::DimensionMismatch {
                context,
                expected: self.dims(),
                found: other.dims(),
            })
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.size_x && y < self.size_y,
            "cell ({x}, {y}) outside {}x{} grid",
            self.size_x,
            self.size_y
        );
        x * self.size_y + y
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        &self.data[self.offset(x, y)]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        let offset = self.offset(x, y);
        &mut self.data[offset]
    }
}

impl Grid<f32> {
    /// Smallest cell value, or `None` for an empty grid.
    pub fn min(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::min)
    }

    /// Largest cell value, or `None` for an empty grid.
    pub fn max(&self) -> Option<f32> {
        self.data.iter().copied().reduce(f32::max)
    }

    /// Add `offset` to every cell in place.
    pub fn plus(&mut self, offset: f32) {
        for value in &mut self.data {
            *value += offset;
        }
    }

    /// Multiply every cell by `factor` in place.
    pub fn times(&mut self, factor: f32) {
        for value in &mut self.data {
            *value *= factor;
        }
    }
}
