//! Normalized field buffers ready for texture upload.

use log::warn;

use crate::error::{OceanError, Result};
use crate::grid::Grid;

/// A spatial field remapped to `[0, 1]`, plus the affine terms that undo it.
///
/// A shader reconstructs the raw value as `stored * scale + offset`.
#[derive(Debug, Clone)]
pub struct FieldTexture {
    name: String,
    buffer: Grid<f32>,
    scale: f32,
    offset: f32,
}

impl FieldTexture {
    pub fn new(name: impl Into<String>, size_x: usize, size_y: usize) -> Self {
        Self {
            name: name.into(),
            buffer: Grid::new(size_x, size_y),
            scale: 1.0,
            offset: 0.0,
        }
    }

    /// Copy `field` and remap it to `[0, 1]`.
    ///
    /// A flat field stores all zeros with `scale = 0`, so decoding still
    /// yields the flat value.
    pub fn store(&mut self, field: &Grid<f32>) -> Result<()> {
        self.buffer.copy_from(field)?;

        let min = self.buffer.min().ok_or(OceanError::EmptyGrid)?;
        let max = self.buffer.max().ok_or(OceanError::EmptyGrid)?;
        let range = max - min;

        self.buffer.plus(-min);
        if range > 0.0 && range.is_finite() {
            self.buffer.times(1.0 / range);
            self.scale = range;
        } else {
            warn!("{} field is flat ({min}), storing zero amplitude", self.name);
            self.buffer.times(0.0);
            self.scale = 0.0;
        }
        self.offset = min;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized values in `[0, 1]`
    pub fn normalized(&self) -> &Grid<f32> {
        &self.buffer
    }

    /// `max - min` of the last stored field
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// `min` of the last stored field
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Raw field value of cell `(x, y)`.
    pub fn decode(&self, x: usize, y: usize) -> f32 {
        self.buffer.get(x, y) * self.scale + self.offset
    }

    /// Normalized buffer as raw bytes (native-endian `f32`), for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.buffer.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_normalizes_and_decodes() {
        let field = Grid::from_fn(2, 2, |x, y| [[-3.0, 0.0], [7.0, 2.0]][x][y]);
        let mut texture = FieldTexture::new("height", 2, 2);
        texture.store(&field).unwrap();

        assert_eq!(texture.scale(), 10.0);
        assert_eq!(texture.offset(), -3.0);
        assert_eq!(texture.normalized().min(), Some(0.0));
        assert_eq!(texture.normalized().max(), Some(1.0));
        for x in 0..2 {
            for y in 0..2 {
                assert!((texture.decode(x, y) - field.get(x, y)).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_flat_field_has_zero_scale() {
        let field = Grid::from_fn(3, 3, |_, _| 4.5);
        let mut texture = FieldTexture::new("gradX", 3, 3);
        texture.store(&field).unwrap();

        assert_eq!(texture.scale(), 0.0);
        assert_eq!(texture.offset(), 4.5);
        assert!(texture.normalized().as_slice().iter().all(|v| *v == 0.0));
        assert_eq!(texture.decode(1, 2), 4.5);
    }

    #[test]
    fn test_bytes_cover_every_cell() {
        let texture = FieldTexture::new("gradZ", 4, 8);
        assert_eq!(texture.as_bytes().len(), 4 * 8 * 4);
    }

    #[test]
    fn test_store_checks_dimensions() {
        let mut texture = FieldTexture::new("height", 4, 4);
        let field = Grid::new(2, 2);
        assert!(texture.store(&field).is_err());

        let mut empty = FieldTexture::new("height", 0, 0);
        assert!(matches!(
            empty.store(&Grid::new(0, 0)),
            Err(OceanError::EmptyGrid)
        ));
    }
}
