//! PNG export of normalized wave maps.

use std::path::Path;

use image::{ImageBuffer, Luma};

use crate::error::Result;
use crate::ocean::FieldTexture;

/// 16-bit grayscale image of a normalized field; grid x runs along image
/// columns, grid y along rows.
pub fn to_image(texture: &FieldTexture) -> ImageBuffer<Luma<u16>, Vec<u16>> {
    let field = texture.normalized();
    ImageBuffer::from_fn(field.size_x() as u32, field.size_y() as u32, |x, y| {
        let value = field.get(x as usize, y as usize).clamp(0.0, 1.0);
        Luma([(value * u16::MAX as f32).round() as u16])
    })
}

/// Write `texture` as a 16-bit grayscale PNG.
pub fn save_png(texture: &FieldTexture, path: &Path) -> Result<()> {
    to_image(texture).save(path)?;
    Ok(())
}
