//! Tessendorf library - spectral ocean wave simulation
//!
//! Synthesizes a periodic, wind-driven height field and its slopes from a
//! Phillips spectrum, ready for upload as textures.

pub mod error;
pub mod export;
pub mod grid;
pub mod ocean;
pub mod params;

pub use error::{OceanError, Result};
pub use grid::Grid;
pub use rustfft::num_complex::Complex32;
