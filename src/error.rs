//! Error types for the wave simulator and exporter.

use thiserror::Error;

/// Errors produced by the ocean simulation.
#[derive(Debug, Error)]
pub enum OceanError {
    /// Two grids that must cooperate cell-for-cell have different sizes.
    #[error("{context}: expected {expected:?} grid, found {found:?}")]
    DimensionMismatch {
        context: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// Simulation parameters violate an invariant.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A reduction was requested on a grid with no cells.
    #[error("grid has no cells")]
    EmptyGrid,

    /// PNG encoding failed.
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error while exporting.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OceanError>;
