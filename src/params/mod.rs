//! Parameter definitions with physical units and documented semantics.
//!
//! All demo constants are collected here with:
//! - Physical units (meters, seconds, m/s)
//! - Documented ranges and meanings
//! - Validation where an invariant must hold

mod buoyancy;
mod export;
mod ocean;

// Re-export all types
pub use buoyancy::BuoyancyParams;
pub use export::ExportConfig;
pub use ocean::{SimulationParams, WaveConfig, GRAVITY_M_PER_S2};
