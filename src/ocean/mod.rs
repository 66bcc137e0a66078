//! Tessendorf spectral ocean: statistical wave synthesis via inverse FFT.
//!
//! Per frame, [`OceanSimulation::update`] runs
//! amplitudes → height transform → slope spectra → two slope transforms,
//! leaving height and gradient maps in pre-allocated buffers.

pub mod amplitude;
pub mod buoyancy;
pub mod mesh;
pub mod sampler;
pub mod spectrum;
pub mod system;
pub mod texture;
pub mod transform;

pub use amplitude::{
    fourier_amplitude, fourier_amplitude_initial, fourier_amplitudes, gradient_amplitudes,
};
pub use buoyancy::{sample_surface, SurfacePose};
pub use mesh::{OceanMesh, Vertex};
pub use sampler::{sample_initialization_vector, test_initialization_vector};
pub use spectrum::{
    centered_index, centered_wavevector_index, dispersion_relation, phillips_spectrum, vec_k,
};
pub use system::{OceanBuffers, OceanSimulation};
pub use texture::FieldTexture;
pub use transform::{ifft, InverseFft2d};
