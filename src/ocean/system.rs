//! Per-frame wave pipeline over pre-allocated buffers.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustfft::num_complex::Complex32;

use super::amplitude::{fourier_amplitudes, gradient_amplitudes};
use super::sampler::sample_initialization_vector;
use super::transform::InverseFft2d;
use crate::error::Result;
use crate::grid::Grid;
use crate::params::{SimulationParams, WaveConfig};

/// Every grid the pipeline touches, allocated once per simulation
#[derive(Debug, Clone)]
pub struct OceanBuffers {
    /// Inverse-transform scratch, reused by all three transforms
    pub scratch: Grid<Complex32>,
    pub fourier_amplitudes: Grid<Complex32>,
    pub gradient_x_amplitudes: Grid<Complex32>,
    pub gradient_z_amplitudes: Grid<Complex32>,
    pub height_map: Grid<f32>,
    pub grad_x_map: Grid<f32>,
    pub grad_z_map: Grid<f32>,
}

impl OceanBuffers {
    pub fn new(size_x: usize, size_y: usize) -> Self {
        Self {
            scratch: Grid::new(size_x, size_y),
            fourier_amplitudes: Grid::new(size_x, size_y),
            gradient_x_amplitudes: Grid::new(size_x, size_y),
            gradient_z_amplitudes: Grid::new(size_x, size_y),
            height_map: Grid::new(size_x, size_y),
            grad_x_map: Grid::new(size_x, size_y),
            grad_z_map: Grid::new(size_x, size_y),
        }
    }
}

/// Simulation context: configuration, fixed random field and frame buffers
pub struct OceanSimulation {
    config: WaveConfig,
    initialization_vector: Grid<Complex32>,
    transform: InverseFft2d,
    pub buffers: OceanBuffers,
}

impl OceanSimulation {
    /// Create a simulation, seeding the initialization vector from
    /// `params.seed` or from OS entropy.
    pub fn new(config: WaveConfig, params: &SimulationParams) -> Result<Self> {
        let mut rng = match params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(config, params, &mut rng)
    }

    /// Create a simulation drawing the initialization vector from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        config: WaveConfig,
        params: &SimulationParams,
        rng: &mut R,
    ) -> Result<Self> {
        config.validate()?;
        params.validate()?;
        let (size_x, size_y) = (params.grid_size_x, params.grid_size_y);
        let initialization_vector = sample_initialization_vector(size_x, size_y, rng);
        Self::from_initialization_vector(config, initialization_vector)
    }

    /// Create a simulation around an existing initialization vector.
    pub fn from_initialization_vector(
        config: WaveConfig,
        initialization_vector: Grid<Complex32>,
    ) -> Result<Self> {
        config.validate()?;
        let (size_x, size_y) = initialization_vector.dims();
        SimulationParams {
            grid_size_x: size_x,
            grid_size_y: size_y,
            seed: None,
        }
        .validate()?;

        debug!(
            "ocean simulation {size_x}x{size_y}, patch {} m, max wave {:.3} m, min wave {:.5} m",
            config.patch_size_m,
            config.max_wave_height(),
            config.min_wave_height()
        );

        Ok(Self {
            config,
            initialization_vector,
            transform: InverseFft2d::new(size_x, size_y),
            buffers: OceanBuffers::new(size_x, size_y),
        })
    }

    /// Recompute amplitudes, height and both gradient maps for time `time_s`.
    pub fn update(&mut self, time_s: f32) -> Result<()> {
        trace!("ocean update t = {time_s:.3}s");
        let buffers = &mut self.buffers;

        fourier_amplitudes(
            &mut buffers.fourier_amplitudes,
            &self.initialization_vector,
            time_s,
            &self.config,
        )?;
        self.transform.process(
            &mut buffers.height_map,
            &buffers.fourier_amplitudes,
            &mut buffers.scratch,
            true,
        )?;
        gradient_amplitudes(
            &mut buffers.gradient_x_amplitudes,
            &mut buffers.gradient_z_amplitudes,
            &buffers.fourier_amplitudes,
            &self.config,
        )?;
        self.transform.process(
            &mut buffers.grad_x_map,
            &buffers.gradient_x_amplitudes,
            &mut buffers.scratch,
            false,
        )?;
        self.transform.process(
            &mut buffers.grad_z_map,
            &buffers.gradient_z_amplitudes,
            &mut buffers.scratch,
            false,
        )?;
        Ok(())
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn initialization_vector(&self) -> &Grid<Complex32> {
        &self.initialization_vector
    }

    pub fn dims(&self) -> (usize, usize) {
        self.initialization_vector.dims()
    }

    pub fn height_map(&self) -> &Grid<f32> {
        &self.buffers.height_map
    }

    pub fn grad_x_map(&self) -> &Grid<f32> {
        &self.buffers.grad_x_map
    }

    pub fn grad_z_map(&self) -> &Grid<f32> {
        &self.buffers.grad_z_map
    }
}
