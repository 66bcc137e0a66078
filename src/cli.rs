//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use tessendorf::params::{ExportConfig, SimulationParams, WaveConfig};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "tessendorf")]
#[command(about = "Render Tessendorf ocean height and slope maps to PNG", long_about = None)]
pub struct Args {
    /// Grid resolution (cells per side)
    #[arg(long, value_name = "CELLS", default_value_t = 128)]
    pub grid_size: usize,

    /// Physical size of the simulated tile (meters per side)
    #[arg(long, value_name = "METERS", default_value_t = 64.0)]
    pub patch_size: f32,

    /// Wind speed (m/s)
    #[arg(long, value_name = "M_PER_S", default_value_t = 12.0)]
    pub wind_speed: f32,

    /// Wind direction x component (normalized together with --wind-z)
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    pub wind_x: f32,

    /// Wind direction z component
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub wind_z: f32,

    /// Loop period of the animation (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 10.0)]
    pub period: f32,

    /// Phillips spectrum gain
    #[arg(long, default_value_t = 3.0)]
    pub spectrum_scale: f32,

    /// RNG seed for the initialization vector (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation time of the first frame (seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 0.0)]
    pub time: f32,

    /// Number of frames to export
    #[arg(long, default_value_t = 1)]
    pub frames: usize,

    /// Frame rate for multi-frame export
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Output directory
    #[arg(long, default_value = "ocean_maps")]
    pub output: PathBuf,
}

impl Args {
    /// Wave model parameters from the command line
    pub fn wave_config(&self) -> WaveConfig {
        WaveConfig {
            period_s: self.period,
            patch_size_m: Vec2::splat(self.patch_size),
            spectrum_scale: self.spectrum_scale,
            ..WaveConfig::default()
        }
        .with_wind(self.wind_speed, Vec2::new(self.wind_x, self.wind_z))
    }

    pub fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            grid_size_x: self.grid_size,
            grid_size_y: self.grid_size,
            seed: self.seed,
        }
    }

    pub fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::new(&self.output);
        config.start_time_s = self.time;
        config.frames = self.frames;
        config.fps = self.fps.max(1);
        config
    }
}
