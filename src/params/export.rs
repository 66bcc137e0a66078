//! Heightmap export configuration.

use std::path::PathBuf;

/// Frame export configuration
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Output directory for the PNG maps
    pub output_dir: PathBuf,

    /// Simulation time of the first frame (seconds)
    pub start_time_s: f32,

    /// Number of frames to export
    pub frames: usize,

    /// Frame rate (FPS)
    pub fps: u32,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            start_time_s: 0.0,
            frames: 1,
            fps: 30,
        }
    }

    /// Simulation time of frame `index` (seconds)
    pub fn frame_time(&self, index: usize) -> f32 {
        self.start_time_s + index as f32 / self.fps as f32
    }

    /// Path of the PNG for `field` at frame `index`
    pub fn field_path(&self, field: &str, index: usize) -> PathBuf {
        self.output_dir.join(format!("{field}_{index:04}.png"))
    }
}
