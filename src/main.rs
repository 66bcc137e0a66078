//! Tessendorf - headless ocean map exporter
//!
//! Simulates the spectral wave field and writes height and slope maps as
//! 16-bit PNGs, printing the scale/offset a shader needs to decode them.

mod cli;

use std::time::Instant;

use clap::Parser;
use log::info;

use tessendorf::export::save_png;
use tessendorf::ocean::{FieldTexture, OceanSimulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = cli::Args::parse();

    let wave_config = args.wave_config();
    let sim_params = args.simulation_params();
    let export_config = args.export_config();

    println!("Tessendorf ocean exporter");
    println!("  Grid: {}x{}", sim_params.grid_size_x, sim_params.grid_size_y);
    println!("  Patch: {} m", wave_config.patch_size_m);
    println!(
        "  Wind: {} m/s toward {}",
        wave_config.wind_speed_m_per_s, wave_config.wind_dir
    );
    println!("  Period: {} s", wave_config.period_s);

    let start = Instant::now();
    let mut ocean = OceanSimulation::new(wave_config, &sim_params)?;
    std::fs::create_dir_all(&export_config.output_dir)?;

    let (size_x, size_y) = ocean.dims();
    let mut textures = [
        FieldTexture::new("height", size_x, size_y),
        FieldTexture::new("gradX", size_x, size_y),
        FieldTexture::new("gradZ", size_x, size_y),
    ];

    for frame in 0..export_config.frames {
        let time_s = export_config.frame_time(frame);
        ocean.update(time_s)?;

        let [height, grad_x, grad_z] = &mut textures;
        height.store(ocean.height_map())?;
        grad_x.store(ocean.grad_x_map())?;
        grad_z.store(ocean.grad_z_map())?;

        for texture in &textures {
            let path = export_config.field_path(texture.name(), frame);
            save_png(texture, &path)?;
            info!(
                "frame {frame} t={time_s:.3}s {}: scale {:.5} offset {:.5} -> {}",
                texture.name(),
                texture.scale(),
                texture.offset(),
                path.display()
            );
        }
    }

    let elapsed = start.elapsed();
    println!("  Output: {}", export_config.output_dir.display());
    println!("  Frames: {}", export_config.frames);
    println!("  Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
