#![deny(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Context;
use conway_life::{Simulation, SimulationConfig};
use log::info;
use pixels_main_support::{animate, AnimationSettings};
use std::env;
use std::path::PathBuf;

const TITLE: &str = "Conway's Game of Life";
const CELL_PIXEL_WIDTH: u32 = 6;

/// Usage: `conway-life-pixels [CONFIG.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match env::args_os().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            info!("Loading config from {}", path.display());
            SimulationConfig::load(&path).context("failed to load configuration")?
        }
        None => SimulationConfig::default(),
    };

    let settings = AnimationSettings {
        title: TITLE.to_string(),
        time_step: config.interval(),
        cell_pixel_width: CELL_PIXEL_WIDTH,
    };
    let simulation = Simulation::new(config).context("failed to create the first generation")?;
    animate(simulation, settings).context("animation failed")?;
    Ok(())
}
