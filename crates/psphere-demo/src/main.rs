//! Demo binary that generates a planet surface, exports its maps and drives
//! a few rovers across it.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p psphere-demo -- --seed 7 --water-fraction 0.5`.

mod settings;
mod tour;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::DVec3;
use psphere_config::{CliArgs, Config, default_config_dir};
use psphere_planet::PlanetSurface;
use tracing::{error, info};

const ROVER_COUNT: usize = 4;
const ROVER_PACE_DEGREES: f64 = 1.5;
const GRID_WALK_STEPS: usize = 64;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| PathBuf::from(".psphere"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    psphere_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    let mut surface = match PlanetSurface::generate(
        settings::generation_params(&config),
        settings::resource_parameters(&config),
    ) {
        Ok(surface) => surface,
        Err(e) => {
            error!("planet generation failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stats = surface.elevation_stats();
    info!(
        min = stats.min,
        max = stats.max,
        sea_level = stats.sea_level,
        land_cells = surface.topology().land_count(),
        mesh_iterations = surface.mesh_iterations(),
        "surface ready"
    );

    if let Err(e) = tour::export_maps(&surface, &config.export) {
        error!("map export failed: {e}");
        return ExitCode::FAILURE;
    }

    surface.set_observer_position(DVec3::new(0.0, 0.0, surface.radius() * 3.0));
    info!(distance = surface.observer_distance(), "observer above the north pole");

    let rovers = tour::place_rovers(&mut surface, config.planet.seed, ROVER_COUNT);
    tour::drive_rovers(&mut surface, &rovers, ROVER_PACE_DEGREES);

    if let Some(first) = rovers.first().and_then(|name| surface.object(name)) {
        tour::walk_grid(&surface, first.position, GRID_WALK_STEPS);
    }

    info!("demo finished");
    ExitCode::SUCCESS
}
