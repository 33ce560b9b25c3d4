//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Planet generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "psphere", about = "Procedural cube-sphere planet generator")]
pub struct CliArgs {
    /// Surface seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cells per face side of the navigation grids.
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Share of the surface covered by water (0.0 - 1.0).
    #[arg(long)]
    pub water_fraction: Option<f64>,

    /// Sea-level radius.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Width of the exported equirectangular map.
    #[arg(long)]
    pub map_width: Option<u32>,

    /// Height of the exported equirectangular map.
    #[arg(long)]
    pub map_height: Option<u32>,

    /// Directory the maps are written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.planet.seed = seed;
        }
        if let Some(size) = args.grid_size {
            self.generation.grid_size = size;
        }
        if let Some(fraction) = args.water_fraction {
            self.planet.water_fraction = fraction;
        }
        if let Some(radius) = args.radius {
            self.planet.radius = radius;
        }
        if let Some(w) = args.map_width {
            self.export.map_width = w;
        }
        if let Some(h) = args.map_height {
            self.export.map_height = h;
        }
        if let Some(ref dir) = args.output_dir {
            self.export.output_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
