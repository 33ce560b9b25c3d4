//! Conversion from the persisted configuration to generation inputs.

use psphere_config::Config;
use psphere_planet::{GenerationParams, ResourceParameters};
use psphere_terrain::{ColorPalette, Rgb};

pub(crate) fn generation_params(config: &Config) -> GenerationParams {
    let g = &config.generation;
    GenerationParams {
        iterations: g.mesh_iterations,
        grid_size: g.grid_size,
        texture_width: g.texture_width,
        texture_height: g.texture_height,
        sample_count: g.sample_count,
        bucket_count: g.bucket_count,
    }
}

fn band(colors: [[u8; 3]; 2]) -> [Rgb; 2] {
    colors.map(Rgb::from)
}

pub(crate) fn resource_parameters(config: &Config) -> ResourceParameters {
    let p = &config.planet;
    ResourceParameters {
        seed: p.seed,
        radius: p.radius,
        water_fraction: p.water_fraction,
        amplitudes: p.amplitudes.clone(),
        frequencies: p.frequencies.clone(),
        palette: ColorPalette {
            water: band(p.water_colors),
            terrain: band(p.terrain_colors),
            mountain: band(p.mountain_colors),
            mountain_fraction: p.mountain_fraction,
        },
    }
}
