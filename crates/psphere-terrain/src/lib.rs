//! Planet elevation model: layered noise height field, seeded sampling,
//! histogram-based sea-level calibration, and elevation colouring.

mod color;
mod heightmap;
mod profile;
mod sea_level;
mod seed;

pub use color::{ColorPalette, Rgb};
pub use heightmap::{DEFAULT_NOISE_SEED, HeightField, NoiseBasis, default_basis};
pub use profile::{HeightProfile, NoiseLayer};
pub use sea_level::{ElevationHistogram, ElevationStats, SeaLevelCalibrator};
pub use seed::{random_translate, random_unit_direction, surface_rng};
