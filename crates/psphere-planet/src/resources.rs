//! Per-surface generation inputs: seed, radius, water fraction, noise layers
//! and colours.

use glam::DVec3;
use psphere_terrain::{ColorPalette, HeightProfile};

/// Everything that shapes one planet surface apart from grid resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceParameters {
    /// Seed of the per-surface RNG.
    pub seed: u64,
    /// Sea-level radius in model units.
    pub radius: f64,
    /// Target share of the sphere at or below sea level, in `[0, 1]`.
    pub water_fraction: f64,
    pub amplitudes: Vec<f64>,
    pub frequencies: Vec<f64>,
    pub palette: ColorPalette,
}

impl Default for ResourceParameters {
    fn default() -> Self {
        let profile = HeightProfile::default();
        Self {
            seed: 0,
            radius: 100.0,
            water_fraction: 0.65,
            amplitudes: profile.layers().iter().map(|l| l.amplitude).collect(),
            frequencies: profile.layers().iter().map(|l| l.frequency).collect(),
            palette: ColorPalette::default(),
        }
    }
}

impl ResourceParameters {
    /// The height profile these parameters describe, translated by `offset`.
    #[must_use]
    pub fn profile(&self, offset: DVec3) -> HeightProfile {
        HeightProfile::new(&self.amplitudes, &self.frequencies, offset)
    }
}
