//! Deterministic per-surface random sources.
//!
//! Every surface owns its own [`ChaCha8Rng`] seeded from the caller's seed,
//! so several surfaces can be generated side by side without sharing state.

use glam::DVec3;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The RNG a surface draws its offset and calibration samples from.
#[must_use]
pub fn surface_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// The fixed translation applied to every evaluated point.
///
/// Each component is `((r mod 1000) − 500) / 100` for a fresh random `r`,
/// so it lies in `[-5.0, 4.99]`.
pub fn random_translate(rng: &mut impl RngCore) -> DVec3 {
    let mut component = || f64::from(rng.next_u32() % 1000) / 100.0 - 5.0;
    let x = component();
    let y = component();
    let z = component();
    DVec3::new(x, y, z)
}

/// A random unit direction: a random vector in `[-1, 1]³`, normalized.
/// Vectors too short to normalize are redrawn.
pub fn random_unit_direction(rng: &mut impl Rng) -> DVec3 {
    loop {
        let v = DVec3::new(
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
            rng.random_range(-1.0..=1.0),
        );
        if v.length_squared() > 1e-12 {
            return v.normalize();
        }
    }
}
