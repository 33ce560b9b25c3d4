//! Layered noise elevation field evaluated at 3D directions.
//!
//! Elevation at a point `p` is `Σ amplitude_i · basis((p + offset) · frequency_i)`.
//! Sampling in 3D keeps the field continuous across cube-face seams.

use std::fmt;
use std::sync::Arc;

use glam::DVec3;
use noise::{NoiseFn, Value};

use crate::HeightProfile;

/// Seed of the default value-noise basis. The per-surface variation comes
/// from the profile offset, not from the basis.
pub const DEFAULT_NOISE_SEED: u32 = 0;

/// A scalar 3D noise function used as the basis of every layer.
pub trait NoiseBasis: Send + Sync {
    fn sample(&self, point: DVec3) -> f64;
}

impl<T> NoiseBasis for T
where
    T: NoiseFn<f64, 3> + Send + Sync,
{
    #[inline]
    fn sample(&self, point: DVec3) -> f64 {
        self.get(point.to_array())
    }
}

/// Value noise seeded with [`DEFAULT_NOISE_SEED`].
#[must_use]
pub fn default_basis() -> Arc<dyn NoiseBasis> {
    Arc::new(Value::new(DEFAULT_NOISE_SEED))
}

/// Pure elevation function: a [`HeightProfile`] over a shared noise basis.
#[derive(Clone)]
pub struct HeightField {
    profile: HeightProfile,
    basis: Arc<dyn NoiseBasis>,
}

impl HeightField {
    /// Build a field over an arbitrary basis.
    pub fn new(profile: HeightProfile, basis: Arc<dyn NoiseBasis>) -> Self {
        Self { profile, basis }
    }

    /// Build a field over [`default_basis`].
    #[must_use]
    pub fn value_noise(profile: HeightProfile) -> Self {
        Self::new(profile, default_basis())
    }

    #[must_use]
    pub fn profile(&self) -> &HeightProfile {
        &self.profile
    }

    /// Elevation at `point`. The profile offset is added before any
    /// frequency scaling; `point` is used as given (callers pass unit
    /// directions).
    #[must_use]
    pub fn elevation(&self, point: DVec3) -> f64 {
        let p = point + self.profile.offset();
        self.profile
            .layers()
            .iter()
            .map(|layer| layer.amplitude * self.basis.sample(p * layer.frequency))
            .sum()
    }

    /// Elevation along `direction`, normalized first. The zero vector
    /// evaluates at the offset itself.
    #[must_use]
    pub fn elevation_along(&self, direction: DVec3) -> f64 {
        self.elevation(direction.normalize_or_zero())
    }
}

impl fmt::Debug for HeightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeightField")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
