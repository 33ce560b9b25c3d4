//! Amplitude/frequency layers and the fixed offset that drive elevation.

use glam::DVec3;

/// One noise layer: `amplitude · basis(point · frequency)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseLayer {
    pub amplitude: f64,
    pub frequency: f64,
}

/// Ordered noise layers plus the fixed 3D offset added to every evaluated
/// point. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightProfile {
    layers: Vec<NoiseLayer>,
    offset: DVec3,
}

impl HeightProfile {
    /// Pair `amplitudes[i]` with `frequencies[i]`.
    ///
    /// Unpaired trailing entries of the longer list are dropped.
    #[must_use]
    pub fn new(amplitudes: &[f64], frequencies: &[f64], offset: DVec3) -> Self {
        if amplitudes.len() != frequencies.len() {
            tracing::warn!(
                amplitudes = amplitudes.len(),
                frequencies = frequencies.len(),
                "amplitude and frequency lists differ in length, extra entries ignored"
            );
        }
        let layers = amplitudes
            .iter()
            .zip(frequencies)
            .map(|(&amplitude, &frequency)| NoiseLayer {
                amplitude,
                frequency,
            })
            .collect();
        Self { layers, offset }
    }

    /// A profile with no layers: elevation is 0 everywhere.
    #[must_use]
    pub fn flat() -> Self {
        Self {
            layers: Vec::new(),
            offset: DVec3::ZERO,
        }
    }

    #[must_use]
    pub fn layers(&self) -> &[NoiseLayer] {
        &self.layers
    }

    /// The fixed translation applied before every evaluation.
    #[must_use]
    pub fn offset(&self) -> DVec3 {
        self.offset
    }

    /// Upper bound of `|elevation|` for a basis bounded by 1.
    #[must_use]
    pub fn max_amplitude(&self) -> f64 {
        self.layers.iter().map(|l| l.amplitude.abs()).sum()
    }
}

impl Default for HeightProfile {
    fn default() -> Self {
        Self::new(&[0.02, 0.01, 0.005], &[1.5, 4.0, 12.0], DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_pair_in_order() {
        let profile = HeightProfile::new(&[1.0, 0.5], &[2.0, 4.0], DVec3::ONE);
        assert_eq!(
            profile.layers(),
            &[
                NoiseLayer {
                    amplitude: 1.0,
                    frequency: 2.0
                },
                NoiseLayer {
                    amplitude: 0.5,
                    frequency: 4.0
                }
            ]
        );
        assert_eq!(profile.offset(), DVec3::ONE);
    }

    #[test]
    fn test_mismatched_lengths_truncate() {
        let profile = HeightProfile::new(&[1.0, 0.5, 0.25], &[2.0], DVec3::ZERO);
        assert_eq!(profile.layers().len(), 1);
    }

    #[test]
    fn test_max_amplitude_sums_magnitudes() {
        let profile = HeightProfile::new(&[1.0, -0.5], &[1.0, 2.0], DVec3::ZERO);
        assert!((profile.max_amplitude() - 1.5).abs() < 1e-12);
        assert_eq!(HeightProfile::flat().max_amplitude(), 0.0);
    }
}
