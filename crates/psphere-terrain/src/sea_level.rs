//! Sea-level calibration from a sampled elevation histogram.
//!
//! The sphere is sampled at random directions, the elevations are bucketed
//! between the observed minimum and maximum, and the sea level is read off
//! the first bucket whose cumulative count exceeds the requested water
//! fraction. The result is an empirical quantile, accurate to roughly one
//! bucket width.

use rand::Rng;

use crate::HeightField;
use crate::seed::random_unit_direction;

/// Sampled elevation range and the calibrated sea level.
///
/// `min ≤ sea_level ≤ max` always holds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElevationStats {
    pub min: f64,
    pub max: f64,
    pub sea_level: f64,
}

impl ElevationStats {
    /// Water is anything at or below sea level.
    #[inline]
    #[must_use]
    pub fn is_water(&self, elevation: f64) -> bool {
        elevation <= self.sea_level
    }
}

/// Equal-width histogram over `[min, max]` of a fixed sample set.
#[derive(Clone, Debug)]
pub struct ElevationHistogram {
    min: f64,
    max: f64,
    counts: Vec<u64>,
    total: u64,
}

impl ElevationHistogram {
    /// Bucket `samples` into `bucket_count` buckets (at least 2).
    ///
    /// An empty sample set yields a histogram over `[0, 0]`.
    #[must_use]
    pub fn from_samples(samples: &[f64], bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(2);
        let (min, max) = samples
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &e| match acc {
                None => Some((e, e)),
                Some((lo, hi)) => Some((lo.min(e), hi.max(e))),
            })
            .unwrap_or((0.0, 0.0));

        let mut histogram = Self {
            min,
            max,
            counts: vec![0; bucket_count],
            total: samples.len() as u64,
        };
        for &e in samples {
            let b = histogram.bucket(e);
            histogram.counts[b] += 1;
        }
        histogram
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Bucket index of `elevation`: `⌊(e − min) / (max − min) · (B − 0.5)⌋`,
    /// clamped to `[0, B − 1]`. A zero-width range puts everything in bucket 0.
    #[must_use]
    pub fn bucket(&self, elevation: f64) -> usize {
        let last = self.counts.len() - 1;
        let range = self.max - self.min;
        if range <= 0.0 {
            return 0;
        }
        let scaled = ((elevation - self.min) / range * (last as f64 + 0.5)).floor();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(last)
        }
    }

    /// Elevation represented by bucket `index`, mapped linearly back onto
    /// `[min, max]`. The last bucket is exactly `max`.
    #[must_use]
    pub fn bucket_elevation(&self, index: usize) -> f64 {
        let last = self.counts.len() - 1;
        if index >= last {
            return self.max;
        }
        (index as f64 / last as f64 * (self.max - self.min) + self.min).clamp(self.min, self.max)
    }

    /// The elevation at the first bucket whose cumulative count exceeds
    /// `total · water_fraction`. A fraction of 1 or more yields `max`.
    #[must_use]
    pub fn sea_level(&self, water_fraction: f64) -> f64 {
        if self.max - self.min <= 0.0 {
            return self.min;
        }
        let threshold = self.total as f64 * water_fraction;
        let mut cumulative = 0u64;
        for (i, &count) in self.counts.iter().enumerate() {
            cumulative += count;
            if cumulative as f64 > threshold {
                return self.bucket_elevation(i);
            }
        }
        self.max
    }

    /// Range and sea level as [`ElevationStats`].
    #[must_use]
    pub fn stats(&self, water_fraction: f64) -> ElevationStats {
        ElevationStats {
            min: self.min,
            max: self.max,
            sea_level: self.sea_level(water_fraction),
        }
    }
}

/// Draws elevation samples and derives [`ElevationStats`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeaLevelCalibrator {
    pub sample_count: usize,
    pub bucket_count: usize,
}

impl Default for SeaLevelCalibrator {
    fn default() -> Self {
        Self {
            sample_count: 40_000,
            bucket_count: 100,
        }
    }
}

impl SeaLevelCalibrator {
    #[must_use]
    pub fn new(sample_count: usize, bucket_count: usize) -> Self {
        Self {
            sample_count: sample_count.max(1),
            bucket_count: bucket_count.max(2),
        }
    }

    /// Elevations of `sample_count` random unit directions.
    pub fn sample(&self, field: &HeightField, rng: &mut impl Rng) -> Vec<f64> {
        (0..self.sample_count.max(1))
            .map(|_| field.elevation(random_unit_direction(rng)))
            .collect()
    }

    /// Sample the field and calibrate the sea level for `water_fraction`.
    pub fn calibrate(
        &self,
        field: &HeightField,
        rng: &mut impl Rng,
        water_fraction: f64,
    ) -> ElevationStats {
        let samples = self.sample(field, rng);
        let stats = ElevationHistogram::from_samples(&samples, self.bucket_count).stats(water_fraction);
        tracing::debug!(
            samples = samples.len(),
            buckets = self.bucket_count,
            min = stats.min,
            max = stats.max,
            sea_level = stats.sea_level,
            "sea level calibrated"
        );
        stats
    }
}
