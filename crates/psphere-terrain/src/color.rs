//! Elevation-to-colour mapping with water, terrain and mountain bands.

use crate::ElevationStats;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    #[must_use]
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Two-colour gradients for each elevation band.
///
/// Land above `sea + (max − sea) · mountain_fraction` is mountain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPalette {
    pub water: [Rgb; 2],
    pub terrain: [Rgb; 2],
    pub mountain: [Rgb; 2],
    pub mountain_fraction: f64,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            water: [Rgb::new(0, 20, 90), Rgb::new(30, 110, 200)],
            terrain: [Rgb::new(40, 120, 40), Rgb::new(150, 140, 80)],
            mountain: [Rgb::new(120, 100, 80), Rgb::new(255, 255, 255)],
            mountain_fraction: 0.5,
        }
    }
}

/// Position of `e` within `[lo, hi]`; a zero-width band maps to 0.
fn band_position(e: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo { ((e - lo) / (hi - lo)).clamp(0.0, 1.0) } else { 0.0 }
}

impl ColorPalette {
    /// Elevation at which the terrain band gives way to mountains.
    #[must_use]
    pub fn mountain_line(&self, stats: &ElevationStats) -> f64 {
        let f = self.mountain_fraction.clamp(0.0, 1.0);
        stats.sea_level + (stats.max - stats.sea_level) * f
    }

    /// Colour of `elevation` given the calibrated range and sea level.
    #[must_use]
    pub fn color(&self, elevation: f64, stats: &ElevationStats) -> Rgb {
        if stats.is_water(elevation) {
            let t = band_position(elevation, stats.min, stats.sea_level);
            return self.water[0].lerp(self.water[1], t);
        }
        let line = self.mountain_line(stats);
        if elevation <= line {
            let t = band_position(elevation, stats.sea_level, line);
            self.terrain[0].lerp(self.terrain[1], t)
        } else {
            let t = band_position(elevation, line, stats.max);
            self.mountain[0].lerp(self.mountain[1], t)
        }
    }

    /// Whether `color` is one of the water gradient's colours.
    #[must_use]
    pub fn is_water_color(&self, color: Rgb) -> bool {
        let [lo, hi] = self.water;
        let within = |c: u8, a: u8, b: u8| a.min(b) <= c && c <= a.max(b);
        within(color.r, lo.r, hi.r) && within(color.g, lo.g, hi.g) && within(color.b, lo.b, hi.b)
    }
}
