//! Map synthesis: equirectangular and cubemap RGB images of the surface.

use glam::DVec3;
use psphere_cubesphere::{CubeFace, cell_direction};
use psphere_terrain::{ColorPalette, ElevationStats, HeightField, Rgb};

use crate::SurfaceError;
use crate::placement::spherical_to_cartesian;

/// Projection of an exported map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MapType {
    /// Longitude across, latitude down; top row is the north pole.
    #[default]
    Equirectangular,
    /// Six face tiles in a 4 × 3 cross.
    Cube,
}

/// A 2D image stored as row-major RGB bytes, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceImage {
    pub width: u32,
    pub height: u32,
    /// Length = `width * height * 3`.
    pub pixels: Vec<u8>,
}

impl SurfaceImage {
    /// A black (all-zero) image. Fails instead of aborting when the buffer
    /// cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3))
            .ok_or(SurfaceError::Allocation {
                what: "surface image",
                bytes: usize::MAX,
            })?;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(bytes)
            .map_err(|_| SurfaceError::Allocation {
                what: "surface image",
                bytes,
            })?;
        pixels.resize(bytes, 0);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.pixels[i..i + 3].copy_from_slice(&color.to_array());
    }

    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Count the number of distinct colours in the image.
    #[must_use]
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(3) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }
}

/// Colours directions from a height field, its calibrated statistics and a palette.
#[derive(Clone, Copy, Debug)]
pub struct SurfacePainter<'a> {
    pub field: &'a HeightField,
    pub stats: &'a ElevationStats,
    pub palette: &'a ColorPalette,
}

impl SurfacePainter<'_> {
    #[must_use]
    pub fn color(&self, direction: DVec3) -> Rgb {
        self.palette.color(self.field.elevation(direction), self.stats)
    }
}

/// Direction through the center of equirectangular pixel `(x, y)`.
///
/// Longitude runs `0 → 360°` left to right, latitude `+90° → −90°` top to bottom.
#[must_use]
pub fn equirect_direction(x: u32, y: u32, width: u32, height: u32) -> DVec3 {
    let longitude = (f64::from(x) + 0.5) / f64::from(width) * 360.0;
    let latitude = 90.0 - (f64::from(y) + 0.5) / f64::from(height) * 180.0;
    spherical_to_cartesian(latitude, longitude)
}

/// Render an equirectangular map. Dimensions are raised to at least 1.
pub fn render_equirectangular(
    painter: &SurfacePainter<'_>,
    width: u32,
    height: u32,
) -> Result<SurfaceImage, SurfaceError> {
    let (width, height) = (width.max(1), height.max(1));
    let mut image = SurfaceImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, painter.color(equirect_direction(x, y, width, height)));
        }
    }
    Ok(image)
}

/// Tile position (column, row) of each face in the cubemap cross.
///
/// The middle row runs +Y, −X, −Y, +X; +Z sits above +Y and −Z below it.
#[must_use]
pub fn cubemap_tile(face: CubeFace) -> (u32, u32) {
    match face {
        CubeFace::PosY => (0, 1),
        CubeFace::NegX => (1, 1),
        CubeFace::NegY => (2, 1),
        CubeFace::PosX => (3, 1),
        CubeFace::PosZ => (0, 0),
        CubeFace::NegZ => (0, 2),
    }
}

/// Render a cubemap `width` pixels wide and `width / 4 · 3` tall.
///
/// Each face is sampled at its own `width / 4` grid, independent of the
/// navigation grids. Tiles are drawn with the cell `v` axis pointing up.
/// Pixels outside the six tiles stay zero. `width` is raised to at least 4.
pub fn render_cubemap(painter: &SurfacePainter<'_>, width: u32) -> Result<SurfaceImage, SurfaceError> {
    let width = width.max(4);
    let tile = width / 4;
    let mut image = SurfaceImage::new(width, tile * 3)?;
    for face in CubeFace::ALL {
        let (col, row) = cubemap_tile(face);
        for y in 0..tile {
            for x in 0..tile {
                let color = painter.color(cell_direction(face, tile, x, y));
                image.set_pixel(col * tile + x, row * tile + (tile - 1 - y), color);
            }
        }
    }
    Ok(image)
}

/// Render either map type; `height` is ignored for [`MapType::Cube`].
pub fn render_map(
    painter: &SurfacePainter<'_>,
    width: u32,
    height: u32,
    map_type: MapType,
) -> Result<SurfaceImage, SurfaceError> {
    match map_type {
        MapType::Equirectangular => render_equirectangular(painter, width, height),
        MapType::Cube => render_cubemap(painter, width),
    }
}
