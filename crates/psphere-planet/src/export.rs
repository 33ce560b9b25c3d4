//! PNG export of rendered surface maps.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::{ExportError, SurfaceImage};

/// Write `image` to `path` as an 8-bit RGB PNG, creating missing parent
/// directories.
pub fn save_png(image: &SurfaceImage, path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    let encoder =
        PngEncoder::new_with_quality(writer, CompressionType::Default, FilterType::Adaptive);
    encoder.write_image(&image.pixels, image.width, image.height, ExtendedColorType::Rgb8)?;
    tracing::info!(path = %path.display(), width = image.width, height = image.height, "map exported");
    Ok(())
}
