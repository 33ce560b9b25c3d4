//! Surface and export error types.

use psphere_cubesphere::TopologyError;
use thiserror::Error;

/// Errors from generating, navigating or populating a planet surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The face grids could not be built or linked.
    #[error("topology error: {0}")]
    Topology(#[from] TopologyError),

    /// A buffer could not be allocated. The previous surface is left untouched.
    #[error("cannot allocate {bytes} bytes for the {what}")]
    Allocation { what: &'static str, bytes: usize },

    /// A zero (or non-finite) direction has no face and no cell.
    #[error("direction has no dominant axis")]
    DegenerateDirection,

    /// No placed object carries this name.
    #[error("no object named {0:?}")]
    UnknownObject(String),
}

/// Errors from writing a rendered map to disk.
///
/// The rendered [`SurfaceImage`](crate::SurfaceImage) stays valid when
/// saving fails.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
