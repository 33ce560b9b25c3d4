//! Planet surface orchestration: generation of the calibrated land grids,
//! navigation and accessibility queries, object placement and movement,
//! and map export.

mod error;
mod export;
mod objects;
mod placement;
mod render;
mod resources;
mod surface;

pub use error::{ExportError, SurfaceError};
pub use export::save_png;
pub use objects::{
    CollisionCheck, CollisionOutcome, Heading, MoveOutcome, ObjectRegistry, PlacedObject,
    name_stem,
};
pub use placement::{cartesian_to_spherical, ground_orientation, spherical_to_cartesian};
pub use render::{
    MapType, SurfaceImage, SurfacePainter, cubemap_tile, equirect_direction, render_cubemap,
    render_equirectangular, render_map,
};
pub use resources::ResourceParameters;
pub use surface::{GenerationParams, PlanetSurface};
