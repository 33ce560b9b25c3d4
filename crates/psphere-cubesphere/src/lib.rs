//! Cube-sphere grid model: six oriented face grids, the gnomonic projection
//! between directions and cells, and seam-free navigation across face edges.

mod cross_face;
mod cube_face;
mod error;
mod face_coord;
mod grid;
mod inverse;
mod neighbor;
mod projection;
mod topology;

pub use cross_face::{FaceEdgeAdjacency, entry_cell, face_adjacency};
pub use cube_face::CubeFace;
pub use error::TopologyError;
pub use face_coord::{FaceCell, FaceCoord};
pub use grid::{CellKind, FaceGrid};
pub use inverse::{TIE_BREAK_FACTOR, direction_to_face, locate, locate_cell};
pub use neighbor::{FaceDirection, SameFaceNeighbor};
pub use projection::{
    cell_center_direction, cell_direction, face_coord_to_cube_point, face_coord_to_sphere,
};
pub use topology::CubeTopology;
