//! Cross-face neighbor finding for cells at cube-face edges.
//!
//! When a cell sits at the boundary of a face grid, its neighbor in one
//! direction lies on a different face. This module encodes the cube's face
//! adjacency and the remapping of the along-edge coordinate across each seam.

use crate::neighbor::{FaceDirection, SameFaceNeighbor};
use crate::{CubeFace, FaceCell};

/// Describes the relationship between a face edge and its adjacent face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceEdgeAdjacency {
    /// The adjacent face.
    pub neighbor_face: CubeFace,
    /// Which edge of the neighbor face this connects to.
    pub neighbor_edge: FaceDirection,
    /// Whether the coordinate along the shared edge is reversed.
    /// If true, cell 0 along this edge meets the last cell of the neighbor edge.
    pub flipped: bool,
}

const fn link(neighbor_face: CubeFace, neighbor_edge: FaceDirection, flipped: bool) -> FaceEdgeAdjacency {
    FaceEdgeAdjacency {
        neighbor_face,
        neighbor_edge,
        flipped,
    }
}

/// The fixed adjacency of the cube: for each face and each edge, which face
/// is on the other side and how the along-edge coordinate transforms.
///
/// 6 faces × 4 edges gives 24 entries describing 12 physical edges. Every
/// entry is mirrored by the entry of its neighbor edge.
#[must_use]
pub fn face_adjacency(face: CubeFace, edge: FaceDirection) -> FaceEdgeAdjacency {
    use CubeFace::*;
    use FaceDirection::*;

    match (face, edge) {
        (PosX, East) => link(PosY, West, false),
        (PosX, West) => link(NegY, East, false),
        (PosX, North) => link(PosZ, West, true),
        (PosX, South) => link(NegZ, West, false),

        (NegX, East) => link(NegY, West, false),
        (NegX, West) => link(PosY, East, false),
        (NegX, North) => link(PosZ, East, false),
        (NegX, South) => link(NegZ, East, true),

        (PosY, East) => link(NegX, West, false),
        (PosY, West) => link(PosX, East, false),
        (PosY, North) => link(PosZ, South, false),
        (PosY, South) => link(NegZ, North, false),

        (NegY, East) => link(PosX, West, false),
        (NegY, West) => link(NegX, East, false),
        (NegY, North) => link(PosZ, North, true),
        (NegY, South) => link(NegZ, South, true),

        (PosZ, East) => link(NegX, North, false),
        (PosZ, West) => link(PosX, North, true),
        (PosZ, North) => link(NegY, North, true),
        (PosZ, South) => link(PosY, North, false),

        (NegZ, East) => link(NegX, South, true),
        (NegZ, West) => link(PosX, South, false),
        (NegZ, North) => link(PosY, South, false),
        (NegZ, South) => link(NegY, South, true),
    }
}

/// The cell entered on the neighbor face when stepping off `cell` across
/// the edge described by `adj` in direction `dir`.
///
/// `cell` is expected to lie on that edge of its `size × size` grid.
#[must_use]
pub fn entry_cell(cell: FaceCell, dir: FaceDirection, adj: FaceEdgeAdjacency, size: u32) -> FaceCell {
    let last = size.saturating_sub(1);

    let along = match dir {
        FaceDirection::North | FaceDirection::South => cell.x,
        FaceDirection::East | FaceDirection::West => cell.y,
    };
    let along = if adj.flipped { last - along.min(last) } else { along };

    let (nx, ny) = match adj.neighbor_edge {
        FaceDirection::North => (along, last),
        FaceDirection::South => (along, 0),
        FaceDirection::East => (last, along),
        FaceDirection::West => (0, along),
    };

    FaceCell::new(adj.neighbor_face, nx, ny)
}

impl FaceCell {
    /// Find the neighbor across a face boundary using the fixed cube
    /// adjacency.
    ///
    /// `self` must be at the edge of its face in direction `dir`.
    #[must_use]
    pub fn cross_face_neighbor(&self, dir: FaceDirection, size: u32) -> FaceCell {
        entry_cell(*self, dir, face_adjacency(self.face, dir), size)
    }

    /// The adjacent cell in `dir`, crossing onto another face when needed.
    #[must_use]
    pub fn neighbor(&self, dir: FaceDirection, size: u32) -> FaceCell {
        match self.same_face_neighbor(dir, size) {
            SameFaceNeighbor::Same(cell) => cell,
            SameFaceNeighbor::OffFace => self.cross_face_neighbor(dir, size),
        }
    }
}
