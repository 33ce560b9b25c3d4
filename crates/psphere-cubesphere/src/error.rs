//! Topology error types.

use thiserror::Error;

use crate::{CubeFace, FaceDirection};

/// Errors raised while building or navigating the six face grids.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// A step crossed an edge that was never linked to a neighbor grid.
    #[error("face {face:?} has no neighbor linked on its {edge:?} edge")]
    UnlinkedEdge { face: CubeFace, edge: FaceDirection },

    /// The neighbor across an edge does not link back to it.
    #[error("face {face:?} {edge:?} edge is not linked back by its neighbor")]
    AsymmetricLink { face: CubeFace, edge: FaceDirection },

    /// The cell storage for a face grid could not be allocated.
    #[error("cannot allocate a face grid of {cells} cells")]
    Allocation { cells: usize },
}
