//! The six linked face grids that make up the navigable planet surface.

use glam::DVec3;

use crate::cross_face::face_adjacency;
use crate::grid::FaceGrid;
use crate::neighbor::FaceDirection;
use crate::{CubeFace, FaceCell, TopologyError, locate_cell};

/// Six [`FaceGrid`]s of equal size, stored in [`CubeFace::ALL`] order and
/// linked to each other by face.
#[derive(Clone, Debug)]
pub struct CubeTopology {
    size: u32,
    grids: Vec<FaceGrid>,
}

impl CubeTopology {
    /// Build, link and validate six grids of `size × size` cells.
    pub fn new(size: u32) -> Result<Self, TopologyError> {
        let mut topology = Self::unlinked(size)?;
        topology.link_neighbors();
        topology.validate()?;
        tracing::debug!(size = topology.size, "cube topology linked");
        Ok(topology)
    }

    /// Allocate six grids without linking their edges.
    ///
    /// Stepping across a face edge fails with
    /// [`TopologyError::UnlinkedEdge`] until [`link_neighbors`](Self::link_neighbors)
    /// has been called.
    pub fn unlinked(size: u32) -> Result<Self, TopologyError> {
        let size = size.max(1);
        let mut grids = Vec::with_capacity(CubeFace::ALL.len());
        for face in CubeFace::ALL {
            grids.push(FaceGrid::new(face, size)?);
        }
        Ok(Self { size, grids })
    }

    /// Wire every edge of every grid to its neighbor using the fixed cube adjacency.
    pub fn link_neighbors(&mut self) {
        for grid in &mut self.grids {
            let face = grid.face();
            for edge in FaceDirection::ALL {
                grid.link(edge, face_adjacency(face, edge));
            }
        }
    }

    /// Check that every edge is linked and that every link is mirrored by
    /// the neighbor it points to.
    pub fn validate(&self) -> Result<(), TopologyError> {
        for grid in &self.grids {
            let face = grid.face();
            for edge in FaceDirection::ALL {
                let adj = grid
                    .neighbor(edge)
                    .ok_or(TopologyError::UnlinkedEdge { face, edge })?;
                let back = self.grid(adj.neighbor_face).neighbor(adj.neighbor_edge);
                let mirrored = back.is_some_and(|b| {
                    b.neighbor_face == face && b.neighbor_edge == edge && b.flipped == adj.flipped
                });
                if !mirrored {
                    return Err(TopologyError::AsymmetricLink { face, edge });
                }
            }
        }
        Ok(())
    }

    /// Cells per face side.
    #[inline]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn grid(&self, face: CubeFace) -> &FaceGrid {
        &self.grids[face.index()]
    }

    pub fn grid_mut(&mut self, face: CubeFace) -> &mut FaceGrid {
        &mut self.grids[face.index()]
    }

    /// All six grids in [`CubeFace::ALL`] order.
    pub fn grids(&self) -> impl Iterator<Item = &FaceGrid> {
        self.grids.iter()
    }

    /// The cell a direction falls in. `None` for the zero vector.
    #[must_use]
    pub fn locate(&self, dir: DVec3) -> Option<FaceCell> {
        locate_cell(dir, self.size)
    }

    /// The adjacent cell in `dir`, following the grid links across face edges.
    pub fn step(&self, cell: FaceCell, dir: FaceDirection) -> Result<FaceCell, TopologyError> {
        self.grid(cell.face).step(cell.x, cell.y, dir)
    }

    #[must_use]
    pub fn is_land(&self, cell: FaceCell) -> bool {
        self.grid(cell.face).is_land(cell.x, cell.y)
    }

    /// Unit direction through the center of `cell`.
    #[must_use]
    pub fn cell_direction(&self, cell: FaceCell) -> DVec3 {
        self.grid(cell.face).cell_direction(cell.x, cell.y)
    }

    /// Total number of land cells over all faces.
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.grids.iter().map(FaceGrid::land_count).sum()
    }
}
