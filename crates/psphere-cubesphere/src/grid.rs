//! A square land/water grid bound to one cube face.

use glam::DVec3;

use crate::cross_face::{FaceEdgeAdjacency, entry_cell};
use crate::neighbor::{FaceDirection, SameFaceNeighbor};
use crate::projection::cell_direction;
use crate::{CubeFace, FaceCell, TopologyError};

/// Classification of a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// At or below sea level.
    #[default]
    Water,
    /// Above sea level.
    Land,
}

impl CellKind {
    #[inline]
    #[must_use]
    pub fn is_land(self) -> bool {
        self == CellKind::Land
    }
}

/// One face of the cube-sphere: a `size × size` land mask plus the links to
/// the four grids across its edges.
///
/// Neighbors are referenced by face, never owned. The enclosing
/// [`CubeTopology`](crate::CubeTopology) owns all six grids.
#[derive(Clone, Debug)]
pub struct FaceGrid {
    face: CubeFace,
    size: u32,
    cells: Vec<CellKind>,
    links: [Option<FaceEdgeAdjacency>; 4],
}

impl FaceGrid {
    /// Allocate an all-water grid for `face`. `size` is raised to at least 1.
    pub fn new(face: CubeFace, size: u32) -> Result<Self, TopologyError> {
        let size = size.max(1);
        let side = size as usize;
        let cells = side
            .checked_mul(side)
            .ok_or(TopologyError::Allocation { cells: usize::MAX })?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(cells)
            .map_err(|_| TopologyError::Allocation { cells })?;
        storage.resize(cells, CellKind::Water);

        Ok(Self {
            face,
            size,
            cells: storage,
            links: [None; 4],
        })
    }

    #[inline]
    #[must_use]
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// Cells per side.
    #[inline]
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    /// Classification of cell `(x, y)`. Out-of-range cells read as water.
    #[must_use]
    pub fn kind(&self, x: u32, y: u32) -> CellKind {
        if x >= self.size || y >= self.size {
            return CellKind::Water;
        }
        self.cells[self.offset(x, y)]
    }

    #[must_use]
    pub fn is_land(&self, x: u32, y: u32) -> bool {
        self.kind(x, y).is_land()
    }

    /// Store the classification of cell `(x, y)`. Out-of-range writes are ignored.
    pub fn set_kind(&mut self, x: u32, y: u32, kind: CellKind) {
        if x < self.size && y < self.size {
            let i = self.offset(x, y);
            self.cells[i] = kind;
        }
    }

    /// Number of land cells on this face.
    #[must_use]
    pub fn land_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_land()).count()
    }

    /// Unit direction through the center of cell `(x, y)`.
    #[must_use]
    pub fn cell_direction(&self, x: u32, y: u32) -> DVec3 {
        cell_direction(self.face, self.size, x, y)
    }

    /// Iterate every cell of the grid row by row.
    pub fn cells(&self) -> impl Iterator<Item = FaceCell> + '_ {
        (0..self.size).flat_map(move |y| (0..self.size).map(move |x| FaceCell::new(self.face, x, y)))
    }

    /// Link the edge `edge` to a neighbor grid.
    pub fn link(&mut self, edge: FaceDirection, adjacency: FaceEdgeAdjacency) {
        self.links[edge.index()] = Some(adjacency);
    }

    /// The link across `edge`, if one has been set.
    #[must_use]
    pub fn neighbor(&self, edge: FaceDirection) -> Option<FaceEdgeAdjacency> {
        self.links[edge.index()]
    }

    /// Step from `(x, y)` in `dir`, crossing onto the linked neighbor face
    /// when the step leaves this grid.
    pub fn step(&self, x: u32, y: u32, dir: FaceDirection) -> Result<FaceCell, TopologyError> {
        let cell = FaceCell::new(self.face, x.min(self.size - 1), y.min(self.size - 1));
        match cell.same_face_neighbor(dir, self.size) {
            SameFaceNeighbor::Same(next) => Ok(next),
            SameFaceNeighbor::OffFace => {
                let adjacency = self.neighbor(dir).ok_or(TopologyError::UnlinkedEdge {
                    face: self.face,
                    edge: dir,
                })?;
                Ok(entry_cell(cell, dir, adjacency, self.size))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cross_face::face_adjacency;

    #[test]
    fn test_new_grid_is_all_water() {
        let grid = FaceGrid::new(CubeFace::PosZ, 6).unwrap();
        assert_eq!(grid.size(), 6);
        assert_eq!(grid.land_count(), 0);
        assert_eq!(grid.cells().count(), 36);
    }

    #[test]
    fn test_zero_size_is_raised_to_one() {
        let grid = FaceGrid::new(CubeFace::NegX, 0).unwrap();
        assert_eq!(grid.size(), 1);
        assert_eq!(grid.kind(0, 0), CellKind::Water);
    }

    #[test]
    fn test_set_and_read_land() {
        let mut grid = FaceGrid::new(CubeFace::PosX, 4).unwrap();
        grid.set_kind(1, 2, CellKind::Land);
        assert!(grid.is_land(1, 2));
        assert!(!grid.is_land(2, 1), "x and y must not be swapped");
        assert_eq!(grid.land_count(), 1);
    }

    #[test]
    fn test_out_of_range_access_is_harmless() {
        let mut grid = FaceGrid::new(CubeFace::PosX, 4).unwrap();
        grid.set_kind(4, 0, CellKind::Land);
        assert_eq!(grid.land_count(), 0);
        assert!(!grid.is_land(0, 9));
    }

    #[test]
    fn test_huge_grid_reports_allocation_failure() {
        let err = FaceGrid::new(CubeFace::PosY, u32::MAX).unwrap_err();
        assert!(matches!(err, TopologyError::Allocation { .. }), "got {err:?}");
    }

    #[test]
    fn test_step_off_unlinked_edge_fails() {
        let grid = FaceGrid::new(CubeFace::PosY, 3).unwrap();
        assert_eq!(
            grid.step(2, 1, FaceDirection::East),
            Err(TopologyError::UnlinkedEdge {
                face: CubeFace::PosY,
                edge: FaceDirection::East
            })
        );
        // Interior steps need no link.
        assert_eq!(
            grid.step(1, 1, FaceDirection::East),
            Ok(FaceCell::new(CubeFace::PosY, 2, 1))
        );
    }

    #[test]
    fn test_step_uses_stored_link() {
        let mut grid = FaceGrid::new(CubeFace::PosY, 3).unwrap();
        grid.link(
            FaceDirection::North,
            face_adjacency(CubeFace::PosY, FaceDirection::North),
        );
        let next = grid.step(1, 2, FaceDirection::North).unwrap();
        assert_eq!(next, FaceCell::new(CubeFace::PosZ, 1, 0));
    }

    #[test]
    fn test_cell_direction_lies_on_own_face() {
        let grid = FaceGrid::new(CubeFace::NegZ, 5).unwrap();
        for cell in grid.cells() {
            let dir = grid.cell_direction(cell.x, cell.y);
            assert_eq!(crate::locate_cell(dir, 5), Some(cell));
        }
    }
}
