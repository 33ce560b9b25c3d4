//! Same-face neighbor stepping for grid cells.
//!
//! Given a [`FaceCell`] and a cardinal [`FaceDirection`], find the adjacent
//! cell on the same face, or report that the step leaves the face. Steps
//! across a face edge are handled by [`crate::cross_face`].

use crate::FaceCell;

/// Cardinal directions on a cube face in UV space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    /// Decreasing U (left).
    West,
    /// Increasing U (right).
    East,
    /// Decreasing V (down).
    South,
    /// Increasing V (up).
    North,
}

impl FaceDirection {
    /// All four cardinal directions.
    pub const ALL: [FaceDirection; 4] = [
        FaceDirection::North,
        FaceDirection::South,
        FaceDirection::East,
        FaceDirection::West,
    ];

    /// Slot of this direction in per-edge tables.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            FaceDirection::North => 0,
            FaceDirection::South => 1,
            FaceDirection::East => 2,
            FaceDirection::West => 3,
        }
    }

    #[must_use]
    pub fn opposite(self) -> FaceDirection {
        match self {
            FaceDirection::North => FaceDirection::South,
            FaceDirection::South => FaceDirection::North,
            FaceDirection::East => FaceDirection::West,
            FaceDirection::West => FaceDirection::East,
        }
    }
}

/// Result of a same-face step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameFaceNeighbor {
    /// The neighbor is on the same face.
    Same(FaceCell),
    /// The neighbor would be off this face's edge (needs cross-face lookup).
    OffFace,
}

impl FaceCell {
    /// Find the same-face neighbor in the given direction on a
    /// `size × size` grid.
    ///
    /// Returns [`SameFaceNeighbor::OffFace`] if the neighbor would be
    /// outside the grid.
    #[must_use]
    pub fn same_face_neighbor(&self, dir: FaceDirection, size: u32) -> SameFaceNeighbor {
        let (nx, ny) = match dir {
            FaceDirection::West => {
                if self.x == 0 {
                    return SameFaceNeighbor::OffFace;
                }
                (self.x - 1, self.y)
            }
            FaceDirection::East => {
                if self.x + 1 >= size {
                    return SameFaceNeighbor::OffFace;
                }
                (self.x + 1, self.y)
            }
            FaceDirection::South => {
                if self.y == 0 {
                    return SameFaceNeighbor::OffFace;
                }
                (self.x, self.y - 1)
            }
            FaceDirection::North => {
                if self.y + 1 >= size {
                    return SameFaceNeighbor::OffFace;
                }
                (self.x, self.y + 1)
            }
        };
        SameFaceNeighbor::Same(FaceCell::new(self.face, nx, ny))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubeFace;

    #[test]
    fn test_center_cell_has_4_same_face_neighbors() {
        let cell = FaceCell::new(CubeFace::PosX, 50, 50);
        for dir in FaceDirection::ALL {
            match cell.same_face_neighbor(dir, 100) {
                SameFaceNeighbor::Same(n) => assert_eq!(n.face, CubeFace::PosX),
                SameFaceNeighbor::OffFace => {
                    panic!("Center cell should have same-face neighbor in {dir:?}");
                }
            }
        }
    }

    #[test]
    fn test_edge_cell_has_3_same_face_neighbors() {
        let cell = FaceCell::new(CubeFace::PosY, 0, 50);
        assert_eq!(
            cell.same_face_neighbor(FaceDirection::West, 100),
            SameFaceNeighbor::OffFace
        );
        for dir in [FaceDirection::East, FaceDirection::North, FaceDirection::South] {
            assert!(matches!(
                cell.same_face_neighbor(dir, 100),
                SameFaceNeighbor::Same(_)
            ));
        }
    }

    #[test]
    fn test_corner_cell_has_2_same_face_neighbors() {
        let cell = FaceCell::new(CubeFace::NegZ, 0, 9);
        let off_count = FaceDirection::ALL
            .iter()
            .filter(|&&dir| cell.same_face_neighbor(dir, 10) == SameFaceNeighbor::OffFace)
            .count();
        assert_eq!(off_count, 2, "Corner cell should have 2 off-face directions");
    }

    #[test]
    fn test_neighbor_coordinates_correct() {
        let cell = FaceCell::new(CubeFace::PosZ, 100, 200);
        let size = 256;
        assert_eq!(
            cell.same_face_neighbor(FaceDirection::East, size),
            SameFaceNeighbor::Same(FaceCell::new(CubeFace::PosZ, 101, 200))
        );
        assert_eq!(
            cell.same_face_neighbor(FaceDirection::West, size),
            SameFaceNeighbor::Same(FaceCell::new(CubeFace::PosZ, 99, 200))
        );
        assert_eq!(
            cell.same_face_neighbor(FaceDirection::North, size),
            SameFaceNeighbor::Same(FaceCell::new(CubeFace::PosZ, 100, 201))
        );
        assert_eq!(
            cell.same_face_neighbor(FaceDirection::South, size),
            SameFaceNeighbor::Same(FaceCell::new(CubeFace::PosZ, 100, 199))
        );
    }

    #[test]
    fn test_direction_indices_are_distinct() {
        let mut seen = [false; 4];
        for dir in FaceDirection::ALL {
            assert!(!seen[dir.index()], "{dir:?} reuses slot {}", dir.index());
            seen[dir.index()] = true;
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in FaceDirection::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
