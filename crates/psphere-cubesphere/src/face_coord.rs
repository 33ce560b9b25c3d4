//! Continuous and discrete coordinates on a cube face.

use crate::CubeFace;

/// A 2D coordinate on a cube face. `u` and `v` are in the range \[0, 1\].
///
/// `u = 0` is the face's `−tangent` edge and `v = 0` its `−bitangent` edge,
/// so `(0.5, 0.5)` is the face center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Which cube face this coordinate lies on.
    pub face: CubeFace,
    /// Horizontal parameter in \[0, 1\].
    pub u: f64,
    /// Vertical parameter in \[0, 1\].
    pub v: f64,
}

impl FaceCoord {
    /// Construct a `FaceCoord`, clamping `u` and `v` to \[0, 1\].
    #[must_use]
    pub fn new(face: CubeFace, u: f64, v: f64) -> Self {
        Self {
            face,
            u: u.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    /// The center of cell `(x, y)` on a `size × size` grid.
    #[must_use]
    pub fn cell_center(face: CubeFace, size: u32, x: u32, y: u32) -> Self {
        let n = f64::from(size);
        Self::new(face, (f64::from(x) + 0.5) / n, (f64::from(y) + 0.5) / n)
    }

    /// The grid cell containing this coordinate on a `size × size` grid.
    ///
    /// `u = 1` (or `v = 1`) would index one past the last cell; it is
    /// clamped onto the last row/column.
    #[must_use]
    pub fn to_cell(&self, size: u32) -> FaceCell {
        let n = f64::from(size);
        let last = f64::from(size.saturating_sub(1));
        FaceCell {
            face: self.face,
            x: (self.u * n).floor().clamp(0.0, last) as u32,
            y: (self.v * n).floor().clamp(0.0, last) as u32,
        }
    }
}

/// An integer cell on one face of a square cube-sphere grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceCell {
    /// Which cube face the cell lies on.
    pub face: CubeFace,
    /// Column index along the face tangent.
    pub x: u32,
    /// Row index along the face bitangent.
    pub y: u32,
}

impl FaceCell {
    #[must_use]
    pub fn new(face: CubeFace, x: u32, y: u32) -> Self {
        Self { face, x, y }
    }
}

impl std::fmt::Display for FaceCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}, {}]", self.face.tag(), self.x, self.y)
    }
}
