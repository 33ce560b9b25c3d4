//! The six faces of the cube-sphere and their fixed orientations.

use glam::{DMat3, DVec3};

/// The six faces of the cube that forms the planet grid.
///
/// Each variant corresponds to a face whose outward normal points
/// along the named axis direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face (north pole)
    PosZ = 4,
    /// −Z face (south pole)
    NegZ = 5,
}

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Position of this face in [`CubeFace::ALL`].
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite face (e.g., `PosX` → `NegX`).
    #[must_use]
    pub fn opposite(self) -> CubeFace {
        match self {
            CubeFace::PosX => CubeFace::NegX,
            CubeFace::NegX => CubeFace::PosX,
            CubeFace::PosY => CubeFace::NegY,
            CubeFace::NegY => CubeFace::PosY,
            CubeFace::PosZ => CubeFace::NegZ,
            CubeFace::NegZ => CubeFace::PosZ,
        }
    }

    /// Short tag used when naming per-face resources (`"XP"`, `"ZM"`, ...).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            CubeFace::PosX => "XP",
            CubeFace::NegX => "XM",
            CubeFace::PosY => "YP",
            CubeFace::NegY => "YM",
            CubeFace::PosZ => "ZP",
            CubeFace::NegZ => "ZM",
        }
    }

    /// Rotation taking the canonical face onto this face.
    ///
    /// The canonical face is the `+Y` face: a face-local point `(s, t)` in
    /// `[-1, 1]²` sits at `(-s, 1, t)` before rotation. `+Y` is the identity,
    /// `−X`, `−Y` and `+X` are 90°, 180° and 270° turns about Z, and `+Z`
    /// and `−Z` are 90° and 270° turns about X.
    #[must_use]
    pub fn orientation(self) -> DMat3 {
        match self {
            CubeFace::PosY => DMat3::IDENTITY,
            CubeFace::NegX => DMat3::from_cols(DVec3::Y, DVec3::NEG_X, DVec3::Z),
            CubeFace::NegY => DMat3::from_cols(DVec3::NEG_X, DVec3::NEG_Y, DVec3::Z),
            CubeFace::PosX => DMat3::from_cols(DVec3::NEG_Y, DVec3::X, DVec3::Z),
            CubeFace::PosZ => DMat3::from_cols(DVec3::X, DVec3::Z, DVec3::NEG_Y),
            CubeFace::NegZ => DMat3::from_cols(DVec3::X, DVec3::NEG_Z, DVec3::Y),
        }
    }

    /// Outward-pointing unit normal for this face.
    #[must_use]
    pub fn normal(self) -> DVec3 {
        self.orientation() * DVec3::Y
    }

    /// Tangent vector: direction of increasing `u` on this face.
    #[must_use]
    pub fn tangent(self) -> DVec3 {
        self.orientation() * DVec3::NEG_X
    }

    /// Bitangent vector: direction of increasing `v` on this face.
    #[must_use]
    pub fn bitangent(self) -> DVec3 {
        self.orientation() * DVec3::Z
    }
}
