//! Sphere-to-cube inverse projection: recover face, UV and grid cell from a direction.

use glam::DVec3;

use crate::{CubeFace, FaceCell, FaceCoord};

/// Factor applied to tied components so that a point on a cube edge or
/// corner lands on exactly one face.
pub const TIE_BREAK_FACTOR: f64 = 0.9999;

/// Shorten tied components so a single axis dominates.
///
/// `|x| == |y|` shortens `y`; `|x| == |z|` or `|y| == |z|` shortens `z`.
/// All comparisons use the original magnitudes, so a corner ends up on an
/// X face.
fn break_ties(mut dir: DVec3) -> DVec3 {
    let a = dir.abs();
    if a.x == a.y {
        dir.y *= TIE_BREAK_FACTOR;
    }
    if a.x == a.z {
        dir.z *= TIE_BREAK_FACTOR;
    }
    if a.y == a.z {
        dir.z *= TIE_BREAK_FACTOR;
    }
    dir
}

/// Determine which cube face a direction vector belongs to.
///
/// The face is determined by the axis with the strictly largest absolute
/// component, after ties on cube edges and corners have been broken.
/// Returns `None` for the zero vector (and for non-finite input).
#[must_use]
pub fn direction_to_face(dir: DVec3) -> Option<CubeFace> {
    let dir = break_ties(dir);
    let DVec3 { x, y, z } = dir.abs();

    if x > y && x > z {
        Some(if dir.x < 0.0 { CubeFace::NegX } else { CubeFace::PosX })
    } else if y > x && y > z {
        Some(if dir.y < 0.0 { CubeFace::NegY } else { CubeFace::PosY })
    } else if z > x && z > y {
        Some(if dir.z < 0.0 { CubeFace::NegZ } else { CubeFace::PosZ })
    } else {
        None
    }
}

/// Convert a direction vector to a [`FaceCoord`].
///
/// The direction is scaled so its dominant component becomes `±1`, which
/// puts it on the cube surface, and the remaining two components are read
/// through the face's tangent frame. The direction does not need to be unit
/// length. Returns `None` for the zero vector.
#[must_use]
pub fn locate(dir: DVec3) -> Option<FaceCoord> {
    let face = direction_to_face(dir)?;
    let dir = break_ties(dir);

    let d = dir.dot(face.normal());
    let on_cube = dir / d;

    let s = on_cube.dot(face.tangent());
    let t = on_cube.dot(face.bitangent());

    Some(FaceCoord::new(face, (1.0 + s) * 0.5, (1.0 + t) * 0.5))
}

/// Convert a direction vector to the integer cell it falls in on a
/// `size × size` grid. Returns `None` for the zero vector.
#[must_use]
pub fn locate_cell(dir: DVec3, size: u32) -> Option<FaceCell> {
    locate(dir).map(|fc| fc.to_cell(size))
}
