//! Cube-to-sphere projection: face coordinates to 3D directions.
//!
//! The grid uses the gnomonic (central) projection: a face point on the
//! `[-1, 1]` cube is pushed radially onto the sphere. This is the exact
//! inverse of [`locate`](crate::locate), which divides a direction by its
//! dominant component.

use glam::DVec3;

use crate::{CubeFace, FaceCell, FaceCoord};

/// Convert a [`FaceCoord`] to a point on the surface of the `[-1, 1]` cube.
///
/// The face center `(u=0.5, v=0.5)` maps to the face normal vector.
#[inline]
#[must_use]
pub fn face_coord_to_cube_point(fc: &FaceCoord) -> DVec3 {
    let s = 2.0 * fc.u - 1.0;
    let t = 2.0 * fc.v - 1.0;

    // Canonical +Y face point, rotated into place.
    fc.face.orientation() * DVec3::new(-s, 1.0, t)
}

/// Project a [`FaceCoord`] onto the unit sphere.
#[inline]
#[must_use]
pub fn face_coord_to_sphere(fc: &FaceCoord) -> DVec3 {
    face_coord_to_cube_point(fc).normalize()
}

/// Unit direction through the center of `cell` on a `size × size` grid.
#[must_use]
pub fn cell_center_direction(cell: FaceCell, size: u32) -> DVec3 {
    face_coord_to_sphere(&FaceCoord::cell_center(cell.face, size, cell.x, cell.y))
}

/// Unit direction through the center of cell `(x, y)` of `face`.
#[must_use]
pub fn cell_direction(face: CubeFace, size: u32, x: u32, y: u32) -> DVec3 {
    cell_center_direction(FaceCell::new(face, x, y), size)
}
