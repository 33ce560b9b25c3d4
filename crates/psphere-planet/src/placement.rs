//! Latitude/longitude conversions and surface-aligned orientation.

use glam::{DQuat, DVec3};

/// Unit direction for a latitude/longitude in degrees:
/// `(cos lat · cos lon, cos lat · sin lon, sin lat)`.
#[must_use]
pub fn spherical_to_cartesian(latitude: f64, longitude: f64) -> DVec3 {
    let (lat, lon) = (latitude.to_radians(), longitude.to_radians());
    DVec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// Latitude and longitude in degrees of `position`. Longitude is in
/// `(-180, 180]`; the zero vector reads as `(0, 0)`.
#[must_use]
pub fn cartesian_to_spherical(position: DVec3) -> (f64, f64) {
    let dir = position.normalize_or_zero();
    let latitude = dir.z.clamp(-1.0, 1.0).asin().to_degrees();
    let longitude = dir.y.atan2(dir.x).to_degrees();
    (latitude, longitude)
}

/// Rotation taking the object's up axis (+Y) onto the outward direction of
/// `position`.
#[must_use]
pub fn ground_orientation(position: DVec3) -> DQuat {
    match position.try_normalize() {
        Some(up) => DQuat::from_rotation_arc(DVec3::Y, up),
        None => DQuat::IDENTITY,
    }
}
