//! Walk-throughs of a generated surface: maps, placement, movement, navigation.

use std::path::Path;

use glam::DVec3;
use psphere_config::ExportConfig;
use psphere_cubesphere::FaceDirection;
use psphere_planet::{ExportError, Heading, MapType, MoveOutcome, PlacedObject, PlanetSurface};
use psphere_terrain::{random_unit_direction, surface_rng};
use tracing::{info, warn};

/// Exports the equirectangular map and the cubemap cross.
pub(crate) fn export_maps(surface: &PlanetSurface, export: &ExportConfig) -> Result<(), ExportError> {
    let dir: &Path = &export.output_dir;
    let flat = surface.export_map(
        export.map_width,
        export.map_height,
        MapType::Equirectangular,
        dir.join("surface_equirect.png"),
    )?;
    let cube = surface.export_map(
        export.cubemap_width,
        0,
        MapType::Cube,
        dir.join("surface_cube.png"),
    )?;
    info!(
        equirect = ?flat.dimensions(),
        cube = ?cube.dimensions(),
        colors = flat.unique_color_count(),
        "maps written to {}",
        dir.display()
    );
    Ok(())
}

/// Places rovers on random accessible land above sea level. Returns their
/// names.
pub(crate) fn place_rovers(surface: &mut PlanetSurface, seed: u64, count: usize) -> Vec<String> {
    let mut rng = surface_rng(seed ^ 0x5eed);
    let stats = *surface.elevation_stats();
    let mut names = Vec::with_capacity(count);
    let mut attempts = 0;

    while names.len() < count && attempts < count * 200 {
        attempts += 1;
        let direction = random_unit_direction(&mut rng);
        let elevation = surface.height_field().elevation(direction);
        if stats.is_water(elevation) || !surface.is_accessible(direction) {
            continue;
        }
        let (latitude, longitude) = psphere_planet::cartesian_to_spherical(direction);
        let rover = surface.place_on_ground("rover.mesh", None, latitude, longitude);
        info!(
            name = %rover.name,
            latitude,
            longitude,
            "rover landed"
        );
        names.push(rover.name.clone());
    }

    if names.len() < count {
        warn!(
            placed = names.len(),
            requested = count,
            "not enough accessible land for every rover"
        );
    }
    names
}

/// Drives each rover around a small square, refusing to enter water.
pub(crate) fn drive_rovers(surface: &mut PlanetSurface, names: &[String], pace: f64) {
    let stats = *surface.elevation_stats();
    let field = surface.height_field().clone();
    surface.set_collision_check(Box::new(move |object: &PlacedObject| {
        stats.is_water(field.elevation_along(object.position))
    }));

    let route = [Heading::North, Heading::East, Heading::South, Heading::West];
    for name in names {
        let mut moved = 0;
        let mut blocked = 0;
        for heading in route {
            match surface.move_object(name, heading, pace) {
                Ok(MoveOutcome::Moved) => moved += 1,
                Ok(MoveOutcome::Blocked) => blocked += 1,
                Ok(MoveOutcome::PoleLimited) => info!(%name, ?heading, "pole reached"),
                Err(e) => warn!(%name, "move failed: {e}"),
            }
        }
        info!(%name, moved, blocked, "rover route finished");
    }
    surface.clear_collision_check();
}

/// Steps across the grid from the first object along each direction and
/// reports how much land the walk crossed.
pub(crate) fn walk_grid(surface: &PlanetSurface, start: DVec3, steps: usize) {
    for dir in FaceDirection::ALL {
        let mut location = start;
        let mut land = 0;
        let mut faces = Vec::new();
        for _ in 0..steps {
            match surface.step(location, dir) {
                Ok(next) => location = next,
                Err(e) => {
                    warn!(?dir, "walk stopped: {e}");
                    break;
                }
            }
            if let Some(cell) = surface.locate(location) {
                if surface.cell_kind(cell).is_land() {
                    land += 1;
                }
                if faces.last() != Some(&cell.face) {
                    faces.push(cell.face);
                }
            }
        }
        info!(?dir, steps, land, ?faces, "grid walk");
    }
}
