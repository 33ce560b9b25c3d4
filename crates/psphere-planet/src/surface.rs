//! The planet surface: calibrated height field, six linked land grids,
//! surface texture and the objects placed on it.
//!
//! Generation runs sampling → calibration → grid construction and linking →
//! land-mask fill → texture synthesis. Everything is built into fresh
//! values first and only then swapped in, so a failed regeneration leaves
//! the previous surface intact.

use std::path::Path;
use std::sync::Arc;

use glam::DVec3;
use psphere_cubesphere::{CellKind, CubeFace, CubeTopology, FaceCell, FaceDirection, TopologyError};
use psphere_terrain::{
    ElevationStats, HeightField, NoiseBasis, SeaLevelCalibrator, default_basis, random_translate,
    surface_rng,
};
use tracing::{info, warn};

use crate::export::save_png;
use crate::objects::{CollisionCheck, Heading, MoveOutcome, ObjectRegistry, PlacedObject};
use crate::placement::{cartesian_to_spherical, ground_orientation, spherical_to_cartesian};
use crate::render::{MapType, SurfaceImage, SurfacePainter, render_equirectangular, render_map};
use crate::{ExportError, ResourceParameters, SurfaceError};

/// Resolution and sampling settings for one generation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationParams {
    /// Subdivision count handed to the external LOD mesh builder (at least 3).
    pub iterations: u32,
    /// Cells per face side of the navigation grids (at least 2).
    pub grid_size: u32,
    /// Surface texture size (each at least 1).
    pub texture_width: u32,
    pub texture_height: u32,
    /// Random directions drawn for sea-level calibration.
    pub sample_count: usize,
    /// Histogram buckets used for calibration.
    pub bucket_count: usize,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            iterations: 64,
            grid_size: 256,
            texture_width: 512,
            texture_height: 256,
            sample_count: 40_000,
            bucket_count: 100,
        }
    }
}

impl GenerationParams {
    /// Raise out-of-range settings to their minimums.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut p = self;
        if p.iterations < 3 {
            warn!(requested = p.iterations, "mesh iterations raised to 3");
            p.iterations = 3;
        }
        if p.grid_size < 2 {
            warn!(requested = p.grid_size, "grid size raised to 2");
            p.grid_size = 2;
        }
        if p.texture_width == 0 || p.texture_height == 0 {
            warn!(
                width = p.texture_width,
                height = p.texture_height,
                "zero texture dimension raised to 1"
            );
            p.texture_width = p.texture_width.max(1);
            p.texture_height = p.texture_height.max(1);
        }
        if p.sample_count == 0 {
            warn!("sample count raised to 1");
            p.sample_count = 1;
        }
        if p.bucket_count < 2 {
            warn!(requested = p.bucket_count, "bucket count raised to 2");
            p.bucket_count = 2;
        }
        p
    }
}

/// Per-generation state, built completely before it replaces the old one.
struct Generated {
    params: GenerationParams,
    resources: ResourceParameters,
    field: HeightField,
    stats: ElevationStats,
    topology: CubeTopology,
    texture: SurfaceImage,
}

fn build(
    params: GenerationParams,
    resources: ResourceParameters,
    basis: Arc<dyn NoiseBasis>,
) -> Result<Generated, SurfaceError> {
    let params = params.normalized();
    let mut rng = surface_rng(resources.seed);
    let offset = random_translate(&mut rng);
    let field = HeightField::new(resources.profile(offset), basis);

    let calibrator = SeaLevelCalibrator::new(params.sample_count, params.bucket_count);
    let stats = calibrator.calibrate(&field, &mut rng, resources.water_fraction);

    let mut topology = CubeTopology::new(params.grid_size).map_err(|e| match e {
        TopologyError::Allocation { cells } => SurfaceError::Allocation {
            what: "face grid",
            bytes: cells.saturating_mul(std::mem::size_of::<CellKind>()),
        },
        other => SurfaceError::Topology(other),
    })?;
    fill_land_mask(&mut topology, &field, &stats);

    let painter = SurfacePainter {
        field: &field,
        stats: &stats,
        palette: &resources.palette,
    };
    let texture = render_equirectangular(&painter, params.texture_width, params.texture_height)?;

    info!(
        seed = resources.seed,
        grid_size = params.grid_size,
        sea_level = stats.sea_level,
        land_cells = topology.land_count(),
        "planet surface generated"
    );

    Ok(Generated {
        params,
        resources,
        field,
        stats,
        topology,
        texture,
    })
}

fn classify_elevation(elevation: f64, stats: &ElevationStats) -> CellKind {
    if stats.is_water(elevation) {
        CellKind::Water
    } else {
        CellKind::Land
    }
}

fn fill_land_mask(topology: &mut CubeTopology, field: &HeightField, stats: &ElevationStats) {
    let size = topology.size();
    for face in CubeFace::ALL {
        let grid = topology.grid_mut(face);
        for y in 0..size {
            for x in 0..size {
                let elevation = field.elevation(grid.cell_direction(x, y));
                grid.set_kind(x, y, classify_elevation(elevation, stats));
            }
        }
    }
}

/// A generated planet with its navigation grids and placed objects.
pub struct PlanetSurface {
    generated: Generated,
    basis: Arc<dyn NoiseBasis>,
    objects: ObjectRegistry,
    observer: DVec3,
    collision: Option<Box<dyn CollisionCheck>>,
}

impl PlanetSurface {
    /// Generate a surface over the default value-noise basis.
    pub fn generate(
        params: GenerationParams,
        resources: ResourceParameters,
    ) -> Result<Self, SurfaceError> {
        Self::generate_with_basis(params, resources, default_basis())
    }

    /// Generate a surface whose elevation layers sample `basis`.
    pub fn generate_with_basis(
        params: GenerationParams,
        resources: ResourceParameters,
        basis: Arc<dyn NoiseBasis>,
    ) -> Result<Self, SurfaceError> {
        let generated = build(params, resources, Arc::clone(&basis))?;
        Ok(Self {
            generated,
            basis,
            objects: ObjectRegistry::new(),
            observer: DVec3::ZERO,
            collision: None,
        })
    }

    /// Rebuild the surface with new settings. On failure the current surface
    /// is unchanged. Placed objects and the observer are kept.
    pub fn regenerate(
        &mut self,
        params: GenerationParams,
        resources: ResourceParameters,
    ) -> Result<(), SurfaceError> {
        let generated = build(params, resources, Arc::clone(&self.basis))?;
        self.generated = generated;
        Ok(())
    }

    #[must_use]
    pub fn params(&self) -> &GenerationParams {
        &self.generated.params
    }

    #[must_use]
    pub fn resources(&self) -> &ResourceParameters {
        &self.generated.resources
    }

    #[must_use]
    pub fn elevation_stats(&self) -> &ElevationStats {
        &self.generated.stats
    }

    #[must_use]
    pub fn height_field(&self) -> &HeightField {
        &self.generated.field
    }

    #[must_use]
    pub fn topology(&self) -> &CubeTopology {
        &self.generated.topology
    }

    /// The equirectangular texture rendered during generation.
    #[must_use]
    pub fn texture(&self) -> &SurfaceImage {
        &self.generated.texture
    }

    #[must_use]
    pub fn mesh_iterations(&self) -> u32 {
        self.generated.params.iterations
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.generated.resources.radius
    }

    /// The cell `direction` falls in. `None` for the zero vector.
    #[must_use]
    pub fn locate(&self, direction: DVec3) -> Option<FaceCell> {
        self.generated.topology.locate(direction)
    }

    /// Land or water by evaluating the height field at the cell center.
    #[must_use]
    pub fn classify(&self, face: CubeFace, x: u32, y: u32) -> CellKind {
        let g = &self.generated;
        let direction = g.topology.grid(face).cell_direction(x, y);
        classify_elevation(g.field.elevation(direction), &g.stats)
    }

    /// Land or water as stored in the land mask.
    #[must_use]
    pub fn cell_kind(&self, cell: FaceCell) -> CellKind {
        self.generated.topology.grid(cell.face).kind(cell.x, cell.y)
    }

    /// Radial distance of the terrain along `direction`: `radius · (1 + elevation)`.
    /// The zero vector has height 0.
    #[must_use]
    pub fn surface_height(&self, direction: DVec3) -> f64 {
        match direction.try_normalize() {
            Some(dir) => self.radius() * (1.0 + self.generated.field.elevation(dir)),
            None => 0.0,
        }
    }

    pub fn set_observer_position(&mut self, position: DVec3) {
        self.observer = position;
    }

    #[must_use]
    pub fn observer_position(&self) -> DVec3 {
        self.observer
    }

    /// Height of the observer above the terrain; negative when inside it.
    #[must_use]
    pub fn observer_distance(&self) -> f64 {
        self.observer.length() - self.surface_height(self.observer)
    }

    /// A location is accessible when it is land and no placed object
    /// occupies its cell. An object sitting at the center (no cell of its
    /// own) makes every location inaccessible.
    #[must_use]
    pub fn is_accessible(&self, location: DVec3) -> bool {
        let Some(cell) = self.locate(location) else {
            return false;
        };
        let occupied = self
            .objects
            .iter()
            .any(|object| self.locate(object.position).is_none_or(|c| c == cell));
        !occupied && self.generated.topology.is_land(cell)
    }

    /// Position (at sea-level radius) of the cell next to `location` in `dir`,
    /// crossing face edges as needed.
    pub fn step(&self, location: DVec3, dir: FaceDirection) -> Result<DVec3, SurfaceError> {
        let topology = &self.generated.topology;
        let cell = topology
            .locate(location)
            .ok_or(SurfaceError::DegenerateDirection)?;
        let next = topology.step(cell, dir)?;
        Ok(topology.cell_direction(next) * self.radius())
    }

    /// Install the collision check consulted by [`move_object`](Self::move_object).
    pub fn set_collision_check(&mut self, check: Box<dyn CollisionCheck>) {
        self.collision = Some(check);
    }

    pub fn clear_collision_check(&mut self) {
        self.collision = None;
    }

    /// Place an object at an explicit model-space position. The name
    /// defaults to the mesh name.
    pub fn place_at_position(
        &mut self,
        mesh: &str,
        name: Option<&str>,
        position: DVec3,
    ) -> &PlacedObject {
        self.objects
            .insert(name.unwrap_or(mesh), mesh, position, glam::DQuat::IDENTITY)
    }

    /// Place an object at `distance` from the center along a
    /// latitude/longitude. `None` or `0` means the sea-level radius.
    pub fn place_at_spherical(
        &mut self,
        mesh: &str,
        name: Option<&str>,
        latitude: f64,
        longitude: f64,
        distance: Option<f64>,
    ) -> &PlacedObject {
        let distance = match distance {
            Some(d) if d != 0.0 => d,
            _ => self.radius(),
        };
        let position = spherical_to_cartesian(latitude, longitude) * distance;
        self.place_at_position(mesh, name, position)
    }

    /// Place an object on the terrain at a latitude/longitude, oriented
    /// with its up axis along the surface normal.
    pub fn place_on_ground(
        &mut self,
        mesh: &str,
        name: Option<&str>,
        latitude: f64,
        longitude: f64,
    ) -> &PlacedObject {
        let direction = spherical_to_cartesian(latitude, longitude);
        let position = direction * self.surface_height(direction);
        self.objects.insert(
            name.unwrap_or(mesh),
            mesh,
            position,
            ground_orientation(position),
        )
    }

    /// Move an object `pace` degrees along `heading`, snapped to the ground.
    ///
    /// The collision check sees the object at its new position; a collision
    /// rolls the position back.
    pub fn move_object(
        &mut self,
        name: &str,
        heading: Heading,
        pace: f64,
    ) -> Result<MoveOutcome, SurfaceError> {
        let current = self
            .objects
            .get(name)
            .ok_or_else(|| SurfaceError::UnknownObject(name.to_owned()))?;
        let (old_position, old_orientation) = (current.position, current.orientation);

        let (mut latitude, mut longitude) = cartesian_to_spherical(old_position);
        match heading {
            Heading::North => latitude += pace,
            Heading::South => latitude -= pace,
            Heading::East => longitude += pace,
            Heading::West => longitude -= pace,
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Ok(MoveOutcome::PoleLimited);
        }

        let direction = spherical_to_cartesian(latitude, longitude);
        let new_position = direction * self.surface_height(direction);
        let new_orientation = ground_orientation(new_position);

        let Some(object) = self.objects.get_mut(name) else {
            return Err(SurfaceError::UnknownObject(name.to_owned()));
        };
        object.position = new_position;
        object.orientation = new_orientation;

        let collided = self
            .collision
            .as_ref()
            .is_some_and(|check| check.check_collision(object).collided);
        if collided {
            object.position = old_position;
            object.orientation = old_orientation;
            return Ok(MoveOutcome::Blocked);
        }
        Ok(MoveOutcome::Moved)
    }

    /// All placed objects in placement order.
    #[must_use]
    pub fn objects(&self) -> &[PlacedObject] {
        self.objects.as_slice()
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&PlacedObject> {
        self.objects.get(name)
    }

    #[must_use]
    pub fn contains_object(&self, name: &str) -> bool {
        self.objects.contains(name)
    }

    /// Render a map of the surface.
    pub fn render_map(
        &self,
        width: u32,
        height: u32,
        map_type: MapType,
    ) -> Result<SurfaceImage, SurfaceError> {
        let g = &self.generated;
        let painter = SurfacePainter {
            field: &g.field,
            stats: &g.stats,
            palette: &g.resources.palette,
        };
        render_map(&painter, width, height, map_type)
    }

    /// Render a map and write it as a PNG. `height` is ignored for
    /// [`MapType::Cube`].
    pub fn export_map(
        &self,
        width: u32,
        height: u32,
        map_type: MapType,
        path: impl AsRef<Path>,
    ) -> Result<SurfaceImage, ExportError> {
        let image = self.render_map(width, height, map_type)?;
        save_png(&image, path.as_ref())?;
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Elevation equals the sampled z: north is high, south is low.
    struct ZRamp;

    impl noise::NoiseFn<f64, 3> for ZRamp {
        fn get(&self, point: [f64; 3]) -> f64 {
            point[2]
        }
    }

    fn small_params(grid_size: u32) -> GenerationParams {
        GenerationParams {
            iterations: 8,
            grid_size,
            texture_width: 16,
            texture_height: 8,
            sample_count: 4_000,
            bucket_count: 50,
        }
    }

    fn flat_resources() -> ResourceParameters {
        ResourceParameters {
            amplitudes: vec![0.0],
            frequencies: vec![1.0],
            water_fraction: 0.5,
            ..ResourceParameters::default()
        }
    }

    fn z_surface(grid_size: u32) -> PlanetSurface {
        let resources = ResourceParameters {
            amplitudes: vec![0.1],
            frequencies: vec![1.0],
            water_fraction: 0.5,
            ..ResourceParameters::default()
        };
        PlanetSurface::generate_with_basis(small_params(grid_size), resources, Arc::new(ZRamp))
            .unwrap()
    }

    #[test]
    fn test_flat_profile_is_all_water() {
        let surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        let stats = surface.elevation_stats();
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 0.0);
        assert_eq!(stats.sea_level, 0.0);
        assert_eq!(surface.topology().land_count(), 0);
        assert!(!surface.is_accessible(DVec3::X));
    }

    #[test]
    fn test_invalid_settings_are_clamped() {
        let params = GenerationParams {
            iterations: 0,
            grid_size: 0,
            texture_width: 0,
            texture_height: 0,
            sample_count: 0,
            bucket_count: 0,
        };
        let surface = PlanetSurface::generate(params, flat_resources()).unwrap();
        assert_eq!(surface.mesh_iterations(), 3);
        assert_eq!(surface.topology().size(), 2);
        assert_eq!(surface.texture().dimensions(), (1, 1));
    }

    #[test]
    fn test_land_mask_matches_direct_classification() {
        let resources = ResourceParameters {
            seed: 17,
            ..ResourceParameters::default()
        };
        let surface = PlanetSurface::generate(small_params(8), resources).unwrap();
        let stats = *surface.elevation_stats();
        assert!(stats.min <= stats.sea_level && stats.sea_level <= stats.max);
        for grid in surface.topology().grids() {
            for cell in grid.cells() {
                let direct = surface.classify(cell.face, cell.x, cell.y);
                assert_eq!(surface.cell_kind(cell), direct, "mask mismatch at {cell}");
                let elevation = surface
                    .height_field()
                    .elevation(grid.cell_direction(cell.x, cell.y));
                assert_eq!(direct == CellKind::Water, elevation <= stats.sea_level);
            }
        }
    }

    #[test]
    fn test_same_seed_same_surface() {
        let a = PlanetSurface::generate(small_params(6), ResourceParameters::default()).unwrap();
        let b = PlanetSurface::generate(small_params(6), ResourceParameters::default()).unwrap();
        assert_eq!(a.elevation_stats(), b.elevation_stats());
        assert_eq!(a.texture(), b.texture());
    }

    #[test]
    fn test_surface_height_and_observer() {
        let surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        let r = surface.radius();
        assert!((surface.surface_height(DVec3::new(0.0, 5.0, 0.0)) - r).abs() < 1e-9);
        assert_eq!(surface.surface_height(DVec3::ZERO), 0.0);

        let mut surface = surface;
        surface.set_observer_position(DVec3::new(0.0, 0.0, 2.0 * r));
        assert!((surface.observer_distance() - r).abs() < 1e-9);
        surface.set_observer_position(DVec3::new(0.5 * r, 0.0, 0.0));
        assert!(surface.observer_distance() < 0.0, "inside the terrain is negative");
    }

    #[test]
    fn test_accessibility_respects_water_and_occupancy() {
        let mut surface = z_surface(8);
        let north = DVec3::Z;
        let south = DVec3::NEG_Z;
        assert!(surface.is_accessible(north));
        assert!(!surface.is_accessible(south), "water is never accessible");
        assert!(!surface.is_accessible(DVec3::ZERO));

        let r = surface.radius();
        surface.place_at_position("rover.mesh", None, north * r);
        assert!(!surface.is_accessible(north), "occupied cell");

        surface.place_at_position("buoy.mesh", None, south * r);
        assert!(!surface.is_accessible(south));
    }

    #[test]
    fn test_object_at_center_blocks_accessibility() {
        let mut surface = z_surface(8);
        assert!(surface.is_accessible(DVec3::Z));
        surface.place_at_position("core.mesh", None, DVec3::ZERO);
        assert!(!surface.is_accessible(DVec3::Z));
        assert!(!surface.is_accessible(DVec3::new(0.3, 0.2, 1.0)));
    }

    #[test]
    fn test_step_crosses_faces_and_rejects_zero() {
        let surface = z_surface(4);
        let r = surface.radius();
        // Last column of +X stepping east lands on +Y.
        let start = surface
            .topology()
            .cell_direction(FaceCell::new(CubeFace::PosX, 3, 1));
        let next = surface.step(start * r, FaceDirection::East).unwrap();
        assert!((next.length() - r).abs() < 1e-9);
        assert_eq!(surface.locate(next).unwrap().face, CubeFace::PosY);

        assert!(matches!(
            surface.step(DVec3::ZERO, FaceDirection::North),
            Err(SurfaceError::DegenerateDirection)
        ));
    }

    #[test]
    fn test_duplicate_placements_are_renamed() {
        let mut surface = z_surface(4);
        let first = surface.place_on_ground("base.mesh", None, 10.0, 20.0).name.clone();
        let second = surface.place_on_ground("base.mesh", None, 30.0, 40.0).name.clone();
        let third = surface
            .place_at_spherical("other.mesh", Some("base"), 0.0, 0.0, None)
            .name
            .clone();
        assert_eq!(first, "base");
        assert_eq!(second, "base1");
        assert_eq!(third, "base2");
        assert_eq!(surface.objects().len(), 3);
        assert!(surface.contains_object("base1"));
    }

    #[test]
    fn test_spherical_placement_distance() {
        let mut surface = z_surface(4);
        let r = surface.radius();
        let at_radius = surface.place_at_spherical("m", None, 0.0, 90.0, Some(0.0)).position;
        assert!((at_radius - DVec3::Y * r).length() < 1e-9);
        let far = surface.place_at_spherical("m", None, 0.0, 0.0, Some(3.0 * r)).position;
        assert!((far - DVec3::X * 3.0 * r).length() < 1e-9);
    }

    #[test]
    fn test_ground_placement_sits_on_terrain() {
        let mut surface = z_surface(4);
        let object = surface.place_on_ground("tree", None, 45.0, 10.0).clone();
        let expected = surface.surface_height(object.position);
        assert!((object.position.length() - expected).abs() < 1e-9);
        let up = object.orientation * DVec3::Y;
        assert!((up - object.position.normalize()).length() < 1e-9);
    }

    #[test]
    fn test_move_object_headings() {
        let mut surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        surface.place_on_ground("walker", None, 0.0, 0.0);

        assert_eq!(surface.move_object("walker", Heading::East, 10.0).unwrap(), MoveOutcome::Moved);
        let (lat, lon) = cartesian_to_spherical(surface.object("walker").unwrap().position);
        assert!(lat.abs() < 1e-9 && (lon - 10.0).abs() < 1e-9);

        assert_eq!(surface.move_object("walker", Heading::North, 30.0).unwrap(), MoveOutcome::Moved);
        let position = surface.object("walker").unwrap().position;
        let (lat, _) = cartesian_to_spherical(position);
        assert!((lat - 30.0).abs() < 1e-9);
        assert!((position.length() - surface.radius()).abs() < 1e-9, "snapped to ground");
    }

    #[test]
    fn test_move_past_pole_is_limited() {
        let mut surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        let before = surface.place_on_ground("walker", None, 80.0, 0.0).position;
        assert_eq!(
            surface.move_object("walker", Heading::North, 15.0).unwrap(),
            MoveOutcome::PoleLimited
        );
        assert_eq!(surface.object("walker").unwrap().position, before);
    }

    #[test]
    fn test_collision_rolls_back() {
        let mut surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        let before = surface.place_on_ground("walker", None, 0.0, 0.0).position;
        surface.set_collision_check(Box::new(|o: &PlacedObject| o.position.z > 0.0));

        assert_eq!(
            surface.move_object("walker", Heading::North, 5.0).unwrap(),
            MoveOutcome::Blocked
        );
        assert_eq!(surface.object("walker").unwrap().position, before);
        assert_eq!(
            surface.move_object("walker", Heading::South, 5.0).unwrap(),
            MoveOutcome::Moved
        );

        surface.clear_collision_check();
        assert_eq!(
            surface.move_object("walker", Heading::North, 10.0).unwrap(),
            MoveOutcome::Moved
        );
    }

    #[test]
    fn test_move_unknown_object_fails() {
        let mut surface = PlanetSurface::generate(small_params(4), flat_resources()).unwrap();
        assert!(matches!(
            surface.move_object("ghost", Heading::West, 1.0),
            Err(SurfaceError::UnknownObject(name)) if name == "ghost"
        ));
    }

    #[test]
    fn test_regenerate_replaces_grids_and_keeps_objects() {
        let mut surface = z_surface(4);
        surface.place_on_ground("keeper", None, 60.0, 0.0);
        surface.set_observer_position(DVec3::splat(500.0));

        surface
            .regenerate(small_params(6), ResourceParameters::default())
            .unwrap();
        assert_eq!(surface.topology().size(), 6);
        assert!(surface.contains_object("keeper"));
        assert_eq!(surface.observer_position(), DVec3::splat(500.0));
    }

    #[test]
    fn test_failed_regeneration_leaves_surface_intact() {
        let mut surface = z_surface(4);
        let stats = *surface.elevation_stats();
        let huge = GenerationParams {
            grid_size: u32::MAX,
            ..small_params(4)
        };
        let err = surface
            .regenerate(huge, ResourceParameters::default())
            .unwrap_err();
        assert!(matches!(err, SurfaceError::Allocation { .. }), "got {err:?}");
        assert_eq!(surface.topology().size(), 4);
        assert_eq!(*surface.elevation_stats(), stats);

        let huge_texture = GenerationParams {
            texture_width: u32::MAX,
            texture_height: u32::MAX,
            ..small_params(4)
        };
        assert!(matches!(
            surface.regenerate(huge_texture, ResourceParameters::default()),
            Err(SurfaceError::Allocation { .. })
        ));
        assert_eq!(surface.texture().dimensions(), (16, 8));
    }

    #[test]
    fn test_texture_matches_equirect_render() {
        let surface = z_surface(4);
        let rendered = surface.render_map(16, 8, MapType::Equirectangular).unwrap();
        assert_eq!(&rendered, surface.texture());
    }

    #[test]
    fn test_equirect_rows_follow_sea_level() {
        let surface = z_surface(4);
        let image = surface.render_map(8, 4, MapType::Equirectangular).unwrap();
        let palette = &surface.resources().palette;
        // The z ramp makes the southern rows water, and row 0 is the far north.
        for x in 0..8 {
            assert!(!palette.is_water_color(image.pixel(x, 0)));
            assert!(palette.is_water_color(image.pixel(x, 3)));
        }
    }
}
