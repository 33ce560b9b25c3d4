//! Named objects attached to the planet surface.
//!
//! Objects are kept in placement order and never removed. Names are unique:
//! a requested name that is already taken gets an increasing integer suffix.

use glam::{DQuat, DVec3};

/// An entity attached to the surface, keyed by its unique name.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    /// Unique registered name.
    pub name: String,
    /// Mesh resource the renderer attaches for this object.
    pub mesh: String,
    /// Model-space position.
    pub position: DVec3,
    pub orientation: DQuat,
}

/// Compass headings for [`move_object`](crate::PlanetSurface::move_object).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Increasing latitude.
    North,
    /// Decreasing latitude.
    South,
    /// Increasing longitude.
    East,
    /// Decreasing longitude.
    West,
}

/// Result of a movement request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The object now sits at its new position.
    Moved,
    /// The collision check rejected the move; the position was rolled back.
    Blocked,
    /// The move would have crossed a pole; nothing changed.
    PoleLimited,
}

/// Answer of a [`CollisionCheck`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub collided: bool,
}

/// External collision detection consulted after an object is moved.
pub trait CollisionCheck {
    fn check_collision(&self, candidate: &PlacedObject) -> CollisionOutcome;
}

impl<F> CollisionCheck for F
where
    F: Fn(&PlacedObject) -> bool,
{
    fn check_collision(&self, candidate: &PlacedObject) -> CollisionOutcome {
        CollisionOutcome {
            collided: self(candidate),
        }
    }
}

/// Ordered collection of [`PlacedObject`]s with unique names.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    objects: Vec<PlacedObject>,
}

/// `requested` up to its first `.` (a file extension is not part of the name).
#[must_use]
pub fn name_stem(requested: &str) -> &str {
    requested.split_once('.').map_or(requested, |(stem, _)| stem)
}

impl ObjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.objects.iter().any(|o| o.name == name)
    }

    /// The name an object requesting `requested` would be registered under:
    /// the stem itself if free, otherwise `stem1`, `stem2`, ...
    #[must_use]
    pub fn unique_name(&self, requested: &str) -> String {
        let stem = name_stem(requested);
        if !self.contains(stem) {
            return stem.to_owned();
        }
        let mut suffix = 1u64;
        loop {
            let candidate = format!("{stem}{suffix}");
            if !self.contains(&candidate) {
                return candidate;
            }
            suffix += 1;
        }
    }

    /// Register an object under a unique version of `requested`.
    pub fn insert(
        &mut self,
        requested: &str,
        mesh: &str,
        position: DVec3,
        orientation: DQuat,
    ) -> &PlacedObject {
        let name = self.unique_name(requested);
        tracing::debug!(%name, mesh, ?position, "object placed");
        let index = self.objects.len();
        self.objects.push(PlacedObject {
            name,
            mesh: mesh.to_owned(),
            position,
            orientation,
        });
        &self.objects[index]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PlacedObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlacedObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// All objects in placement order.
    #[must_use]
    pub fn as_slice(&self) -> &[PlacedObject] {
        &self.objects
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
