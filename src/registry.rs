//! Registry of collidable world objects.
//!
//! The registry owns only collision metadata. Visual objects belong to the
//! scene layer, which learns about removals through
//! [`GameEvents::on_object_removed`](crate::GameEvents::on_object_removed).

use std::fmt;

use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bounds::BoundingVolume;
use crate::error::CollisionError;
use crate::kind::CollidableKind;

/// Stable identifier of a registered collidable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollidableId(pub u64);

impl From<u64> for CollidableId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl CollidableId {
    /// Unwrap the raw identifier.
    #[must_use]
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CollidableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One object participating in collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollidableEntry {
    /// Identifier the entry is keyed by.
    pub id: CollidableId,
    /// Current world-space volume.
    pub bounds: BoundingVolume,
    /// Response behaviour.
    pub kind: CollidableKind,
    /// Whether the entry disappears after its first hit.
    pub remove_on_collision: bool,
}

impl CollidableEntry {
    /// Create an entry, forcing removal for kinds that are single use.
    #[must_use]
    pub const fn new(
        id: CollidableId,
        bounds: BoundingVolume,
        kind: CollidableKind,
        remove_on_collision: bool,
    ) -> Self {
        Self {
            id,
            bounds,
            kind,
            remove_on_collision: remove_on_collision || kind.forces_removal(),
        }
    }
}

/// Collidable entries keyed by [`CollidableId`].
#[derive(Debug, Clone, Default)]
pub struct CollidableRegistry {
    entries: HashMap<CollidableId, CollidableEntry>,
}

impl CollidableRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collidable.
    ///
    /// # Errors
    /// Returns [`CollisionError::DuplicateRegistration`] when `id` is already
    /// registered. The existing entry is left untouched.
    pub fn register(
        &mut self,
        id: CollidableId,
        bounds: BoundingVolume,
        kind: CollidableKind,
        remove_on_collision: bool,
    ) -> Result<CollidableId, CollisionError> {
        if self.entries.contains_key(&id) {
            return Err(CollisionError::DuplicateRegistration(id));
        }
        let entry = CollidableEntry::new(id, bounds, kind, remove_on_collision);
        debug!("registered collidable {id} as {kind}");
        self.entries.insert(id, entry);
        Ok(id)
    }

    /// Register a collidable whose kind is given in its textual form.
    ///
    /// # Errors
    /// Returns [`CollisionError::UnknownCollidableKind`] for unparseable kind
    /// text and [`CollisionError::DuplicateRegistration`] for reused ids.
    pub fn register_encoded(
        &mut self,
        id: CollidableId,
        bounds: BoundingVolume,
        kind: &str,
        remove_on_collision: bool,
    ) -> Result<CollidableId, CollisionError> {
        let parsed: CollidableKind = kind.parse()?;
        self.register(id, bounds, parsed, remove_on_collision)
    }

    /// Replace the bounds of a registered entry.
    ///
    /// Animation drivers may keep reporting after a collision removed their
    /// object, so an unknown id is a no-op. Returns whether an entry was
    /// updated.
    pub fn update_bounds(&mut self, id: CollidableId, bounds: BoundingVolume) -> bool {
        match self.entries.get_mut(&id) {
            Some(entry) => {
                entry.bounds = bounds;
                true
            }
            None => {
                debug!("ignoring bounds update for unregistered collidable {id}");
                false
            }
        }
    }

    /// Remove an entry. Removing an absent id does nothing.
    pub fn unregister(&mut self, id: CollidableId) -> Option<CollidableEntry> {
        let removed = self.entries.remove(&id);
        if removed.is_some() {
            debug!("unregistered collidable {id}");
        }
        removed
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, id: CollidableId) -> Option<&CollidableEntry> {
        self.entries.get(&id)
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: CollidableId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterate over every registered entry in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = &CollidableEntry> + '_ {
        self.entries.values()
    }

    /// Snapshot of the entries whose bounds intersect `probe`.
    ///
    /// The copy lets callers mutate the registry while responding to hits.
    #[must_use]
    pub fn intersecting(&self, probe: &BoundingVolume) -> Vec<CollidableEntry> {
        self.entries()
            .filter(|entry| probe.intersects(&entry.bounds))
            .copied()
            .collect()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
