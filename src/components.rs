//! ECS component types mirrored into the collision core.
//! The player camera and every collidable object carry one of these next to their `Transform`.
use bevy::prelude::*;

use crate::kind::CollidableKind;
use crate::registry::CollidableId;

/// Marks the entity whose `Transform` is the player camera.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Object the player can collide with, centred on its `Transform`.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collidable {
    /// Response kind.
    pub kind: CollidableKind,
    /// Extent of the bounding volume on each axis.
    pub size: Vec3,
    /// Despawn the entity once the player touches it.
    pub remove_on_collision: bool,
}

impl Collidable {
    /// Collidable of `kind` and `size` that stays after contact.
    #[must_use]
    pub const fn new(kind: CollidableKind, size: Vec3) -> Self {
        Self {
            kind,
            size,
            remove_on_collision: false,
        }
    }

    /// Despawn the entity on contact.
    #[must_use]
    pub const fn removed_on_collision(mut self) -> Self {
        self.remove_on_collision = true;
        self
    }
}

/// Registry identifier assigned to a [`Collidable`] entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollidableHandle(pub CollidableId);
