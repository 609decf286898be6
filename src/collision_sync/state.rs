//! Session state shared by the collision systems.

use bevy::ecs::system::SystemParam;
use bevy::prelude::{Added, Changed, Entity, Query, RemovedComponents, Resource, Transform, With, Without};
use hashbrown::HashMap;

use crate::components::{Collidable, CollidableHandle, Player};
use crate::registry::CollidableId;
use crate::vitals::Vitals;
use crate::world::CollisionWorld;

/// Resource owning the collision world of the running game.
#[derive(Resource, Debug)]
pub struct CollisionSession {
    /// Collision core driven once per `Update`.
    pub world: CollisionWorld,
    /// Health and collectibles fed by every notification.
    pub vitals: Vitals,
    /// Mapping from registry identifiers to the entities that own them.
    pub(crate) id_map: HashMap<CollidableId, Entity>,
    /// Reverse mapping from entities to registry identifiers.
    pub(crate) rev_map: HashMap<Entity, CollidableId>,
}

impl CollisionSession {
    /// Session around `world`, with `coins_total` coins to collect.
    #[must_use]
    pub fn new(world: CollisionWorld, coins_total: u32) -> Self {
        let spawn = world.player().position;
        Self {
            world,
            vitals: Vitals::new(spawn, coins_total),
            id_map: HashMap::new(),
            rev_map: HashMap::new(),
        }
    }

    /// Looks up the entity owning a registry identifier.
    #[must_use]
    pub fn entity_for_id(&self, id: CollidableId) -> Option<Entity> {
        self.id_map.get(&id).copied()
    }

    /// Looks up the registry identifier owned by an entity.
    #[must_use]
    pub fn id_for_entity(&self, entity: Entity) -> Option<CollidableId> {
        self.rev_map.get(&entity).copied()
    }

    pub(crate) fn link(&mut self, id: CollidableId, entity: Entity) {
        self.id_map.insert(id, entity);
        self.rev_map.insert(entity, id);
    }

    pub(crate) fn forget_entity(&mut self, entity: Entity) -> Option<CollidableId> {
        let id = self.rev_map.remove(&entity)?;
        self.id_map.remove(&id);
        Some(id)
    }

    pub(crate) fn forget_id(&mut self, id: CollidableId) -> Option<Entity> {
        let entity = self.id_map.remove(&id)?;
        self.rev_map.remove(&entity);
        Some(entity)
    }
}

#[derive(SystemParam)]
/// Queries tracking the lifecycle of [`Collidable`] entities.
pub struct CollidableQueries<'w, 's> {
    /// Entities that gained a `Collidable` this frame.
    pub added: Query<'w, 's, (Entity, &'static Collidable, &'static Transform), Added<Collidable>>,
    /// Registered collidables whose transform moved.
    pub moved: Query<
        'w,
        's,
        (&'static CollidableHandle, &'static Collidable, &'static Transform),
        (Changed<Transform>, Without<Player>),
    >,
    /// Entities that lost their `Collidable` component or were despawned.
    pub removed: RemovedComponents<'w, 's, Collidable>,
}

/// The single player camera.
pub type PlayerQuery<'w, 's> = Query<'w, 's, &'static mut Transform, With<Player>>;
