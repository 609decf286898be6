//! Systems bridging Bevy ECS with the collision core.

use bevy::prelude::*;
use log::{debug, error};

use crate::bounds::BoundingVolume;
use crate::components::CollidableHandle;
use crate::events::{EventLog, GameEvent};

use super::{CollidableQueries, CollisionNotice, CollisionSession, PlayerQuery};

/// Mirrors collidable entities into the registry.
///
/// New entities are registered under a fresh identifier and tagged with a
/// [`CollidableHandle`]. Moved entities have their bounds refreshed, and
/// entities that lost their [`crate::Collidable`] are unregistered.
pub fn sync_collidables_system(
    mut session: ResMut<CollisionSession>,
    mut queries: CollidableQueries,
    mut commands: Commands,
) {
    for entity in queries.removed.read() {
        if let Some(id) = session.forget_entity(entity) {
            session.world.unregister(id);
            debug!("unregistered collidable {id} for {entity:?}");
        }
    }

    for (handle, collidable, transform) in queries.moved.iter() {
        let bounds = BoundingVolume::from_center_size(transform.translation, collidable.size);
        session.world.update_bounds(handle.0, bounds);
    }

    for (entity, collidable, transform) in queries.added.iter() {
        let id = session.world.allocate_id();
        let bounds = BoundingVolume::from_center_size(transform.translation, collidable.size);
        if let Err(e) = session
            .world
            .register(id, bounds, collidable.kind, collidable.remove_on_collision)
        {
            error!("failed to register collidable for {entity:?}: {e}");
            continue;
        }
        session.link(id, entity);
        commands.entity(entity).insert(CollidableHandle(id));
    }
}

/// Runs one collision frame against the player transform.
///
/// The player position is read from its `Transform`, corrected by the
/// collision pass and written back. Every notification updates the session
/// vitals and is re-triggered as a [`CollisionNotice`]; removed collidables
/// are despawned.
pub fn collision_frame_system(
    time: Res<Time>,
    mut session: ResMut<CollisionSession>,
    mut player: PlayerQuery,
    mut commands: Commands,
) {
    let Ok(mut transform) = player.single_mut() else {
        return;
    };

    let dt = time.delta();
    let mut log = EventLog::new();
    session.world.player_mut().position = transform.translation;
    session.world.run_frame(dt, &mut log);
    transform.translation = session.world.player().position;
    session.vitals.tick(dt);

    for event in log.drain() {
        event.dispatch(&mut session.vitals);
        if let GameEvent::ObjectRemoved(id) = event {
            if let Some(entity) = session.forget_id(id) {
                commands.entity(entity).despawn();
            }
        }
        commands.trigger(CollisionNotice(event));
    }
}
