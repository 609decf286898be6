//! Bevy plugin wiring the collision systems into the schedule.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::info;

use crate::events::GameEvent;
use crate::world::CollisionWorld;

use super::{collision_frame_system, sync_collidables_system, CollisionSession};

/// Notification raised by the collision pass, re-triggered for observers.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct CollisionNotice(pub GameEvent);

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_collision_notice(notice: On<CollisionNotice>) {
    let CollisionNotice(event) = notice.event();
    info!("collision: {event}");
}

/// Bevy plugin running the collision core once per `Update`.
#[derive(Debug, Clone, Default)]
pub struct CollisionPlugin {
    world: CollisionWorld,
    coins_total: u32,
}

impl CollisionPlugin {
    /// Plugin driving a pre-built world, typically loaded from a level.
    #[must_use]
    pub const fn new(world: CollisionWorld, coins_total: u32) -> Self {
        Self { world, coins_total }
    }
}

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(log_collision_notice);
        app.insert_resource(CollisionSession::new(self.world.clone(), self.coins_total));
        app.add_systems(
            Update,
            (sync_collidables_system, collision_frame_system).chain(),
        );
    }
}
