//! Kind-driven response to a single collision.

use log::debug;

use crate::config::PhysicsConfig;
use crate::events::{DamageSource, GameEvents, DEFAULT_DEATH_MESSAGE};
use crate::kind::CollidableKind;
use crate::player::{player_probe, PlayerState};
use crate::pushout::{PushPriority, PushoutResolver};
use crate::registry::{CollidableEntry, CollidableRegistry};

/// Result of responding to one collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionOutcome {
    /// The object blocks the player; the caller applies pushout.
    pub stops_movement: bool,
    /// The entry was unregistered as part of the response.
    pub removed: bool,
    /// The response killed the player.
    pub fatal: bool,
}

/// Mutable state a response may touch.
pub struct ResponseContext<'a> {
    /// Registry the entry belongs to.
    pub registry: &'a mut CollidableRegistry,
    /// The colliding player.
    pub player: &'a mut PlayerState,
    /// Session tuning.
    pub config: &'a PhysicsConfig,
    /// Notification receiver.
    pub events: &'a mut dyn GameEvents,
}

/// Dispatches gameplay effects by collidable kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionResponder {
    pushout: PushoutResolver,
}

impl CollisionResponder {
    /// Responder that shoves the player with `pushout` on moving obstacles.
    #[must_use]
    pub const fn new(pushout: PushoutResolver) -> Self {
        Self { pushout }
    }

    /// Apply the effect of touching `entry` and report its outcome.
    ///
    /// Moving obstacles apply their own amplified pushout here, so callers
    /// must not push the player out of them a second time. Entries flagged
    /// for removal are unregistered and never block movement.
    pub fn handle(&self, entry: &CollidableEntry, ctx: &mut ResponseContext<'_>) -> CollisionOutcome {
        debug!("player touched collidable {} ({})", entry.id, entry.kind);
        let mut outcome = match entry.kind {
            CollidableKind::Normal | CollidableKind::MovingPlatform => CollisionOutcome {
                stops_movement: true,
                ..CollisionOutcome::default()
            },
            CollidableKind::Lethal => {
                ctx.events.on_death(DEFAULT_DEATH_MESSAGE);
                CollisionOutcome {
                    fatal: true,
                    ..CollisionOutcome::default()
                }
            }
            CollidableKind::Point => {
                ctx.events.on_score();
                CollisionOutcome::default()
            }
            CollidableKind::MovingObstacle => {
                self.shove_player(entry, ctx);
                CollisionOutcome::default()
            }
            CollidableKind::Damage { amount, stops } => {
                ctx.events.on_damage(amount, DamageSource::Collision);
                CollisionOutcome {
                    stops_movement: stops,
                    ..CollisionOutcome::default()
                }
            }
            CollidableKind::Heal { amount, stops } => {
                ctx.events.on_heal(amount);
                CollisionOutcome {
                    stops_movement: stops,
                    ..CollisionOutcome::default()
                }
            }
        };

        if entry.remove_on_collision && ctx.registry.unregister(entry.id).is_some() {
            ctx.events.on_object_removed(entry.id);
            outcome.removed = true;
            outcome.stops_movement = false;
        }
        outcome
    }

    fn shove_player(&self, entry: &CollidableEntry, ctx: &mut ResponseContext<'_>) {
        let position = ctx.player.position;
        let body = player_probe(position, ctx.config);
        let delta = self.pushout.resolve(
            &body,
            &entry.bounds,
            position,
            ctx.config.moving_obstacle_push(),
            PushPriority::HorizontalFirst,
        );
        ctx.player.position += delta;
    }
}
