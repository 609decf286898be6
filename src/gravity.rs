//! Gravity, landing and platform mounting.
//!
//! Free fall accelerates linearly in ticks rather than elapsed time, so the
//! fall speed depends on the frame rate. Landings after long falls hurt.

use log::debug;

use crate::events::DamageSource;
use crate::kind::CollidableKind;
use crate::numeric::ticks_as_f32;
use crate::player::{ground_probe, PlayerState};
use crate::registry::{CollidableEntry, CollidableId};
use crate::responder::{CollisionResponder, ResponseContext};

/// Vertical motion state of the player after a gravity tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GravityState {
    /// Standing on the ground plane or a static object.
    #[default]
    Grounded,
    /// In free fall.
    Falling,
    /// Rising through a jump; gravity is suspended.
    Jumping,
    /// Standing on a moving platform that carries the player.
    MountedOnPlatform,
}

impl GravityState {
    fn of(player: &PlayerState) -> Self {
        if player.jumping {
            Self::Jumping
        } else if player.falling {
            Self::Falling
        } else if player.mounted_platform.is_some() {
            Self::MountedOnPlatform
        } else {
            Self::Grounded
        }
    }
}

/// Applies gravity to the player once per frame.
#[derive(Debug, Clone, Default)]
pub struct GravityController {
    state: GravityState,
    responder: CollisionResponder,
}

impl GravityController {
    /// Controller dispatching ground contacts through `responder`.
    #[must_use]
    pub const fn new(responder: CollisionResponder) -> Self {
        Self {
            state: GravityState::Grounded,
            responder,
        }
    }

    /// State reached by the most recent tick.
    #[must_use]
    pub const fn state(&self) -> GravityState {
        self.state
    }

    /// Run one gravity tick.
    ///
    /// Entries listed in `already_handled` were dispatched earlier this frame
    /// by the body collision pass; they still support the player but their
    /// effect is not applied twice.
    pub fn tick(
        &mut self,
        ctx: &mut ResponseContext<'_>,
        already_handled: &[CollidableId],
    ) -> GravityState {
        let probe = ground_probe(ctx.player.position, ctx.config);
        let under = ctx.registry.intersecting(&probe);

        for entry in &under {
            if !already_handled.contains(&entry.id) {
                self.responder.handle(entry, ctx);
            }
            handle_fall_ending(ctx, Some(entry));
        }

        if let Some(platform) = ctx.player.mounted_platform {
            let still_under = under.iter().any(|entry| entry.id == platform);
            if !under.is_empty() && !still_under {
                dismount(ctx);
            }
        }

        let base_height = ctx.config.base_height;
        if under.is_empty() && !ctx.player.jumping && ctx.player.position.y > base_height {
            fall_step(ctx);
        } else if ctx.player.position.y <= base_height {
            handle_fall_ending(ctx, None);
        }

        self.state = GravityState::of(ctx.player);
        self.state
    }
}

fn fall_step(ctx: &mut ResponseContext<'_>) {
    if !ctx.player.falling {
        debug!("player started falling at height {}", ctx.player.position.y);
    }
    ctx.player.falling = true;
    dismount(ctx);
    let amount = ctx.config.fall_speed
        + ticks_as_f32(ctx.player.fall_helper_counter) * ctx.config.fall_acceleration;
    ctx.player.fall_helper_counter = ctx.player.fall_helper_counter.saturating_add(1);
    ctx.player.position.y -= amount;
    ctx.player.fall_distance += amount;
}

fn dismount(ctx: &mut ResponseContext<'_>) {
    if ctx.player.mounted_platform.take().is_some() {
        ctx.events.on_platform_mount(None);
    }
}

fn mount(ctx: &mut ResponseContext<'_>, platform: CollidableId) {
    if !ctx.player.is_mounted_on(platform) {
        ctx.player.mounted_platform = Some(platform);
        ctx.events.on_platform_mount(Some(platform));
    }
}

/// Finish a fall: mount platforms, apply fall damage and reset counters.
fn handle_fall_ending(ctx: &mut ResponseContext<'_>, landed: Option<&CollidableEntry>) {
    if let Some(entry) = landed.filter(|entry| entry.kind == CollidableKind::MovingPlatform) {
        mount(ctx, entry.id);
    }
    ctx.player.falling = false;
    let distance = ctx.player.fall_distance;
    if distance >= ctx.config.min_damage_distance {
        debug!("player landed after falling {distance}");
        ctx.events
            .on_damage(ctx.config.fall_damage_factor * distance, DamageSource::Fall);
    }
    ctx.player.fall_distance = 0.0;
    ctx.player.fall_helper_counter = 0;
}
