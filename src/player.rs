//! Player state shared by the collision, gravity and arena passes.

use std::time::Duration;

use glam::Vec3;

use crate::bounds::BoundingVolume;
use crate::config::PhysicsConfig;
use crate::registry::CollidableId;
use crate::timer::Cooldown;

/// Authoritative player state for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Camera position in world space.
    pub position: Vec3,
    /// Ticks spent in the current free fall.
    pub fall_helper_counter: u32,
    /// Distance fallen since the fall began.
    pub fall_distance: f32,
    /// Platform the player stands on and is carried by.
    pub mounted_platform: Option<CollidableId>,
    /// A jump is in progress; gravity is suspended.
    pub jumping: bool,
    /// The player is in free fall.
    pub falling: bool,
    /// The player has an active movement intent.
    pub moving: bool,
    jump_timer: Cooldown,
}

impl PlayerState {
    /// A standing player at `position`.
    #[must_use]
    pub const fn new(position: Vec3) -> Self {
        Self {
            position,
            fall_helper_counter: 0,
            fall_distance: 0.0,
            mounted_platform: None,
            jumping: false,
            falling: false,
            moving: false,
            jump_timer: Cooldown::new(),
        }
    }

    /// A player standing at the origin at the configured base height.
    #[must_use]
    pub const fn spawned(config: &PhysicsConfig) -> Self {
        Self::new(Vec3::new(0.0, config.base_height, 0.0))
    }

    /// Start a jump lasting `duration` unless one is running or the player
    /// is falling.
    ///
    /// Returns whether the jump started.
    pub fn begin_jump(&mut self, duration: Duration) -> bool {
        if self.jumping || self.falling || duration.is_zero() {
            return false;
        }
        self.jumping = true;
        self.jump_timer.arm(duration);
        true
    }

    /// Finish the current jump.
    pub fn end_jump(&mut self) {
        self.jumping = false;
        self.jump_timer.cancel();
    }

    /// Raise the player by one tick of jump motion and end the jump once
    /// its time has run out.
    pub fn jump_step(&mut self, dt: Duration, config: &PhysicsConfig) {
        if !self.jumping {
            return;
        }
        self.position.y += config.jump_speed;
        self.jump_timer.tick(dt);
        if !self.jump_timer.is_active() {
            self.end_jump();
        }
    }

    /// Halt every movement intent, including a running jump.
    pub fn stop_movement(&mut self) {
        self.moving = false;
        self.end_jump();
    }

    /// Whether the player stands on `platform`.
    #[must_use]
    pub fn is_mounted_on(&self, platform: CollidableId) -> bool {
        self.mounted_platform == Some(platform)
    }
}

/// Volume standing in for the player's body.
#[must_use]
pub fn player_probe(position: Vec3, config: &PhysicsConfig) -> BoundingVolume {
    BoundingVolume::from_center_half_extents(
        position,
        Vec3::new(
            config.player_half_width,
            config.base_height,
            config.player_half_width,
        ),
    )
}

/// Thin, tall volume used to find what the player stands on.
#[must_use]
pub fn ground_probe(position: Vec3, config: &PhysicsConfig) -> BoundingVolume {
    let margin = config.ground_probe_margin;
    BoundingVolume::from_center_half_extents(
        position,
        Vec3::new(margin, config.base_height + margin, margin),
    )
}
