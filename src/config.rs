//! Tunable physics parameters.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! level file only needs to name the values it changes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ARENA_PUSH_BACK, ARENA_SIZE, BASE_HEIGHT, DEADZONE_DAMAGE, DEADZONE_DAMAGE_INTERVAL_MS,
    DEADZONE_WARNING_COOLDOWN_MS, FALL_ACCELERATION, FALL_DAMAGE_FACTOR, FALL_SPEED,
    GROUND_PROBE_MARGIN, JUMP_SPEED, JUMP_TIME_MS, MIN_DAMAGE_DISTANCE, MOVING_OBSTACLE_PUSH_FACTOR,
    PLAYER_HALF_WIDTH, PUSH_DISTANCE,
};

/// Per-axis overlap test used before pushing the player out of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapTest {
    /// `player.min <= object.max || player.max >= object.min`.
    ///
    /// This holds for any pair of valid volumes on every axis, so each
    /// candidate axis is corrected. Game feel depends on it.
    #[default]
    Permissive,
    /// True interval intersection.
    Strict,
}

/// What happens when the player leaves the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Push the player back toward the interior.
    #[default]
    Wall,
    /// Let the player out but hurt them periodically until they return.
    Deadzone,
}

/// Physics tuning for one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Base pushout distance for blocking collisions.
    pub push_distance: f32,
    /// Multiplier applied to `push_distance` for moving obstacles.
    pub moving_obstacle_push_factor: f32,
    /// Half width of the player volume on X and Z.
    pub player_half_width: f32,
    /// Standing camera height; also the half height of the player volume.
    pub base_height: f32,
    /// Extra reach of the ground probe.
    pub ground_probe_margin: f32,
    /// Initial fall displacement per tick.
    pub fall_speed: f32,
    /// Fall displacement added per tick spent falling.
    pub fall_acceleration: f32,
    /// Minimum fall distance that causes damage.
    pub min_damage_distance: f32,
    /// Damage per unit of fall distance.
    pub fall_damage_factor: f32,
    /// Upward displacement per tick while jumping.
    pub jump_speed: f32,
    /// Milliseconds a jump lasts.
    pub jump_time_ms: u64,
    /// Side length of the square arena.
    pub arena_size: f32,
    /// Push-back distance of the wall boundary.
    pub arena_push_back: f32,
    /// Boundary behaviour.
    pub boundary: BoundaryMode,
    /// Deadzone damage per interval.
    pub deadzone_damage: f32,
    /// Milliseconds between deadzone damage ticks.
    pub deadzone_damage_interval_ms: u64,
    /// Milliseconds a deadzone warning stays suppressed.
    pub deadzone_warning_cooldown_ms: u64,
    /// Overlap test used by pushout.
    pub overlap_test: OverlapTest,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            push_distance: PUSH_DISTANCE,
            moving_obstacle_push_factor: MOVING_OBSTACLE_PUSH_FACTOR,
            player_half_width: PLAYER_HALF_WIDTH,
            base_height: BASE_HEIGHT,
            ground_probe_margin: GROUND_PROBE_MARGIN,
            fall_speed: FALL_SPEED,
            fall_acceleration: FALL_ACCELERATION,
            min_damage_distance: MIN_DAMAGE_DISTANCE,
            fall_damage_factor: FALL_DAMAGE_FACTOR,
            jump_speed: JUMP_SPEED,
            jump_time_ms: JUMP_TIME_MS,
            arena_size: ARENA_SIZE,
            arena_push_back: ARENA_PUSH_BACK,
            boundary: BoundaryMode::Wall,
            deadzone_damage: DEADZONE_DAMAGE,
            deadzone_damage_interval_ms: DEADZONE_DAMAGE_INTERVAL_MS,
            deadzone_warning_cooldown_ms: DEADZONE_WARNING_COOLDOWN_MS,
            overlap_test: OverlapTest::Permissive,
        }
    }
}

impl PhysicsConfig {
    /// Push distance used against moving obstacles.
    #[must_use]
    pub fn moving_obstacle_push(&self) -> f32 {
        self.push_distance * self.moving_obstacle_push_factor
    }

    /// How long a jump keeps rising.
    #[must_use]
    pub const fn jump_time(&self) -> Duration {
        Duration::from_millis(self.jump_time_ms)
    }

    /// Interval between deadzone damage ticks.
    #[must_use]
    pub const fn deadzone_damage_interval(&self) -> Duration {
        Duration::from_millis(self.deadzone_damage_interval_ms)
    }

    /// Cool-down between deadzone warnings.
    #[must_use]
    pub const fn deadzone_warning_cooldown(&self) -> Duration {
        Duration::from_millis(self.deadzone_warning_cooldown_ms)
    }
}
