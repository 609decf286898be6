//! Gameplay and physics tuning constants.

/// Gameplay and physics tuning constants used across systems.
///
/// Distances are world units and per-tick quantities are applied once per
/// rendered frame. [`crate::PhysicsConfig`] copies these as its defaults.
pub const PUSH_DISTANCE: f32 = 0.2;
/// Fast moving obstacles push the player this many times further than
/// [`PUSH_DISTANCE`] so they do not pass through between frames.
pub const MOVING_OBSTACLE_PUSH_FACTOR: f32 = 15.0;
/// Half extent of the player volume on the X and Z axes.
pub const PLAYER_HALF_WIDTH: f32 = 5.0;
/// Camera height above the ground plane when standing.
pub const BASE_HEIGHT: f32 = 15.0;
/// Extra reach of the ground probe beyond the player volume.
pub const GROUND_PROBE_MARGIN: f32 = 1.0;
/// Initial downward displacement per tick of free fall.
pub const FALL_SPEED: f32 = 2.0;
/// Added to the fall displacement for every tick already spent falling.
pub const FALL_ACCELERATION: f32 = 0.05;
/// Falls shorter than this never hurt.
pub const MIN_DAMAGE_DISTANCE: f32 = 100.0;
/// Damage dealt per unit of accrued fall distance.
pub const FALL_DAMAGE_FACTOR: f32 = 5.0;
/// Upward displacement per tick while a jump is active.
pub const JUMP_SPEED: f32 = 2.5;
/// Milliseconds a jump keeps rising before gravity takes over again.
pub const JUMP_TIME_MS: u64 = 500;
/// Side length of the square playable arena centred on the origin.
pub const ARENA_SIZE: f32 = 1000.0;
/// Distance the wall boundary pushes an escaping player back per frame.
pub const ARENA_PUSH_BACK: f32 = 1.0;
/// Damage applied per interval while inside the deadzone.
pub const DEADZONE_DAMAGE: f32 = 200.0;
/// Milliseconds between deadzone damage applications.
pub const DEADZONE_DAMAGE_INTERVAL_MS: u64 = 1_000;
/// Milliseconds during which a repeated deadzone warning is suppressed.
pub const DEADZONE_WARNING_COOLDOWN_MS: u64 = 20_000;
/// Maximum health points of the player.
pub const MAX_HP: f32 = 1000.0;
/// Milliseconds after a hit during which further damage is ignored.
pub const INVULNERABILITY_MS: u64 = 1_000;
/// Milliseconds between passive regeneration ticks.
pub const PASSIVE_REGEN_INTERVAL_MS: u64 = 3_000;
/// Health restored by one passive regeneration tick.
pub const PASSIVE_REGEN_AMOUNT: f32 = MAX_HP / 100.0;
/// Height of the lethal volume registered for a spike field.
pub const SPIKE_HEIGHT: f32 = 10.0;
/// Bounding size of a collectible coin (a torus of radius 5 and tube 2).
pub const COIN_SIZE: [f32; 3] = [14.0, 14.0, 4.0];
/// Bounding size of a healing object.
pub const HEALING_OBJECT_SIZE: [f32; 3] = [4.0, 6.2, 4.0];
/// Heal granted by a healing object.
pub const HEALING_OBJECT_AMOUNT: f32 = 500.0;
