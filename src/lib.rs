#![cfg_attr(docsrs, feature(doc_cfg))]
//! Collision core for a first-person arena game.
//!
//! The crate keeps a registry of axis-aligned collidables, tests the player
//! against it every frame, answers each hit according to its kind, applies
//! gravity and keeps the player inside the arena. Gameplay effects leave the
//! core through the [`GameEvents`] trait. [`CollisionPlugin`] runs the same
//! pass inside a Bevy app.
pub mod arena;
pub mod bounds;
pub mod collision_sync;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod gravity;
pub mod kind;
pub mod level;
pub mod logging;
pub mod motion;
pub mod numeric;
pub mod player;
pub mod pushout;
pub mod registry;
pub mod responder;
pub mod timer;
pub mod vitals;
pub mod world;
pub use constants::*;

// Re-export commonly used items
pub use arena::ArenaBoundsGuard;
pub use bounds::BoundingVolume;
pub use collision_sync::{CollisionNotice, CollisionPlugin, CollisionSession};
pub use components::{Collidable, CollidableHandle, Player};
pub use config::{BoundaryMode, OverlapTest, PhysicsConfig};
pub use error::CollisionError;
pub use events::{DamageSource, EventLog, GameEvent, GameEvents};
pub use gravity::{GravityController, GravityState};
pub use kind::CollidableKind;
pub use level::{LevelDefinition, LevelError};
pub use logging::init as init_logging;
pub use motion::{MovingObstacle, MovingPlatform, ObstacleAxis, PingPong, PlatformAxis};
pub use player::{ground_probe, player_probe, PlayerState};
pub use pushout::{PushPriority, PushoutResolver};
pub use registry::{CollidableEntry, CollidableId, CollidableRegistry};
pub use responder::{CollisionOutcome, CollisionResponder, ResponseContext};
pub use vitals::Vitals;
pub use world::{CollisionWorld, FrameReport};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use arena::prelude::*;
    //! ```

    pub use crate::BoundingVolume;
    pub use crate::CollidableId;
    pub use crate::CollidableKind;
    pub use crate::CollisionWorld;
    pub use crate::EventLog;
    pub use crate::GameEvents;
    pub use crate::PhysicsConfig;
    pub use glam::Vec3;
}
