//! Synchronisation between Bevy ECS and the collision core.
//!
//! This module re-exports the plugin, the session resource and the systems
//! that mirror collidable entities into the registry and run the frame pass.

mod plugin;
mod state;
mod systems;

pub use plugin::{CollisionNotice, CollisionPlugin};
pub use state::{CollidableQueries, CollisionSession, PlayerQuery};
pub use systems::{collision_frame_system, sync_collidables_system};
