//! Error types surfaced by the collision core.

use thiserror::Error;

use crate::CollidableId;

/// Failures raised by registry, kind decoding and motion construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CollisionError {
    /// The kind text does not match any known collidable kind.
    #[error("unknown collidable kind `{0}`")]
    UnknownCollidableKind(String),
    /// An entry with this id is already registered.
    #[error("collidable {0} is already registered")]
    DuplicateRegistration(CollidableId),
    /// A moving object was given an axis it cannot move along.
    #[error("invalid axis `{axis}` for {object}")]
    InvalidAxisSpecifier {
        /// The rejected axis text.
        axis: String,
        /// What kind of moving object was being built.
        object: &'static str,
    },
    /// Corners whose minimum exceeds the maximum on some axis.
    #[error("bounding volume minimum {min:?} exceeds maximum {max:?}")]
    InvalidBounds {
        /// Requested minimum corner.
        min: [f32; 3],
        /// Requested maximum corner.
        max: [f32; 3],
    },
}
