//! Drivers for moving obstacles and platforms.
//!
//! A driver owns the position of one moving collidable. Each time it
//! advances it refreshes the registry bounds, and a platform also carries a
//! player standing on it by the distance it moved.

use std::str::FromStr;
use std::time::Duration;

use glam::Vec3;

use crate::bounds::BoundingVolume;
use crate::error::CollisionError;
use crate::kind::CollidableKind;
use crate::player::PlayerState;
use crate::registry::{CollidableId, CollidableRegistry};

/// Axis a moving obstacle travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleAxis {
    /// World X.
    X,
    /// World Y.
    Y,
    /// World Z.
    Z,
}

impl FromStr for ObstacleAxis {
    type Err = CollisionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "X" => Ok(Self::X),
            "Y" => Ok(Self::Y),
            "Z" => Ok(Self::Z),
            other => Err(CollisionError::InvalidAxisSpecifier {
                axis: other.to_owned(),
                object: "moving obstacle",
            }),
        }
    }
}

/// Axis a moving platform travels along. Platforms only move horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformAxis {
    /// World X.
    X,
    /// World Z.
    Z,
}

impl FromStr for PlatformAxis {
    type Err = CollisionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "X" => Ok(Self::X),
            "Z" => Ok(Self::Z),
            other => Err(CollisionError::InvalidAxisSpecifier {
                axis: other.to_owned(),
                object: "moving platform",
            }),
        }
    }
}

impl From<PlatformAxis> for ObstacleAxis {
    fn from(axis: PlatformAxis) -> Self {
        match axis {
            PlatformAxis::X => Self::X,
            PlatformAxis::Z => Self::Z,
        }
    }
}

impl ObstacleAxis {
    const fn get(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }

    fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Self::X => v.x = value,
            Self::Y => v.y = value,
            Self::Z => v.z = value,
        }
    }
}

/// Linear back-and-forth motion between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PingPong {
    from: f32,
    to: f32,
    period: Duration,
    elapsed: Duration,
    forward: bool,
}

impl PingPong {
    /// Travel from `from` to `to` in `period`, then back, forever.
    #[must_use]
    pub const fn new(from: f32, to: f32, period: Duration) -> Self {
        Self {
            from,
            to,
            period,
            elapsed: Duration::ZERO,
            forward: true,
        }
    }

    /// Current coordinate.
    #[must_use]
    pub fn value(&self) -> f32 {
        if self.period.is_zero() {
            return self.from;
        }
        let t = self.elapsed.as_secs_f32() / self.period.as_secs_f32();
        let (start, end) = if self.forward {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        };
        start + (end - start) * t
    }

    /// Advance by `dt` and return the new coordinate.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if !self.period.is_zero() {
            self.elapsed += dt;
            while self.elapsed >= self.period {
                self.elapsed -= self.period;
                self.forward = !self.forward;
            }
        }
        self.value()
    }
}

/// Obstacle sliding along one axis and shoving the player aside.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingObstacle {
    id: CollidableId,
    position: Vec3,
    size: Vec3,
    axis: ObstacleAxis,
    path: PingPong,
}

impl MovingObstacle {
    /// Obstacle of `size` at `position`, whose `axis` coordinate starts at
    /// the beginning of `path`.
    #[must_use]
    pub fn new(id: CollidableId, position: Vec3, size: Vec3, axis: ObstacleAxis, path: PingPong) -> Self {
        let mut start = position;
        axis.set(&mut start, path.value());
        Self {
            id,
            position: start,
            size,
            axis,
            path,
        }
    }

    /// Identifier the obstacle is registered under.
    #[must_use]
    pub const fn id(&self) -> CollidableId {
        self.id
    }

    /// Current centre.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current world-space volume.
    #[must_use]
    pub fn bounds(&self) -> BoundingVolume {
        BoundingVolume::from_center_size(self.position, self.size)
    }

    /// Add the obstacle to `registry`.
    ///
    /// # Errors
    /// Propagates [`CollisionError::DuplicateRegistration`].
    pub fn register(&self, registry: &mut CollidableRegistry) -> Result<CollidableId, CollisionError> {
        registry.register(self.id, self.bounds(), CollidableKind::MovingObstacle, false)
    }

    /// Move along the path and refresh the registry bounds.
    pub fn advance(&mut self, dt: Duration, registry: &mut CollidableRegistry) {
        let value = self.path.advance(dt);
        self.axis.set(&mut self.position, value);
        registry.update_bounds(self.id, self.bounds());
    }
}

/// Platform sliding horizontally and carrying a mounted player.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPlatform {
    id: CollidableId,
    position: Vec3,
    size: Vec3,
    axis: PlatformAxis,
    path: PingPong,
    previous: Option<f32>,
}

impl MovingPlatform {
    /// Platform of `size` at `position`, whose `axis` coordinate starts at
    /// the beginning of `path`.
    #[must_use]
    pub fn new(id: CollidableId, position: Vec3, size: Vec3, axis: PlatformAxis, path: PingPong) -> Self {
        let mut start = position;
        ObstacleAxis::from(axis).set(&mut start, path.value());
        Self {
            id,
            position: start,
            size,
            axis,
            path,
            previous: None,
        }
    }

    /// Identifier the platform is registered under.
    #[must_use]
    pub const fn id(&self) -> CollidableId {
        self.id
    }

    /// Current centre.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current world-space volume.
    #[must_use]
    pub fn bounds(&self) -> BoundingVolume {
        BoundingVolume::from_center_size(self.position, self.size)
    }

    /// Add the platform to `registry`.
    ///
    /// # Errors
    /// Propagates [`CollisionError::DuplicateRegistration`].
    pub fn register(&self, registry: &mut CollidableRegistry) -> Result<CollidableId, CollisionError> {
        registry.register(self.id, self.bounds(), CollidableKind::MovingPlatform, false)
    }

    /// Move along the path, carry a mounted player by the same distance and
    /// refresh the registry bounds.
    pub fn advance(&mut self, dt: Duration, registry: &mut CollidableRegistry, player: &mut PlayerState) {
        let axis = ObstacleAxis::from(self.axis);
        let current = self.path.advance(dt);
        axis.set(&mut self.position, current);
        if player.is_mounted_on(self.id) {
            if let Some(previous) = self.previous {
                let distance_moved = previous - current;
                let carried = axis.get(player.position) - distance_moved;
                axis.set(&mut player.position, carried);
            }
        }
        self.previous = Some(current);
        registry.update_bounds(self.id, self.bounds());
    }
}
