//! Builders for small collision worlds used across the integration tests.

use std::time::Duration;

use arena::{
    BoundingVolume, CollidableId, CollidableKind, CollisionWorld, EventLog, FrameReport,
    PhysicsConfig,
};
use glam::Vec3;

/// Sixty frames per second.
pub const FRAME: Duration = Duration::from_micros(16_667);

/// Cube of side `size` centred on `center`.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::cube;
/// let volume = cube(Vec3::ZERO, 2.0);
/// assert_eq!(volume.min(), Vec3::splat(-1.0));
/// ```
#[must_use]
pub fn cube(center: Vec3, size: f32) -> BoundingVolume {
    BoundingVolume::from_center_size(center, Vec3::splat(size))
}

/// Wide slab whose top face lies at `top`.
#[must_use]
pub fn slab_under(center: Vec3, top: f32) -> BoundingVolume {
    BoundingVolume::from_center_size(
        Vec3::new(center.x, top - 2.5, center.z),
        Vec3::new(40.0, 5.0, 40.0),
    )
}

/// A world plus the log its frames report into.
pub struct TestScene {
    /// World under test.
    pub world: CollisionWorld,
    /// Notifications from every frame so far.
    pub log: EventLog,
    next_id: u64,
}

impl Default for TestScene {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl TestScene {
    /// Empty scene with the given tuning.
    #[must_use]
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            world: CollisionWorld::new(config),
            log: EventLog::new(),
            next_id: 100,
        }
    }

    /// Register `bounds` as `kind` and return its identifier.
    ///
    /// # Panics
    /// Panics if the registry rejects the entry.
    pub fn add(&mut self, bounds: BoundingVolume, kind: CollidableKind) -> CollidableId {
        let id = CollidableId(self.next_id);
        self.next_id += 1;
        self.world
            .register(id, bounds, kind, false)
            .unwrap_or_else(|err| panic!("failed to register {id}: {err}"));
        id
    }

    /// Place the player at `position`.
    pub fn place_player(&mut self, position: Vec3) {
        self.world.player_mut().position = position;
    }

    /// Run one frame.
    pub fn step(&mut self) -> FrameReport {
        self.world.run_frame(FRAME, &mut self.log)
    }

    /// Run `frames` frames and return the last report.
    pub fn run(&mut self, frames: usize) -> FrameReport {
        let mut report = FrameReport::default();
        for _ in 0..frames {
            report = self.step();
        }
        report
    }
}
