//! JSON level definitions.
//!
//! A level lists the static boxes, hazards, collectibles and moving objects
//! of an arena together with optional physics overrides. Loading turns it
//! into a populated [`CollisionWorld`].

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use glam::Vec3;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::BoundingVolume;
use crate::config::PhysicsConfig;
use crate::constants::{COIN_SIZE, HEALING_OBJECT_AMOUNT, HEALING_OBJECT_SIZE, SPIKE_HEIGHT};
use crate::error::CollisionError;
use crate::kind::CollidableKind;
use crate::motion::{MovingObstacle, MovingPlatform, ObstacleAxis, PingPong, PlatformAxis};
use crate::world::CollisionWorld;

/// Failures while reading or building a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// The level file could not be read.
    #[error("failed to read level {path:?}: {source}")]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The document is not a valid level.
    #[error("malformed level: {0}")]
    Json(#[from] serde_json::Error),
    /// An entry could not be registered.
    #[error(transparent)]
    Collision(#[from] CollisionError),
}

/// Static box with a visible mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDefinition {
    /// Centre of the box.
    pub position: [f32; 3],
    /// Extent on each axis.
    pub size: [f32; 3],
    /// Kind in its textual form.
    #[serde(default = "normal_kind")]
    pub kind: String,
    /// Remove the box once the player touches it.
    #[serde(default)]
    pub remove_on_collision: bool,
}

/// Rectangle of spikes resting on `center`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeFieldDefinition {
    /// Centre of the field.
    pub center: [f32; 3],
    /// Extent along X.
    pub width: f32,
    /// Extent along Z.
    pub length: f32,
}

/// Collision bounds of a decorative model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Centre of the bounds.
    pub position: [f32; 3],
    /// Extent on each axis.
    pub size: [f32; 3],
    /// Kind in its textual form.
    #[serde(default = "normal_kind")]
    pub kind: String,
}

/// Box travelling back and forth along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoverDefinition {
    /// Starting centre; the travel axis coordinate is replaced by `from`.
    pub position: [f32; 3],
    /// Extent on each axis.
    pub size: [f32; 3],
    /// Travel axis: `X`, `Y` or `Z` (platforms accept only `X` and `Z`).
    pub axis: String,
    /// Axis coordinate at the start of the path.
    pub from: f32,
    /// Axis coordinate at the far end of the path.
    pub to: f32,
    /// Milliseconds for one leg of the path.
    pub period_ms: u64,
}

impl MoverDefinition {
    fn path(&self) -> PingPong {
        PingPong::new(self.from, self.to, Duration::from_millis(self.period_ms))
    }
}

fn normal_kind() -> String {
    CollidableKind::Normal.to_string()
}

/// Everything the collision core needs to know about one arena.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelDefinition {
    /// Physics overrides; omitted fields keep their defaults.
    pub physics: PhysicsConfig,
    /// Static boxes.
    pub boxes: Vec<BoxDefinition>,
    /// Lethal spike fields.
    pub spike_fields: Vec<SpikeFieldDefinition>,
    /// Coin centres.
    pub coins: Vec<[f32; 3]>,
    /// Model collision bounds.
    pub models: Vec<ModelDefinition>,
    /// Healing object centres.
    pub healing: Vec<[f32; 3]>,
    /// Moving obstacles.
    pub moving_obstacles: Vec<MoverDefinition>,
    /// Moving platforms.
    pub moving_platforms: Vec<MoverDefinition>,
}

impl LevelDefinition {
    /// Decode a level from JSON text.
    ///
    /// # Errors
    /// Returns [`LevelError::Json`] if the text is not a valid level.
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and decode a level file.
    ///
    /// # Errors
    /// Returns [`LevelError::Io`] if the file cannot be read and
    /// [`LevelError::Json`] if it is not a valid level.
    pub fn load(path: &Path) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Number of coins placed in the level.
    #[must_use]
    pub fn coin_count(&self) -> u32 {
        u32::try_from(self.coins.len()).unwrap_or(u32::MAX)
    }

    /// Build a world holding every object of the level.
    ///
    /// Boxes and models with an unknown kind are logged and skipped.
    ///
    /// # Errors
    /// Returns [`LevelError::Collision`] when a moving object names an axis
    /// it cannot travel along.
    pub fn build(&self) -> Result<CollisionWorld, LevelError> {
        let mut world = CollisionWorld::new(self.physics.clone());

        for (index, entry) in self.boxes.iter().enumerate() {
            let bounds = BoundingVolume::from_center_size(entry.position.into(), entry.size.into());
            register_checked(&mut world, "box", index, bounds, &entry.kind, entry.remove_on_collision)?;
        }

        for field in &self.spike_fields {
            let size = Vec3::new(field.width, SPIKE_HEIGHT, field.length);
            let id = world.allocate_id();
            world.register(
                id,
                BoundingVolume::from_center_size(field.center.into(), size),
                CollidableKind::Lethal,
                false,
            )?;
        }

        for coin in &self.coins {
            let id = world.allocate_id();
            world.register(
                id,
                BoundingVolume::from_center_size((*coin).into(), COIN_SIZE.into()),
                CollidableKind::Point,
                true,
            )?;
        }

        for (index, model) in self.models.iter().enumerate() {
            let bounds = BoundingVolume::from_center_size(model.position.into(), model.size.into());
            register_checked(&mut world, "model", index, bounds, &model.kind, false)?;
        }

        let heal = CollidableKind::Heal {
            amount: HEALING_OBJECT_AMOUNT,
            stops: false,
        };
        for position in &self.healing {
            let id = world.allocate_id();
            world.register(
                id,
                BoundingVolume::from_center_size((*position).into(), HEALING_OBJECT_SIZE.into()),
                heal,
                true,
            )?;
        }

        for mover in &self.moving_obstacles {
            let axis: ObstacleAxis = mover.axis.parse()?;
            let id = world.allocate_id();
            let obstacle = MovingObstacle::new(id, mover.position.into(), mover.size.into(), axis, mover.path());
            world.add_moving_obstacle(obstacle)?;
        }

        for mover in &self.moving_platforms {
            let axis: PlatformAxis = mover.axis.parse()?;
            let id = world.allocate_id();
            let platform = MovingPlatform::new(id, mover.position.into(), mover.size.into(), axis, mover.path());
            world.add_moving_platform(platform)?;
        }

        info!("level built with {} collidables", world.registry().len());
        Ok(world)
    }
}

/// Register one level entry, skipping it when its kind is not recognised.
fn register_checked(
    world: &mut CollisionWorld,
    what: &str,
    index: usize,
    bounds: BoundingVolume,
    kind: &str,
    remove_on_collision: bool,
) -> Result<(), CollisionError> {
    let kind = match kind.parse::<CollidableKind>() {
        Ok(kind) => kind,
        Err(err) => {
            error!("skipping {what} #{index}: {err}");
            return Ok(());
        }
    };
    let id = world.allocate_id();
    world.register(id, bounds, kind, remove_on_collision)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryMode;
    use crate::registry::CollidableEntry;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn entries_of(world: &CollisionWorld, kind: CollidableKind) -> Vec<CollidableEntry> {
        world
            .registry()
            .entries()
            .filter(|entry| entry.kind == kind)
            .copied()
            .collect()
    }

    #[rstest]
    fn empty_document_builds_an_empty_world() {
        let level = LevelDefinition::from_json("{}").expect("empty level");
        let world = level.build().expect("build");
        assert!(world.registry().is_empty());
        assert_eq!(world.config(), &PhysicsConfig::default());
    }

    #[rstest]
    fn physics_overrides_keep_remaining_defaults() {
        let level = LevelDefinition::from_json(r#"{"physics": {"boundary": "deadzone", "arena_size": 600.0}}"#)
            .expect("level");
        assert_eq!(level.physics.boundary, BoundaryMode::Deadzone);
        assert_relative_eq!(level.physics.arena_size, 600.0);
        assert_relative_eq!(level.physics.push_distance, 0.2);
    }

    #[rstest]
    fn unknown_kinds_are_skipped() {
        let level = LevelDefinition::from_json(
            r#"{
                "boxes": [
                    {"position": [0, 0, 0], "size": [10, 10, 10], "kind": "LAVA"},
                    {"position": [30, 10, 0], "size": [20, 20, 20]}
                ],
                "models": [{"position": [350, 0, 236], "size": [5, 10, 5], "kind": "DAMAGE-100-STOP"}]
            }"#,
        )
        .expect("level");
        let world = level.build().expect("build");
        assert_eq!(world.registry().len(), 2);
        assert_eq!(entries_of(&world, CollidableKind::Normal).len(), 1);
        let damage = CollidableKind::Damage {
            amount: 100.0,
            stops: true,
        };
        assert_eq!(entries_of(&world, damage).len(), 1);
    }

    #[rstest]
    #[case(r#"{"moving_platforms": [{"position": [0, 90, 0], "size": [30, 5, 30], "axis": "Y", "from": 0, "to": 10, "period_ms": 100}]}"#)]
    #[case(r#"{"moving_obstacles": [{"position": [0, 90, 0], "size": [30, 5, 30], "axis": "Q", "from": 0, "to": 10, "period_ms": 100}]}"#)]
    fn invalid_axes_abort_the_load(#[case] json: &str) {
        let level = LevelDefinition::from_json(json).expect("level decodes");
        let err = level.build().expect_err("axis must be rejected");
        assert!(matches!(
            err,
            LevelError::Collision(CollisionError::InvalidAxisSpecifier { .. })
        ));
    }

    #[rstest]
    fn hazards_and_pickups_use_fixed_shapes() {
        let level = LevelDefinition::from_json(
            r#"{
                "spike_fields": [{"center": [100, 0, 20], "width": 40, "length": 20}],
                "coins": [[30, 30, 0], [70, 50, 20]],
                "healing": [[-30, 10, -60]]
            }"#,
        )
        .expect("level");
        assert_eq!(level.coin_count(), 2);
        let world = level.build().expect("build");

        let spikes = entries_of(&world, CollidableKind::Lethal);
        let spike = spikes.first().expect("spike field registered");
        assert_eq!(spike.bounds.size(), Vec3::new(40.0, 10.0, 20.0));

        let coins = entries_of(&world, CollidableKind::Point);
        assert_eq!(coins.len(), 2);
        assert!(coins.iter().all(|coin| coin.remove_on_collision));
        assert!(coins
            .iter()
            .all(|coin| coin.bounds.size() == Vec3::new(14.0, 14.0, 4.0)));

        let heal = CollidableKind::Heal {
            amount: 500.0,
            stops: false,
        };
        let healing = entries_of(&world, heal);
        assert_eq!(healing.len(), 1);
        assert!(healing.iter().all(|entry| entry.remove_on_collision));
    }

    #[rstest]
    fn movers_are_driven_by_the_world() {
        let level = LevelDefinition::from_json(
            r#"{
                "moving_obstacles": [{"position": [180, 100, -90], "size": [10, 30, 30], "axis": "X", "from": 180, "to": 100, "period_ms": 3000}],
                "moving_platforms": [{"position": [130, 90, -170], "size": [30, 5, 30], "axis": "X", "from": 130, "to": 50, "period_ms": 5000}]
            }"#,
        )
        .expect("level");
        let world = level.build().expect("build");
        assert_eq!(world.obstacles().len(), 1);
        assert_eq!(world.platforms().len(), 1);
        assert_eq!(entries_of(&world, CollidableKind::MovingPlatform).len(), 1);
    }

    #[rstest]
    fn missing_file_reports_its_path() {
        let err = LevelDefinition::load(Path::new("no/such/level.json")).expect_err("missing file");
        assert!(matches!(err, LevelError::Io { ref path, .. } if path == Path::new("no/such/level.json")));
    }
}
