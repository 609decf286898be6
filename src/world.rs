//! One game session of the collision core.
//!
//! [`CollisionWorld`] owns the registry, the player and every controller,
//! and runs them in a fixed order each frame. Moving objects advance and a
//! running jump rises. Then the player probe is tested against the registry
//! and hits are answered and pushed out. Gravity is applied last, followed
//! by the arena boundary.

use std::time::Duration;

use log::{debug, trace};

use crate::arena::ArenaBoundsGuard;
use crate::bounds::BoundingVolume;
use crate::config::PhysicsConfig;
use crate::error::CollisionError;
use crate::events::GameEvents;
use crate::gravity::{GravityController, GravityState};
use crate::kind::CollidableKind;
use crate::motion::{MovingObstacle, MovingPlatform};
use crate::player::{ground_probe, player_probe, PlayerState};
use crate::pushout::{PushPriority, PushoutResolver};
use crate::registry::{CollidableEntry, CollidableId, CollidableRegistry};
use crate::responder::{CollisionResponder, ResponseContext};

/// Summary of one collision frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// The player must halt: a hit blocked or killed them, or they left the
    /// arena.
    pub stopped_movement: bool,
    /// The player was outside the arena this frame.
    pub out_of_bounds: bool,
    /// Entries the player body touched, in dispatch order.
    pub hits: Vec<CollidableId>,
    /// Vertical state after gravity ran.
    pub gravity: GravityState,
}

/// Collision state for a single game session.
#[derive(Debug, Clone)]
pub struct CollisionWorld {
    config: PhysicsConfig,
    registry: CollidableRegistry,
    player: PlayerState,
    responder: CollisionResponder,
    pushout: PushoutResolver,
    gravity: GravityController,
    arena: ArenaBoundsGuard,
    obstacles: Vec<MovingObstacle>,
    platforms: Vec<MovingPlatform>,
    next_id: u64,
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl CollisionWorld {
    /// Empty world with a freshly spawned player.
    #[must_use]
    pub fn new(config: PhysicsConfig) -> Self {
        let pushout = PushoutResolver::new(config.overlap_test);
        let responder = CollisionResponder::new(pushout);
        Self {
            registry: CollidableRegistry::new(),
            player: PlayerState::spawned(&config),
            responder,
            pushout,
            gravity: GravityController::new(responder),
            arena: ArenaBoundsGuard::new(&config),
            obstacles: Vec::new(),
            platforms: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Session tuning.
    #[must_use]
    pub const fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Registered collidables.
    #[must_use]
    pub const fn registry(&self) -> &CollidableRegistry {
        &self.registry
    }

    /// The player.
    #[must_use]
    pub const fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable access to the player, for input handling and respawns.
    pub fn player_mut(&mut self) -> &mut PlayerState {
        &mut self.player
    }

    /// Arena containment state.
    #[must_use]
    pub const fn arena(&self) -> &ArenaBoundsGuard {
        &self.arena
    }

    /// Vertical state reached by the last frame.
    #[must_use]
    pub const fn gravity_state(&self) -> GravityState {
        self.gravity.state()
    }

    /// Moving obstacles driven by this world.
    #[must_use]
    pub fn obstacles(&self) -> &[MovingObstacle] {
        &self.obstacles
    }

    /// Moving platforms driven by this world.
    #[must_use]
    pub fn platforms(&self) -> &[MovingPlatform] {
        &self.platforms
    }

    /// Smallest identifier above every id handed out so far that is not
    /// registered.
    pub fn allocate_id(&mut self) -> CollidableId {
        while self.registry.contains(CollidableId(self.next_id)) {
            self.next_id += 1;
        }
        let id = CollidableId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a collidable.
    ///
    /// # Errors
    /// Returns [`CollisionError::DuplicateRegistration`] if `id` is taken.
    pub fn register(
        &mut self,
        id: CollidableId,
        bounds: BoundingVolume,
        kind: CollidableKind,
        remove_on_collision: bool,
    ) -> Result<CollidableId, CollisionError> {
        self.registry.register(id, bounds, kind, remove_on_collision)
    }

    /// Register a collidable whose kind is given in its textual form.
    ///
    /// # Errors
    /// Returns [`CollisionError::UnknownCollidableKind`] for unrecognised
    /// kind text and [`CollisionError::DuplicateRegistration`] if `id` is
    /// taken.
    pub fn register_encoded(
        &mut self,
        id: CollidableId,
        bounds: BoundingVolume,
        kind: &str,
        remove_on_collision: bool,
    ) -> Result<CollidableId, CollisionError> {
        self.registry
            .register_encoded(id, bounds, kind, remove_on_collision)
    }

    /// Replace the bounds of a registered collidable. Unknown ids are ignored.
    pub fn update_bounds(&mut self, id: CollidableId, bounds: BoundingVolume) -> bool {
        self.registry.update_bounds(id, bounds)
    }

    /// Remove a collidable and stop driving it if it moves.
    pub fn unregister(&mut self, id: CollidableId) -> Option<CollidableEntry> {
        self.obstacles.retain(|obstacle| obstacle.id() != id);
        self.platforms.retain(|platform| platform.id() != id);
        self.registry.unregister(id)
    }

    /// Register a moving obstacle and drive it every frame.
    ///
    /// # Errors
    /// Returns [`CollisionError::DuplicateRegistration`] if its id is taken.
    pub fn add_moving_obstacle(&mut self, obstacle: MovingObstacle) -> Result<CollidableId, CollisionError> {
        let id = obstacle.register(&mut self.registry)?;
        self.obstacles.push(obstacle);
        Ok(id)
    }

    /// Register a moving platform and drive it every frame.
    ///
    /// # Errors
    /// Returns [`CollisionError::DuplicateRegistration`] if its id is taken.
    pub fn add_moving_platform(&mut self, platform: MovingPlatform) -> Result<CollidableId, CollisionError> {
        let id = platform.register(&mut self.registry)?;
        self.platforms.push(platform);
        Ok(id)
    }

    /// Start a jump lasting the configured jump time.
    ///
    /// Returns `false` while a jump is already running or the player falls.
    pub fn jump(&mut self) -> bool {
        let started = self.player.begin_jump(self.config.jump_time());
        if started {
            debug!("player jumped at {}", self.player.position);
        }
        started
    }

    /// Volume standing in for the player's body at its current position.
    #[must_use]
    pub fn player_probe(&self) -> BoundingVolume {
        player_probe(self.player.position, &self.config)
    }

    /// Volume used to find what the player stands on.
    #[must_use]
    pub fn ground_probe(&self) -> BoundingVolume {
        ground_probe(self.player.position, &self.config)
    }

    /// Advance every moving object by `dt`, carrying the player with the
    /// platform they stand on.
    pub fn advance_movers(&mut self, dt: Duration) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(dt, &mut self.registry);
        }
        for platform in &mut self.platforms {
            platform.advance(dt, &mut self.registry, &mut self.player);
        }
    }

    /// Run one collision frame lasting `dt`, reporting effects to `events`.
    pub fn run_frame(&mut self, dt: Duration, events: &mut dyn GameEvents) -> FrameReport {
        self.advance_movers(dt);
        self.player.jump_step(dt, &self.config);

        let probe = player_probe(self.player.position, &self.config);
        let touching = self.registry.intersecting(&probe);
        trace!("player probe touches {} collidables", touching.len());

        let mut report = FrameReport::default();
        let mut ctx = ResponseContext {
            registry: &mut self.registry,
            player: &mut self.player,
            config: &self.config,
            events,
        };

        for entry in &touching {
            let outcome = self.responder.handle(entry, &mut ctx);
            report.hits.push(entry.id);
            report.stopped_movement |= outcome.fatal;
            if outcome.stops_movement && !outcome.removed {
                report.stopped_movement = true;
                let position = ctx.player.position;
                let body = player_probe(position, ctx.config);
                ctx.player.position += self.pushout.resolve(
                    &body,
                    &entry.bounds,
                    position,
                    ctx.config.push_distance,
                    PushPriority::Uniform,
                );
            }
        }

        report.gravity = self.gravity.tick(&mut ctx, &report.hits);
        report.out_of_bounds = self.arena.tick(&mut ctx.player.position, dt, ctx.events);
        report.stopped_movement |= report.out_of_bounds;

        if report.stopped_movement {
            debug!("player movement stopped at {}", self.player.position);
            self.player.stop_movement();
        }
        report
    }
}
