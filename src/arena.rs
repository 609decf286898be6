//! Arena containment.
//!
//! The playable area is a square centred on the origin of the X/Z plane. A
//! wall boundary nudges an escaping player back one step per frame; a
//! deadzone boundary lets them out and hurts them until they return.

use std::time::Duration;

use glam::Vec3;
use log::{debug, warn};

use crate::config::{BoundaryMode, PhysicsConfig};
use crate::events::{DamageSource, GameEvents};
use crate::timer::{Cooldown, Interval};

/// Containment check for the square arena.
#[derive(Debug, Clone)]
pub struct ArenaBoundsGuard {
    half_size: f32,
    push_back: f32,
    mode: BoundaryMode,
    deadzone_damage: f32,
    damage_timer: Interval,
    warning_cooldown: Duration,
    warning: Cooldown,
    in_deadzone: bool,
}

impl ArenaBoundsGuard {
    /// Guard configured from session tuning.
    #[must_use]
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            half_size: config.arena_size * 0.5,
            push_back: config.arena_push_back,
            mode: config.boundary,
            deadzone_damage: config.deadzone_damage,
            damage_timer: Interval::new(config.deadzone_damage_interval()),
            warning_cooldown: config.deadzone_warning_cooldown(),
            warning: Cooldown::default(),
            in_deadzone: false,
        }
    }

    /// Whether `position` lies outside the arena on X or Z.
    #[must_use]
    pub fn is_outside(&self, position: Vec3) -> bool {
        position.x.abs() > self.half_size || position.z.abs() > self.half_size
    }

    /// Whether the player is currently inside the deadzone.
    #[must_use]
    pub const fn in_deadzone(&self) -> bool {
        self.in_deadzone
    }

    /// Report whether `position` is out of bounds and, for a wall boundary,
    /// move it one push-back step toward the interior on each offending axis.
    pub fn check_and_correct(&self, position: &mut Vec3) -> bool {
        if !self.is_outside(*position) {
            return false;
        }
        if self.mode == BoundaryMode::Wall {
            position.x = self.step_inward(position.x);
            position.z = self.step_inward(position.z);
            debug!("pushed player back toward the arena: {position}");
        }
        true
    }

    fn step_inward(&self, coordinate: f32) -> f32 {
        if coordinate > self.half_size {
            coordinate - self.push_back
        } else if coordinate < -self.half_size {
            coordinate + self.push_back
        } else {
            coordinate
        }
    }

    /// Per-frame containment: corrects or tracks the deadzone and advances
    /// its timers by `dt`. Returns whether the player was out of bounds.
    pub fn tick(&mut self, position: &mut Vec3, dt: Duration, events: &mut dyn GameEvents) -> bool {
        self.warning.tick(dt);
        let outside = self.check_and_correct(position);
        if self.mode == BoundaryMode::Deadzone {
            self.track_deadzone(outside, dt, events);
        }
        outside
    }

    fn track_deadzone(&mut self, outside: bool, dt: Duration, events: &mut dyn GameEvents) {
        if !outside {
            if self.in_deadzone {
                self.in_deadzone = false;
                debug!("player left the deadzone");
                events.on_deadzone_left();
            }
            return;
        }

        let mut hits = self.damage_timer.tick(dt);
        if !self.in_deadzone {
            self.in_deadzone = true;
            self.damage_timer.reset();
            hits = 1;
        }
        if !self.warning.is_active() {
            warn!("player entered the deadzone");
            events.on_deadzone_warning();
            self.warning.arm(self.warning_cooldown);
        }
        for _ in 0..hits {
            events.on_damage(self.deadzone_damage, DamageSource::Deadzone);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventLog, GameEvent};
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn guard(mode: BoundaryMode) -> ArenaBoundsGuard {
        ArenaBoundsGuard::new(&PhysicsConfig {
            boundary: mode,
            ..PhysicsConfig::default()
        })
    }

    fn deadzone_hits(log: &EventLog) -> usize {
        log.count(|event| {
            matches!(
                event,
                GameEvent::Damage {
                    source: DamageSource::Deadzone,
                    ..
                }
            )
        })
    }

    #[rstest]
    fn just_outside_is_corrected_toward_interior() {
        let wall = guard(BoundaryMode::Wall);
        let mut position = Vec3::new(501.0, 15.0, 0.0);
        assert!(wall.check_and_correct(&mut position));
        assert!(position.x < 501.0);
        assert_relative_eq!(position.z, 0.0);
    }

    #[rstest]
    #[case(Vec3::new(0.0, 15.0, 0.0))]
    #[case(Vec3::new(500.0, 15.0, -500.0))]
    fn inside_is_never_reported(#[case] start: Vec3) {
        let wall = guard(BoundaryMode::Wall);
        let mut position = start;
        assert!(!wall.check_and_correct(&mut position));
        assert_eq!(position, start);
    }

    #[rstest]
    fn repeated_corrections_restore_containment() {
        let wall = guard(BoundaryMode::Wall);
        let mut position = Vec3::new(-503.5, 15.0, 502.0);
        let mut frames = 0;
        while wall.check_and_correct(&mut position) {
            frames += 1;
        }
        assert_eq!(frames, 4);
        assert!(!wall.is_outside(position));
    }

    #[rstest]
    fn deadzone_does_not_push_back() {
        let deadzone = guard(BoundaryMode::Deadzone);
        let mut position = Vec3::new(600.0, 15.0, 0.0);
        assert!(deadzone.check_and_correct(&mut position));
        assert_relative_eq!(position.x, 600.0);
    }

    #[rstest]
    fn deadzone_damages_every_interval_and_throttles_warning() {
        let mut deadzone = guard(BoundaryMode::Deadzone);
        let mut log = EventLog::new();
        let mut position = Vec3::new(600.0, 15.0, 0.0);
        let frame = Duration::from_millis(250);
        // Five seconds outside.
        for _ in 0..20 {
            assert!(deadzone.tick(&mut position, frame, &mut log));
        }
        assert_eq!(deadzone_hits(&log), 5);
        assert_eq!(log.count(|event| *event == GameEvent::DeadzoneWarning), 1);

        position.x = 0.0;
        assert!(!deadzone.tick(&mut position, frame, &mut log));
        assert_eq!(log.count(|event| *event == GameEvent::DeadzoneLeft), 1);

        // Re-entering within the cool-down does not warn again.
        position.x = 600.0;
        deadzone.tick(&mut position, frame, &mut log);
        assert_eq!(log.count(|event| *event == GameEvent::DeadzoneWarning), 1);
        assert_eq!(deadzone_hits(&log), 6);
    }

    #[rstest]
    fn warning_repeats_after_cooldown() {
        let mut deadzone = guard(BoundaryMode::Deadzone);
        let mut log = EventLog::new();
        let mut position = Vec3::new(0.0, 15.0, 700.0);
        deadzone.tick(&mut position, Duration::from_millis(10), &mut log);
        deadzone.tick(&mut position, Duration::from_secs(21), &mut log);
        assert_eq!(log.count(|event| *event == GameEvent::DeadzoneWarning), 2);
    }
}
