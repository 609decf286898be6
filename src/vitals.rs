//! Health, death and collectibles.
//!
//! [`Vitals`] is the default receiver of collision notifications. It turns
//! damage and heals into a health pool, tracks the death/respawn cycle and
//! counts collected coins against the level total.

use std::time::Duration;

use glam::Vec3;
use log::{debug, info};

use crate::constants::{INVULNERABILITY_MS, MAX_HP, PASSIVE_REGEN_AMOUNT, PASSIVE_REGEN_INTERVAL_MS};
use crate::events::{DamageSource, GameEvents};
use crate::registry::CollidableId;
use crate::timer::{Cooldown, Interval};

/// Player health and progress for one session.
#[derive(Debug, Clone)]
pub struct Vitals {
    hp: f32,
    spawn: Vec3,
    invulnerable: Cooldown,
    regen: Interval,
    death_message: Option<String>,
    coins_found: u32,
    coins_total: u32,
    victory: Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Victory {
    Pending,
    Reached,
    Reported,
}

impl Vitals {
    /// Full-health player respawning at `spawn`, with `coins_total` coins to
    /// find.
    #[must_use]
    pub const fn new(spawn: Vec3, coins_total: u32) -> Self {
        Self {
            hp: MAX_HP,
            spawn,
            invulnerable: Cooldown::new(),
            regen: Interval::new(Duration::from_millis(PASSIVE_REGEN_INTERVAL_MS)),
            death_message: None,
            coins_found: 0,
            coins_total,
            victory: Victory::Pending,
        }
    }

    /// Remaining health points.
    #[must_use]
    pub const fn hp(&self) -> f32 {
        self.hp
    }

    /// Whether the player is dead and awaiting respawn.
    #[must_use]
    pub const fn is_dead(&self) -> bool {
        self.death_message.is_some()
    }

    /// Message describing the most recent death.
    #[must_use]
    pub fn death_message(&self) -> Option<&str> {
        self.death_message.as_deref()
    }

    /// Whether incoming damage is currently ignored.
    #[must_use]
    pub const fn is_invulnerable(&self) -> bool {
        self.invulnerable.is_active()
    }

    /// Coins collected so far.
    #[must_use]
    pub const fn coins_found(&self) -> u32 {
        self.coins_found
    }

    /// Coins placed in the level.
    #[must_use]
    pub const fn coins_total(&self) -> u32 {
        self.coins_total
    }

    /// Returns `true` exactly once, after the last coin has been collected.
    pub fn take_victory(&mut self) -> bool {
        if self.victory == Victory::Reached {
            self.victory = Victory::Reported;
            return true;
        }
        false
    }

    /// Advance the invulnerability window and passive regeneration by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.invulnerable.tick(dt);
        let periods = self.regen.tick(dt);
        if periods == 0 || self.is_dead() || self.hp >= MAX_HP {
            return;
        }
        for _ in 0..periods {
            self.restore(PASSIVE_REGEN_AMOUNT);
        }
    }

    /// Bring the player back at full health and return the spawn position.
    pub fn respawn(&mut self) -> Vec3 {
        info!("player respawned");
        self.hp = MAX_HP;
        self.death_message = None;
        self.invulnerable.cancel();
        self.regen.reset();
        self.spawn
    }

    fn restore(&mut self, amount: f32) {
        self.hp = (self.hp + amount).min(MAX_HP);
    }

    fn kill(&mut self, message: &str) {
        if self.is_dead() {
            return;
        }
        info!("player died: {message}");
        self.hp = 0.0;
        self.death_message = Some(message.to_owned());
    }
}

impl GameEvents for Vitals {
    fn on_death(&mut self, message: &str) {
        self.kill(message);
    }

    fn on_damage(&mut self, amount: f32, source: DamageSource) {
        if self.is_dead() || self.is_invulnerable() {
            return;
        }
        self.hp = (self.hp - amount).max(0.0);
        self.invulnerable.arm(Duration::from_millis(INVULNERABILITY_MS));
        debug!("player took {amount} damage ({source:?}), {} HP left", self.hp);
        if self.hp <= 0.0 {
            self.kill(source.death_message());
        }
    }

    fn on_heal(&mut self, amount: f32) {
        if !self.is_dead() {
            self.restore(amount);
        }
    }

    fn on_score(&mut self) {
        self.coins_found = self.coins_found.saturating_add(1);
        info!("coins found: {}/{}", self.coins_found, self.coins_total);
        // A level without coins has nothing to win by collecting.
        if self.victory == Victory::Pending
            && self.coins_total > 0
            && self.coins_found >= self.coins_total
        {
            self.victory = Victory::Reached;
        }
    }

    fn on_object_removed(&mut self, _id: CollidableId) {}

    fn on_platform_mount(&mut self, _platform: Option<CollidableId>) {}

    fn on_deadzone_warning(&mut self) {}

    fn on_deadzone_left(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn vitals() -> Vitals {
        Vitals::new(Vec3::new(0.0, 15.0, 0.0), 2)
    }

    #[rstest]
    fn damage_grants_a_short_invulnerability_window(mut vitals: Vitals) {
        vitals.on_damage(100.0, DamageSource::Collision);
        vitals.on_damage(100.0, DamageSource::Collision);
        assert_relative_eq!(vitals.hp(), 900.0);
        vitals.tick(Duration::from_millis(1000));
        vitals.on_damage(100.0, DamageSource::Collision);
        assert_relative_eq!(vitals.hp(), 800.0);
    }

    #[rstest]
    fn heals_ignore_invulnerability_and_clamp(mut vitals: Vitals) {
        vitals.on_damage(300.0, DamageSource::Fall);
        vitals.on_heal(100.0);
        assert_relative_eq!(vitals.hp(), 800.0);
        vitals.on_heal(500.0);
        assert_relative_eq!(vitals.hp(), MAX_HP);
    }

    #[rstest]
    fn lethal_damage_uses_the_source_message(mut vitals: Vitals) {
        vitals.on_damage(5000.0, DamageSource::Deadzone);
        assert_relative_eq!(vitals.hp(), 0.0);
        assert_eq!(vitals.death_message(), Some("The deadzone killed you!"));
    }

    #[rstest]
    fn death_happens_once_until_respawn(mut vitals: Vitals) {
        vitals.on_death("You died!");
        vitals.on_damage(5000.0, DamageSource::Fall);
        vitals.on_death("again");
        assert_eq!(vitals.death_message(), Some("You died!"));
        vitals.on_heal(200.0);
        assert_relative_eq!(vitals.hp(), 0.0);

        let spawn = vitals.respawn();
        assert_eq!(spawn, Vec3::new(0.0, 15.0, 0.0));
        assert!(!vitals.is_dead());
        assert_relative_eq!(vitals.hp(), MAX_HP);
    }

    #[rstest]
    fn regeneration_heals_every_three_seconds(mut vitals: Vitals) {
        vitals.on_damage(100.0, DamageSource::Collision);
        vitals.tick(Duration::from_millis(2900));
        assert_relative_eq!(vitals.hp(), 900.0);
        vitals.tick(Duration::from_millis(100));
        assert_relative_eq!(vitals.hp(), 910.0);
        vitals.tick(Duration::from_secs(6));
        assert_relative_eq!(vitals.hp(), 930.0);
    }

    #[rstest]
    fn dead_players_do_not_regenerate(mut vitals: Vitals) {
        vitals.on_death("You died!");
        vitals.tick(Duration::from_secs(9));
        assert_relative_eq!(vitals.hp(), 0.0);
    }

    #[rstest]
    fn victory_is_reported_once(mut vitals: Vitals) {
        vitals.on_score();
        assert!(!vitals.take_victory());
        vitals.on_score();
        assert_eq!(vitals.coins_found(), 2);
        assert!(vitals.take_victory());
        assert!(!vitals.take_victory());
        vitals.on_score();
        assert!(!vitals.take_victory());
    }

    #[rstest]
    fn coins_never_win_a_level_without_coins() {
        let mut vitals = Vitals::new(Vec3::new(0.0, 15.0, 0.0), 0);
        vitals.on_score();
        assert_eq!(vitals.coins_found(), 1);
        assert!(!vitals.take_victory());
    }
}
