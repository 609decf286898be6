//! Outbound notifications consumed by gameplay, UI and audio layers.
//!
//! The collision core never renders or plays sounds itself. It reports what
//! happened through [`GameEvents`], and the host decides what to show.

use std::fmt;

use crate::registry::CollidableId;

/// Where a damage notification originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageSource {
    /// Touching a damaging collidable.
    Collision,
    /// Landing after a long fall.
    Fall,
    /// Lingering outside the arena.
    Deadzone,
}

impl DamageSource {
    /// Message shown when damage from this source kills the player.
    #[must_use]
    pub const fn death_message(self) -> &'static str {
        match self {
            Self::Collision => DEFAULT_DEATH_MESSAGE,
            Self::Fall => "You fell from too high!",
            Self::Deadzone => "The deadzone killed you!",
        }
    }
}

/// Message used when a lethal collidable kills the player.
pub const DEFAULT_DEATH_MESSAGE: &str = "You died!";

/// Receiver of gameplay notifications raised during a frame.
#[cfg_attr(test, mockall::automock)]
pub trait GameEvents {
    /// The player was killed outright.
    fn on_death(&mut self, message: &str);
    /// The player took damage.
    fn on_damage(&mut self, amount: f32, source: DamageSource);
    /// The player was healed.
    fn on_heal(&mut self, amount: f32);
    /// The player picked up a collectible.
    fn on_score(&mut self);
    /// A collidable was removed; the scene should detach its visual object.
    fn on_object_removed(&mut self, id: CollidableId);
    /// The player mounted a platform (`Some`) or left it (`None`).
    fn on_platform_mount(&mut self, platform: Option<CollidableId>);
    /// The player is in the deadzone; throttled by the arena guard.
    fn on_deadzone_warning(&mut self);
    /// The player returned from the deadzone.
    fn on_deadzone_left(&mut self);
}

/// Owned record of one notification.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// See [`GameEvents::on_death`].
    Death(String),
    /// See [`GameEvents::on_damage`].
    Damage {
        /// Health points removed.
        amount: f32,
        /// Origin of the damage.
        source: DamageSource,
    },
    /// See [`GameEvents::on_heal`].
    Heal(f32),
    /// See [`GameEvents::on_score`].
    Score,
    /// See [`GameEvents::on_object_removed`].
    ObjectRemoved(CollidableId),
    /// See [`GameEvents::on_platform_mount`].
    PlatformMount(Option<CollidableId>),
    /// See [`GameEvents::on_deadzone_warning`].
    DeadzoneWarning,
    /// See [`GameEvents::on_deadzone_left`].
    DeadzoneLeft,
}

impl GameEvent {
    /// Replay this record into another receiver.
    pub fn dispatch(&self, events: &mut dyn GameEvents) {
        match self {
            Self::Death(message) => events.on_death(message),
            Self::Damage { amount, source } => events.on_damage(*amount, *source),
            Self::Heal(amount) => events.on_heal(*amount),
            Self::Score => events.on_score(),
            Self::ObjectRemoved(id) => events.on_object_removed(*id),
            Self::PlatformMount(platform) => events.on_platform_mount(*platform),
            Self::DeadzoneWarning => events.on_deadzone_warning(),
            Self::DeadzoneLeft => events.on_deadzone_left(),
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Death(message) => write!(f, "death: {message}"),
            Self::Damage { amount, source } => write!(f, "damage {amount} ({source:?})"),
            Self::Heal(amount) => write!(f, "heal {amount}"),
            Self::Score => f.write_str("score"),
            Self::ObjectRemoved(id) => write!(f, "removed {id}"),
            Self::PlatformMount(Some(id)) => write!(f, "mounted platform {id}"),
            Self::PlatformMount(None) => f.write_str("left platform"),
            Self::DeadzoneWarning => f.write_str("deadzone warning"),
            Self::DeadzoneLeft => f.write_str("left deadzone"),
        }
    }
}

/// Buffered notifications awaiting the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Remove and yield every recorded event.
    pub fn drain(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Number of recorded events matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameEvents for EventLog {
    fn on_death(&mut self, message: &str) {
        self.events.push(GameEvent::Death(message.to_owned()));
    }

    fn on_damage(&mut self, amount: f32, source: DamageSource) {
        self.events.push(GameEvent::Damage { amount, source });
    }

    fn on_heal(&mut self, amount: f32) {
        self.events.push(GameEvent::Heal(amount));
    }

    fn on_score(&mut self) {
        self.events.push(GameEvent::Score);
    }

    fn on_object_removed(&mut self, id: CollidableId) {
        self.events.push(GameEvent::ObjectRemoved(id));
    }

    fn on_platform_mount(&mut self, platform: Option<CollidableId>) {
        self.events.push(GameEvent::PlatformMount(platform));
    }

    fn on_deadzone_warning(&mut self) {
        self.events.push(GameEvent::DeadzoneWarning);
    }

    fn on_deadzone_left(&mut self) {
        self.events.push(GameEvent::DeadzoneLeft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn log_records_in_arrival_order() {
        let mut log = EventLog::new();
        log.on_score();
        log.on_object_removed(CollidableId(3));
        log.on_damage(5.0, DamageSource::Fall);
        assert_eq!(
            log.events(),
            &[
                GameEvent::Score,
                GameEvent::ObjectRemoved(CollidableId(3)),
                GameEvent::Damage {
                    amount: 5.0,
                    source: DamageSource::Fall
                },
            ]
        );
        let drained: Vec<_> = log.drain().collect();
        assert_eq!(drained.len(), 3);
        assert!(log.is_empty());
    }

    #[rstest]
    fn dispatch_replays_into_receiver() {
        let mut mock = MockGameEvents::new();
        mock.expect_on_heal()
            .withf(|amount| (*amount - 20.0).abs() < f32::EPSILON)
            .times(1)
            .return_const(());
        mock.expect_on_platform_mount()
            .withf(|platform| *platform == Some(CollidableId(7)))
            .times(1)
            .return_const(());
        GameEvent::Heal(20.0).dispatch(&mut mock);
        GameEvent::PlatformMount(Some(CollidableId(7))).dispatch(&mut mock);
    }

    #[rstest]
    #[case(DamageSource::Collision, "You died!")]
    #[case(DamageSource::Fall, "You fell from too high!")]
    #[case(DamageSource::Deadzone, "The deadzone killed you!")]
    fn sources_name_their_death(#[case] source: DamageSource, #[case] message: &str) {
        assert_eq!(source.death_message(), message);
    }
}
