//! Collision response kinds and their textual encoding.
//!
//! Level data names kinds with short upper-case tokens. Damage and heal
//! kinds carry their amount and whether the hit stops the player:
//!
//! | text | kind |
//! |---|---|
//! | `NORMAL` or `0` | [`CollidableKind::Normal`] |
//! | `LETHAL` or `1` | [`CollidableKind::Lethal`] |
//! | `POINT` or `2` | [`CollidableKind::Point`] |
//! | `MOVING_OBSTACLE` or `3` | [`CollidableKind::MovingObstacle`] |
//! | `MOVING_PLATFORM` or `4` | [`CollidableKind::MovingPlatform`] |
//! | `DAMAGE-<amount>[-STOP\|-NOSTOP]` | [`CollidableKind::Damage`] |
//! | `HEAL-<amount>[-STOP\|-NOSTOP]` | [`CollidableKind::Heal`] |
//!
//! A missing stop suffix means `NOSTOP`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CollisionError;
use crate::numeric::parse_amount;

const DAMAGE_PREFIX: &str = "DAMAGE";
const HEAL_PREFIX: &str = "HEAL";
const STOP: &str = "STOP";
const NO_STOP: &str = "NOSTOP";

/// How the world reacts when the player touches a collidable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CollidableKind {
    /// Solid scenery; blocks movement.
    Normal,
    /// Kills the player on contact.
    Lethal,
    /// Collectible coin; always removed once touched.
    Point,
    /// Fast moving obstacle that shoves the player aside.
    MovingObstacle,
    /// Moving platform that carries a player standing on it.
    MovingPlatform,
    /// Hurts the player.
    Damage {
        /// Health points removed per hit.
        amount: f32,
        /// Whether the hit blocks movement.
        stops: bool,
    },
    /// Restores health.
    Heal {
        /// Health points restored per hit.
        amount: f32,
        /// Whether the hit blocks movement.
        stops: bool,
    },
}

impl CollidableKind {
    /// Whether entries of this kind must disappear after the first hit
    /// regardless of what the registering code asked for.
    #[must_use]
    pub const fn forces_removal(self) -> bool {
        matches!(self, Self::Point)
    }
}

fn parse_stop_flag(suffix: Option<&str>) -> Option<bool> {
    match suffix {
        None | Some(NO_STOP) => Some(false),
        Some(STOP) => Some(true),
        Some(_) => None,
    }
}

fn parse_amount_kind(text: &str) -> Option<CollidableKind> {
    let mut parts = text.split('-');
    let prefix = parts.next()?;
    let amount = parse_amount(parts.next()?)?;
    let stops = parse_stop_flag(parts.next())?;
    if parts.next().is_some() {
        return None;
    }
    match prefix {
        DAMAGE_PREFIX => Some(CollidableKind::Damage { amount, stops }),
        HEAL_PREFIX => Some(CollidableKind::Heal { amount, stops }),
        _ => None,
    }
}

impl FromStr for CollidableKind {
    type Err = CollisionError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let token = text.trim();
        let kind = match token {
            "NORMAL" | "0" => Some(Self::Normal),
            "LETHAL" | "1" => Some(Self::Lethal),
            "POINT" | "2" => Some(Self::Point),
            "MOVING_OBSTACLE" | "3" => Some(Self::MovingObstacle),
            "MOVING_PLATFORM" | "4" => Some(Self::MovingPlatform),
            other => parse_amount_kind(other),
        };
        kind.ok_or_else(|| CollisionError::UnknownCollidableKind(text.to_owned()))
    }
}

impl TryFrom<String> for CollidableKind {
    type Error = CollisionError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<CollidableKind> for String {
    fn from(kind: CollidableKind) -> Self {
        kind.to_string()
    }
}

fn stop_suffix(stops: bool) -> &'static str {
    if stops {
        STOP
    } else {
        NO_STOP
    }
}

impl fmt::Display for CollidableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("NORMAL"),
            Self::Lethal => f.write_str("LETHAL"),
            Self::Point => f.write_str("POINT"),
            Self::MovingObstacle => f.write_str("MOVING_OBSTACLE"),
            Self::MovingPlatform => f.write_str("MOVING_PLATFORM"),
            Self::Damage { amount, stops } => {
                write!(f, "{DAMAGE_PREFIX}-{amount}-{}", stop_suffix(*stops))
            }
            Self::Heal { amount, stops } => {
                write!(f, "{HEAL_PREFIX}-{amount}-{}", stop_suffix(*stops))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NORMAL", CollidableKind::Normal)]
    #[case("0", CollidableKind::Normal)]
    #[case("1", CollidableKind::Lethal)]
    #[case("POINT", CollidableKind::Point)]
    #[case("MOVING_OBSTACLE", CollidableKind::MovingObstacle)]
    #[case("4", CollidableKind::MovingPlatform)]
    #[case("DAMAGE-100-STOP", CollidableKind::Damage { amount: 100.0, stops: true })]
    #[case("DAMAGE-50-NOSTOP", CollidableKind::Damage { amount: 50.0, stops: false })]
    #[case("HEAL-20-NOSTOP", CollidableKind::Heal { amount: 20.0, stops: false })]
    #[case("HEAL-500", CollidableKind::Heal { amount: 500.0, stops: false })]
    fn parses_known_kinds(#[case] text: &str, #[case] expected: CollidableKind) {
        let kind: CollidableKind = text.parse().expect("known kind");
        assert_eq!(kind, expected);
    }

    #[rstest]
    #[case("LAVA")]
    #[case("DAMAGE")]
    #[case("DAMAGE-")]
    #[case("DAMAGE-ten-STOP")]
    #[case("DAMAGE-10-HALT")]
    #[case("HEAL-10-STOP-EXTRA")]
    #[case("SHIELD-10-STOP")]
    #[case("5")]
    fn rejects_unknown_kinds(#[case] text: &str) {
        let err = text.parse::<CollidableKind>().expect_err("unknown kind");
        assert_eq!(err, CollisionError::UnknownCollidableKind(text.to_owned()));
    }

    #[rstest]
    #[case("DAMAGE-100-STOP")]
    #[case("HEAL-20-NOSTOP")]
    #[case("MOVING_PLATFORM")]
    fn canonical_text_is_preserved(#[case] text: &str) {
        let kind: CollidableKind = text.parse().expect("known kind");
        assert_eq!(kind.to_string(), text);
    }

    #[rstest]
    fn deserialises_from_json_string() {
        let kind: CollidableKind =
            serde_json::from_str("\"DAMAGE-100-STOP\"").expect("valid json kind");
        assert_eq!(kind, CollidableKind::Damage { amount: 100.0, stops: true });
        assert!(serde_json::from_str::<CollidableKind>("\"BOGUS\"").is_err());
    }

    #[rstest]
    fn only_points_force_removal() {
        assert!(CollidableKind::Point.forces_removal());
        assert!(!CollidableKind::Heal { amount: 1.0, stops: false }.forces_removal());
    }
}
