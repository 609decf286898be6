//! Positional correction separating the player from an object.
//!
//! Corrections are fixed-size nudges rather than penetration depths. Each
//! nudge moves the player away from the object's centre along one axis.

use glam::Vec3;

use crate::bounds::BoundingVolume;
use crate::config::OverlapTest;

/// Order in which axes are corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushPriority {
    /// Correct X, Z and Y independently.
    Uniform,
    /// Correct X if it overlaps, else Z, else Y. Fast horizontal movers use
    /// this so they shove the player sideways instead of into the floor.
    HorizontalFirst,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    const fn pick(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }
}

/// Pushout calculator bound to an overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PushoutResolver {
    overlap: OverlapTest,
}

impl PushoutResolver {
    /// Resolver using `overlap` to decide which axes need correcting.
    #[must_use]
    pub const fn new(overlap: OverlapTest) -> Self {
        Self { overlap }
    }

    fn overlaps(self, axis: Axis, player: &BoundingVolume, object: &BoundingVolume) -> bool {
        let (p_min, p_max) = (axis.pick(player.min()), axis.pick(player.max()));
        let (o_min, o_max) = (axis.pick(object.min()), axis.pick(object.max()));
        match self.overlap {
            OverlapTest::Permissive => match axis {
                Axis::Y => p_min <= o_max || p_max > o_min,
                Axis::X | Axis::Z => p_min <= o_max || p_max >= o_min,
            },
            OverlapTest::Strict => p_min <= o_max && p_max >= o_min,
        }
    }

    /// Correction along a single axis, away from the object's centre.
    fn push_along(axis: Axis, center: Vec3, position: Vec3, distance: f32) -> Vec3 {
        let sign = if axis.pick(center) > axis.pick(position) {
            -1.0
        } else {
            1.0
        };
        axis.unit() * (sign * distance)
    }

    /// Delta to add to the player's position.
    #[must_use]
    pub fn resolve(
        self,
        player: &BoundingVolume,
        object: &BoundingVolume,
        position: Vec3,
        distance: f32,
        priority: PushPriority,
    ) -> Vec3 {
        let center = object.center();
        match priority {
            PushPriority::Uniform => [Axis::X, Axis::Z, Axis::Y]
                .into_iter()
                .filter(|axis| self.overlaps(*axis, player, object))
                .map(|axis| Self::push_along(axis, center, position, distance))
                .sum(),
            PushPriority::HorizontalFirst => [Axis::X, Axis::Z, Axis::Y]
                .into_iter()
                .find(|axis| self.overlaps(*axis, player, object))
                .map_or(Vec3::ZERO, |axis| {
                    Self::push_along(axis, center, position, distance)
                }),
        }
    }
}
