//! Axis-aligned bounding volumes.
//!
//! Every collidable and every probe is described by a [`BoundingVolume`].
//! Volumes are replaced wholesale when their owner moves; nothing patches
//! them incrementally.

use glam::Vec3;

use crate::error::CollisionError;

/// Axis-aligned box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    min: Vec3,
    max: Vec3,
}

impl BoundingVolume {
    /// Build a volume from its corners.
    ///
    /// # Errors
    /// Returns [`CollisionError::InvalidBounds`] when `min` exceeds `max` on
    /// any axis or a corner is not finite.
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, CollisionError> {
        if !min.is_finite() || !max.is_finite() || min.cmpgt(max).any() {
            return Err(CollisionError::InvalidBounds {
                min: min.to_array(),
                max: max.to_array(),
            });
        }
        Ok(Self { min, max })
    }

    /// Build a volume centred on `center` with the given full `size`.
    ///
    /// Negative size components are treated by magnitude.
    ///
    /// # Examples
    /// ```
    /// use arena::BoundingVolume;
    /// use glam::Vec3;
    ///
    /// let volume = BoundingVolume::from_center_size(Vec3::new(0.0, 5.0, 0.0), Vec3::splat(2.0));
    /// assert_eq!(volume.min(), Vec3::new(-1.0, 4.0, -1.0));
    /// assert_eq!(volume.center(), Vec3::new(0.0, 5.0, 0.0));
    /// ```
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Build a volume extending `half_extents` from `center` on each side.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self::from_center_size(center, half_extents * 2.0)
    }

    /// Minimum corner.
    #[must_use]
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the two corners.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extent along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Inclusive intersection test; touching faces count as intersecting.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn unit_at(center: Vec3) -> BoundingVolume {
        BoundingVolume::from_center_size(center, Vec3::ONE)
    }

    #[rstest]
    fn rejects_inverted_corners() {
        let err = BoundingVolume::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO)
            .expect_err("inverted corners must be rejected");
        assert!(matches!(err, CollisionError::InvalidBounds { .. }));
    }

    #[rstest]
    fn rejects_non_finite_corners() {
        assert!(BoundingVolume::new(Vec3::splat(f32::NAN), Vec3::ONE).is_err());
    }

    #[rstest]
    fn accepts_degenerate_volume() {
        let volume = BoundingVolume::new(Vec3::ONE, Vec3::ONE).expect("flat volume is valid");
        assert_eq!(volume.size(), Vec3::ZERO);
    }

    #[rstest]
    fn centre_is_midpoint() {
        let volume = BoundingVolume::new(Vec3::new(-2.0, 0.0, 4.0), Vec3::new(6.0, 10.0, 8.0))
            .expect("valid corners");
        let center = volume.center();
        assert_relative_eq!(center.x, 2.0);
        assert_relative_eq!(center.y, 5.0);
        assert_relative_eq!(center.z, 6.0);
    }

    #[rstest]
    #[case(Vec3::new(0.5, 0.0, 0.0), true)]
    #[case(Vec3::new(1.0, 0.0, 0.0), true)]
    #[case(Vec3::new(1.01, 0.0, 0.0), false)]
    #[case(Vec3::new(0.0, 0.0, -3.0), false)]
    fn intersection_is_inclusive(#[case] other_center: Vec3, #[case] expected: bool) {
        let a = unit_at(Vec3::ZERO);
        let b = unit_at(other_center);
        assert_eq!(a.intersects(&b), expected);
        assert_eq!(b.intersects(&a), expected);
    }
}
