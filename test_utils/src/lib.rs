//! Utility helpers for tests.
pub mod scene;

pub use scene::{cube, slab_under, TestScene};

use arena::{DamageSource, EventLog, GameEvent};
use glam::Vec3;

/// Assert that two vectors agree on every axis within `epsilon`.
///
/// # Panics
/// Panics with both vectors in the message if any axis differs by more than
/// `epsilon`.
pub fn assert_vec_near(actual: Vec3, expected: Vec3, epsilon: f32) {
    assert!(
        actual.abs_diff_eq(expected, epsilon),
        "{actual} differs from {expected} by more than {epsilon}"
    );
}

/// Total damage recorded from `source`.
#[must_use]
pub fn damage_from(log: &EventLog, source: DamageSource) -> f32 {
    log.events()
        .iter()
        .filter_map(|event| match event {
            GameEvent::Damage { amount, source: s } if *s == source => Some(*amount),
            _ => None,
        })
        .sum()
}
