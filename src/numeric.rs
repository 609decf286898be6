//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between integer tick counters and the
//! `f32` domain used for world coordinates.

/// Convert a tick counter into `f32`.
///
/// Counters above 2^24 lose precision. Fall counters reset on every landing,
/// so that range is never reached in practice.
#[expect(
    clippy::cast_precision_loss,
    reason = "Tick counters stay far below the f32 mantissa limit."
)]
#[must_use]
pub fn ticks_as_f32(ticks: u32) -> f32 {
    ticks as f32
}

/// Parse a decimal amount used by the kind text protocol.
///
/// Returns `None` for empty, non-finite or negative input.
#[must_use]
pub fn parse_amount(text: &str) -> Option<f32> {
    let value: f32 = text.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("50", Some(50.0))]
    #[case("12.5", Some(12.5))]
    #[case("", None)]
    #[case("-3", None)]
    #[case("inf", None)]
    #[case("ten", None)]
    fn parses_amounts(#[case] input: &str, #[case] expected: Option<f32>) {
        assert_eq!(parse_amount(input), expected);
    }

    #[rstest]
    fn converts_small_counters_exactly() {
        assert!((ticks_as_f32(40) - 40.0).abs() < f32::EPSILON);
    }
}
