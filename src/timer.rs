//! Frame-driven timers.
//!
//! Time only advances when the host passes a frame delta in, so timer state
//! never changes in the middle of a collision pass.

use std::time::Duration;

/// One-shot timer that must be re-armed after it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cooldown {
    remaining: Option<Duration>,
}

impl Cooldown {
    /// An idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { remaining: None }
    }

    /// Start (or restart) the timer.
    pub fn arm(&mut self, duration: Duration) {
        self.remaining = (!duration.is_zero()).then_some(duration);
    }

    /// Advance the timer by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.remaining = self
            .remaining
            .and_then(|remaining| remaining.checked_sub(dt))
            .filter(|remaining| !remaining.is_zero());
    }

    /// Whether the timer is still running.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.remaining.is_some()
    }

    /// Stop the timer.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }
}

/// Repeating timer counting whole periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    elapsed: Duration,
}

impl Interval {
    /// Timer firing every `period`. A zero period never fires.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by `dt` and return how many periods completed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Restart the current period.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn cooldown_expires_after_duration() {
        let mut cooldown = Cooldown::default();
        assert!(!cooldown.is_active());
        cooldown.arm(Duration::from_secs(2));
        cooldown.tick(Duration::from_millis(1500));
        assert!(cooldown.is_active());
        cooldown.tick(Duration::from_millis(500));
        assert!(!cooldown.is_active());
        cooldown.tick(Duration::from_secs(1));
        assert!(!cooldown.is_active());
    }

    #[rstest]
    fn interval_counts_whole_periods() {
        let mut interval = Interval::new(Duration::from_secs(1));
        assert_eq!(interval.tick(Duration::from_millis(600)), 0);
        assert_eq!(interval.tick(Duration::from_millis(600)), 1);
        assert_eq!(interval.tick(Duration::from_millis(2500)), 2);
        interval.reset();
        assert_eq!(interval.tick(Duration::from_millis(900)), 0);
    }

    #[rstest]
    fn zero_interval_never_fires() {
        let mut interval = Interval::new(Duration::ZERO);
        assert_eq!(interval.tick(Duration::from_secs(5)), 0);
    }
}
