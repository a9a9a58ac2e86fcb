use std::time::{Duration, Instant};

/// Repaint cadence of the clock.
pub const FIXED_INTERVAL: Duration = Duration::from_millis(500);

/// Accumulator for fixed-step scheduling.
///
/// Elapsed wall time is added on every [`advance`](Self::advance). When at
/// least one interval has accumulated the owner runs one step and calls
/// [`consume`](Self::consume), which keeps the sub-interval remainder
/// (modulo) instead of zeroing. Jitter in when steps actually run therefore
/// never shifts the long-run cadence.
///
/// Elapsed time is not clamped: a stall of several intervals yields one step
/// and a remainder, not a burst of catch-up steps.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    last: Instant,
}

impl FixedStep {
    /// Creates an empty accumulator whose baseline is `now`.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn new(interval: Duration, now: Instant) -> Self {
        assert!(!interval.is_zero(), "fixed-step interval must be non-zero");
        Self {
            interval,
            accumulator: Duration::ZERO,
            last: now,
        }
    }

    /// Clears the accumulator and moves the baseline to `now`.
    pub fn reset(&mut self, now: Instant) {
        self.accumulator = Duration::ZERO;
        self.last = now;
    }

    /// Adds the time elapsed since the previous call and returns it.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let dt = now.saturating_duration_since(self.last);
        self.accumulator += dt;
        self.last = now;
        dt
    }

    /// Time left until the next step is due, zero if it already is.
    #[inline]
    pub fn budget(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }

    #[inline]
    pub fn is_due(&self) -> bool {
        self.accumulator >= self.interval
    }

    /// Removes every whole interval from the accumulator.
    pub fn consume(&mut self) {
        let rem = self.accumulator.as_nanos() % self.interval.as_nanos();
        // rem < interval, which itself fits in a Duration.
        self.accumulator = Duration::from_nanos(rem as u64);
    }

    #[inline]
    pub fn accumulator(&self) -> Duration {
        self.accumulator
    }
}
