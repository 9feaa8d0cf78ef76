//! Move clocks for time-bounded agents.
//!
//! Agents never schedule or wait on time. They only observe it through
//! [`TimeLeft`], which reports the milliseconds remaining in the current
//! turn and decreases as wall-clock time passes.

use std::time::{Duration, Instant};

/// Read-only view of the time remaining in the current turn.
pub trait TimeLeft {
    /// Milliseconds left before the turn's deadline. Negative once it has passed.
    fn time_left_ms(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left_ms(&self) -> f64 {
        self()
    }
}

/// Wall-clock timer for a single turn.
///
/// Started at construction; `time_left_ms` is the limit minus elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct MoveTimer {
    start: Instant,
    limit: Duration,
}

impl MoveTimer {
    /// Start a timer with `limit` to spend on this move.
    pub fn start(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit,
        }
    }

    pub fn from_millis(limit_ms: u64) -> Self {
        Self::start(Duration::from_millis(limit_ms))
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Get elapsed time since the timer started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Remaining time, saturating at zero.
    pub fn remaining(&self) -> Duration {
        self.limit.saturating_sub(self.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed() > self.limit
    }
}

impl TimeLeft for MoveTimer {
    fn time_left_ms(&self) -> f64 {
        self.limit.as_secs_f64() * 1000.0 - self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
