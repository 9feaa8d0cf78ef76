//! Cooperative cancellation for the recursive searches.

use isolation_core::TimeLeft;

use crate::error::SearchCancelled;

/// Checks the turn clock at every recursive entry.
///
/// The guard only reads the clock. It turns "time is nearly up" into an
/// ordinary `Err` so the recursion unwinds through normal propagation.
#[derive(Clone, Copy)]
pub struct TimeGuard<'a> {
    clock: &'a dyn TimeLeft,
    threshold_ms: f64,
}

impl<'a> TimeGuard<'a> {
    pub fn new(clock: &'a dyn TimeLeft, threshold_ms: f64) -> Self {
        Self {
            clock,
            threshold_ms,
        }
    }

    /// Fails with [`SearchCancelled`] once fewer than `threshold_ms` remain.
    #[inline]
    pub fn check(&self) -> Result<(), SearchCancelled> {
        let remaining_ms = self.clock.time_left_ms();
        if remaining_ms < self.threshold_ms {
            return Err(SearchCancelled {
                remaining_ms,
                threshold_ms: self.threshold_ms,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for TimeGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeGuard")
            .field("threshold_ms", &self.threshold_ms)
            .finish_non_exhaustive()
    }
}
