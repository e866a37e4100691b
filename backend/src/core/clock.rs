//! Simulation clock
//!
//! The simulation advances in integer minutes, jumping directly to the
//! timestamp of each dispatched event. The clock never moves backwards:
//! the event queue hands out events in non-decreasing timestamp order,
//! and `advance_to` enforces that invariant.

use serde::{Deserialize, Serialize};

/// Monotonic simulation clock in integer minutes
///
/// # Example
/// ```
/// use call_center_sim_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0);
///
/// clock.advance_to(7);
/// assert_eq!(clock.now(), 7);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Minutes elapsed since simulation start
    now: u64,
}

impl SimClock {
    /// Create a clock at minute zero
    pub fn new() -> Self {
        Self { now: 0 }
    }

    /// Get the current simulated minute
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Advance the clock to `timestamp`
    ///
    /// Advancing to the current minute is allowed (several events may
    /// share a timestamp).
    ///
    /// # Panics
    /// Panics if `timestamp` is earlier than the current minute.
    pub fn advance_to(&mut self, timestamp: u64) {
        assert!(
            timestamp >= self.now,
            "clock cannot move backwards: {} -> {}",
            self.now,
            timestamp
        );
        self.now = timestamp;
    }
}
