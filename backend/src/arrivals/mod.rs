//! Arrival stream generation (seed phase).
//!
//! The entire arrival stream is precomputed before the first event is
//! dispatched: inter-arrival gaps are sampled incrementally from the
//! exponential distribution at `rate = lambda`, a running offset
//! accumulates the gaps, and each arrival receives the next call id.
//! Arrival times therefore depend only on the seed and `lambda`, never
//! on service dynamics.
//!
//! The generating loop keeps sampling while the running offset is below
//! the horizon, so the final arrival may land exactly at or beyond the
//! horizon. It is still emitted — the engine's drain loop is what
//! excludes events at or past the horizon — which keeps the count of
//! *processed* arrivals equal to the count of generated arrivals with
//! timestamps strictly below the horizon.

use crate::models::event::Event;
use crate::rng::{sample_exponential, UniformSource};

/// Generator for the precomputed arrival stream
///
/// Owns the monotonic call id counter; ids start at 1 and increase by
/// one per arrival.
#[derive(Debug, Clone, Default)]
pub struct ArrivalGenerator {
    next_call_id: u64,
}

impl ArrivalGenerator {
    /// Create a generator with no calls issued yet
    pub fn new() -> Self {
        Self { next_call_id: 0 }
    }

    /// Generate the full arrival stream for one simulation run
    ///
    /// # Arguments
    /// * `lambda` - Arrival rate per minute (validated positive upstream)
    /// * `horizon` - Simulated minutes to cover
    /// * `source` - Uniform random source; one draw per arrival
    ///
    /// # Returns
    ///
    /// Arrival events in non-decreasing timestamp order (gaps of zero
    /// minutes produce several arrivals at the same minute).
    pub fn generate(
        &mut self,
        lambda: f64,
        horizon: u64,
        source: &mut dyn UniformSource,
    ) -> Vec<Event> {
        let mut arrivals = Vec::new();
        let mut offset: u64 = 0;

        while offset < horizon {
            offset += sample_exponential(source, lambda);
            self.next_call_id += 1;
            arrivals.push(Event::arrival(offset, self.next_call_id));
        }

        arrivals
    }
}
