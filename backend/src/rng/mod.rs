//! Deterministic random number generation and duration sampling.

pub mod xorshift;

pub use xorshift::SimRng;

/// Source of uniform random values in [0.0, 1.0)
///
/// The engine consumes randomness only through this trait, so a run can
/// be driven by the seeded [`SimRng`] in production and by a scripted
/// stub in tests.
pub trait UniformSource {
    /// Draw the next uniform value in [0.0, 1.0)
    fn next_uniform(&mut self) -> f64;
}

impl UniformSource for SimRng {
    fn next_uniform(&mut self) -> f64 {
        self.next_f64()
    }
}

/// Sample an exponentially distributed duration in whole minutes
///
/// Draws one uniform value `u` and returns `floor(-ln(1-u) / rate)`.
/// With `rate = lambda` this is an inter-arrival gap; with
/// `rate = 1 / mean_service_minutes` it is a service duration.
///
/// A draw with `u` near zero yields a duration of 0 minutes
/// (instantaneous service or an immediate next arrival). That is a
/// valid sample and is returned as-is.
///
/// `rate` must be positive; configuration validation enforces this
/// before any sampling happens.
///
/// # Example
/// ```
/// use call_center_sim_core_rs::{sample_exponential, SimRng};
///
/// let mut rng = SimRng::new(42);
/// let gap = sample_exponential(&mut rng, 0.5);
/// let _ = gap; // non-negative number of minutes
/// ```
pub fn sample_exponential(source: &mut dyn UniformSource, rate: f64) -> u64 {
    let u = source.next_uniform();
    (-(1.0 - u).ln() / rate).floor() as u64
}
