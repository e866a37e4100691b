//! PyO3 wrapper for the simulation core
//!
//! Exposes the single core entry point — run one configuration to
//! completion — to a Python sweep driver.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::orchestrator::{run_simulation, CallCenterConfig};

/// Python wrapper for a call center simulation run
///
/// Holds a configuration and a seed; each `run()` replays the same
/// deterministic simulation and returns the same result.
///
/// # Example (from Python)
///
/// ```python
/// from call_center_sim_core_rs import CallCenter
///
/// sim = CallCenter(
///     num_agents=3,
///     max_wait_time=5,
///     lambda_per_minute=1.5,
///     average_call_time=4.0,
///     horizon=1440,
///     seed=42,
/// )
/// total, abandoned, utilization = sim.run()
/// ```
#[pyclass(name = "CallCenter")]
pub struct PyCallCenter {
    config: CallCenterConfig,
    seed: u64,
}

#[pymethods]
impl PyCallCenter {
    /// Create a simulation from configuration fields and a seed
    ///
    /// # Errors
    ///
    /// Raises ValueError when a configuration precondition is violated
    /// (non-positive rates, zero agents, zero horizon).
    #[new]
    fn new(
        num_agents: usize,
        max_wait_time: u64,
        lambda_per_minute: f64,
        average_call_time: f64,
        horizon: u64,
        seed: u64,
    ) -> PyResult<Self> {
        let config = CallCenterConfig {
            num_agents,
            max_wait_time,
            lambda: lambda_per_minute,
            average_call_time,
            horizon,
        };
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(PyCallCenter { config, seed })
    }

    /// Run the simulation to completion
    ///
    /// # Returns
    ///
    /// Tuple `(total_calls, abandoned_calls, utilization)`.
    fn run(&self) -> PyResult<(u64, u64, f64)> {
        let report = run_simulation(&self.config, self.seed)
            .map_err(|e| PyValueError::new_err(format!("simulation failed: {}", e)))?;

        Ok((
            report.total_calls,
            report.abandoned_calls,
            report.utilization,
        ))
    }

    /// Seed this simulation replays from
    fn seed(&self) -> u64 {
        self.seed
    }
}
