//! Call Center Simulator Core - Rust Engine
//!
//! Discrete-event simulation of an M/M/c call center with abandonment,
//! built for deterministic execution.
//!
//! # Architecture
//!
//! - **core**: Simulation clock
//! - **rng**: Deterministic random number generation and sampling
//! - **models**: Domain types (Event, EventQueue, Agent, WaitQueue)
//! - **arrivals**: Arrival stream generation (seed phase)
//! - **orchestrator**: Main simulation loop and statistics
//!
//! # Critical Invariants
//!
//! 1. All simulated time values are integer minutes (u64)
//! 2. All randomness is deterministic (seeded RNG, one handle per run)
//! 3. Events dispatch in (timestamp, insertion sequence) order
//! 4. Agent busy time is reserved at assignment, not at completion

// Module declarations
pub mod arrivals;
pub mod core;
pub mod models;
pub mod orchestrator;
pub mod rng;

// Re-exports for convenience
pub use arrivals::ArrivalGenerator;
pub use core::clock::SimClock;
pub use models::{
    agent::{Agent, AgentError, AgentPool, AgentState},
    event::{Event, EventKind, EventLog},
    event_queue::EventQueue,
    wait_queue::{QueuedCall, WaitQueue},
};
pub use orchestrator::{
    run_simulation, CallCenter, CallCenterConfig, SimulationError, SimulationReport,
    StatsCollector,
};
pub use rng::{sample_exponential, SimRng, UniformSource};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn call_center_sim_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyCallCenter>()?;
    Ok(())
}
