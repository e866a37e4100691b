//! Orchestrator - the event-driven simulation loop.
//!
//! See `engine.rs` for the call state machine and `stats.rs` for the
//! statistics collector.

pub mod engine;
pub mod stats;

// Re-export main types for convenience
pub use engine::{run_simulation, CallCenter, CallCenterConfig, SimulationError};
pub use stats::{SimulationReport, StatsCollector};
