//! Call center engine - event-driven simulation loop.
//!
//! Implements the call state machine:
//!
//! ```text
//! Arriving -> { InService | Queued } -> { Completed | Abandoned | unresolved at horizon }
//! ```
//!
//! # Loop structure
//!
//! 1. Seed phase: precompute every arrival event for the horizon and
//!    push them into the event queue.
//! 2. Drain phase: while the earliest pending event is strictly before
//!    the horizon, pop it, advance the clock to its timestamp, and
//!    dispatch to the matching handler.
//!
//! # Horizon edge effect
//!
//! Any event with a timestamp at or past the horizon is left
//! unprocessed when the drain loop exits: calls still in service or
//! still waiting are never finalized, and pending abandonment timers
//! never fire. Completions and abandonments near the boundary are
//! therefore under-counted. This mirrors the behavior of the system
//! being modeled and is deliberately preserved, not "fixed". Busy time
//! for an in-flight call was already reserved at assignment, so the
//! unprocessed completion does not change utilization.
//!
//! # Determinism
//!
//! Single-threaded, no shared state across runs. With a given config
//! and seed, the dispatch order and the final report are identical on
//! every run; events sharing a timestamp dispatch in creation order
//! (see `models::event_queue`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arrivals::ArrivalGenerator;
use crate::core::clock::SimClock;
use crate::models::agent::{AgentError, AgentPool};
use crate::models::event::{Event, EventKind, EventLog};
use crate::models::event_queue::EventQueue;
use crate::models::wait_queue::WaitQueue;
use crate::orchestrator::stats::{SimulationReport, StatsCollector};
use crate::rng::{sample_exponential, SimRng, UniformSource};

/// Configuration for one simulation run
///
/// # Example
/// ```
/// use call_center_sim_core_rs::CallCenterConfig;
///
/// let config = CallCenterConfig {
///     num_agents: 3,
///     max_wait_time: 5,
///     lambda: 1.5,
///     average_call_time: 4.0,
///     horizon: 1440,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallCenterConfig {
    /// Number of agents in the pool (positive)
    pub num_agents: usize,

    /// Patience: minutes a queued call waits before abandoning
    pub max_wait_time: u64,

    /// Arrival rate per minute (positive)
    pub lambda: f64,

    /// Mean service duration in minutes (positive)
    pub average_call_time: f64,

    /// Simulated minutes; events at or past this point never dispatch
    pub horizon: u64,
}

impl CallCenterConfig {
    /// Validate preconditions before any sampling happens
    ///
    /// Sampling divides by `lambda` and by `1 / average_call_time`, so
    /// non-positive rates must be rejected up front rather than loop
    /// forever or divide by zero.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.num_agents == 0 {
            return Err(SimulationError::InvalidConfig(
                "num_agents must be > 0".to_string(),
            ));
        }
        if !(self.lambda > 0.0) || !self.lambda.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "lambda must be a positive finite rate, got {}",
                self.lambda
            )));
        }
        if !(self.average_call_time > 0.0) || !self.average_call_time.is_finite() {
            return Err(SimulationError::InvalidConfig(format!(
                "average_call_time must be positive finite minutes, got {}",
                self.average_call_time
            )));
        }
        if self.horizon == 0 {
            return Err(SimulationError::InvalidConfig(
                "horizon must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulation error types
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Agent state machine violation (internal invariant)
    #[error(transparent)]
    Agent(#[from] AgentError),
}

/// Call center simulation engine
///
/// Owns all state for one run: the event queue, the clock, the agent
/// pool, the wait queue, the statistics counters, and its own random
/// source. One engine instance per configuration; instances never
/// share state, so a sweep can run many of them in parallel.
pub struct CallCenter {
    config: CallCenterConfig,
    clock: SimClock,
    source: Box<dyn UniformSource>,
    event_queue: EventQueue,
    pool: AgentPool,
    wait_queue: WaitQueue,
    stats: StatsCollector,
    dispatch_log: EventLog,
}

impl CallCenter {
    /// Create an engine from a validated configuration and a random source
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidConfig` when a precondition of
    /// [`CallCenterConfig::validate`] is violated.
    pub fn new(
        config: CallCenterConfig,
        source: Box<dyn UniformSource>,
    ) -> Result<Self, SimulationError> {
        config.validate()?;

        let pool = AgentPool::new(config.num_agents);
        Ok(Self {
            config,
            clock: SimClock::new(),
            source,
            event_queue: EventQueue::new(),
            pool,
            wait_queue: WaitQueue::new(),
            stats: StatsCollector::new(),
            dispatch_log: EventLog::new(),
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Configuration this engine was built from
    pub fn config(&self) -> &CallCenterConfig {
        &self.config
    }

    /// Current simulated minute
    pub fn now(&self) -> u64 {
        self.clock.now()
    }

    /// Agent pool (busy flags and accumulated busy minutes)
    pub fn pool(&self) -> &AgentPool {
        &self.pool
    }

    /// Calls currently waiting for an agent
    pub fn wait_queue(&self) -> &WaitQueue {
        &self.wait_queue
    }

    /// Every event dispatched so far, in dispatch order
    pub fn dispatch_log(&self) -> &EventLog {
        &self.dispatch_log
    }

    // ========================================================================
    // Simulation loop
    // ========================================================================

    /// Run the simulation to completion
    ///
    /// Seeds the arrival stream, drains the event queue up to the
    /// horizon, and returns the aggregate report.
    ///
    /// # Errors
    ///
    /// Only internal invariant violations surface here; a validated
    /// configuration always runs to completion.
    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        self.seed_arrivals();

        while let Some(&event) = self.event_queue.peek() {
            if event.timestamp >= self.config.horizon {
                break;
            }
            let _ = self.event_queue.pop();
            self.clock.advance_to(event.timestamp);
            self.dispatch_log.log(event);
            self.dispatch(event)?;
        }

        Ok(self.stats.finish(&self.pool, self.config.horizon))
    }

    /// Seed phase: push the precomputed arrival stream
    fn seed_arrivals(&mut self) {
        let mut generator = ArrivalGenerator::new();
        let arrivals =
            generator.generate(self.config.lambda, self.config.horizon, self.source.as_mut());
        for event in arrivals {
            self.event_queue.push(event);
        }
    }

    fn dispatch(&mut self, event: Event) -> Result<(), SimulationError> {
        match event.kind {
            EventKind::Arrival => self.handle_arrival(event),
            EventKind::Completion => self.handle_completion(event),
            EventKind::Abandonment => {
                self.handle_abandonment(event);
                Ok(())
            }
        }
    }

    // ========================================================================
    // Event handlers (call state machine)
    // ========================================================================

    /// A new call enters the system
    ///
    /// Assign it to the lowest-id idle agent if one exists; otherwise
    /// queue it and start its patience timer. The timer is scheduled
    /// unconditionally for every queued call — if the call gets served
    /// first, the matured timer is a no-op (see `handle_abandonment`).
    fn handle_arrival(&mut self, event: Event) -> Result<(), SimulationError> {
        self.stats.record_arrival();

        if let Some(agent_id) = self.pool.first_idle() {
            self.assign(agent_id, event.call_id)?;
        } else {
            let now = self.clock.now();
            self.wait_queue.push_back(event.call_id, now);
            self.event_queue.push(Event::abandonment(
                now + self.config.max_wait_time,
                event.call_id,
            ));
        }
        Ok(())
    }

    /// An agent finished its call
    ///
    /// Free the agent, then hand it the oldest waiting call if any.
    /// Busy time was already accounted at assignment.
    fn handle_completion(&mut self, event: Event) -> Result<(), SimulationError> {
        let agent_id = event
            .agent_id
            .expect("completion events always carry an agent id");
        self.pool.agent_mut(agent_id).finish_call()?;

        if let Some(next_call) = self.wait_queue.pop_front() {
            self.assign(agent_id, next_call.call_id)?;
        }
        Ok(())
    }

    /// A queued call's patience timer matured
    ///
    /// If the call is still waiting, remove and count it. If it is not
    /// in the queue — it was assigned to an agent before the timer
    /// fired — the event is a no-op. This path is load-bearing: timers
    /// are scheduled for every queued call, and served calls must not
    /// be double-counted as abandoned.
    fn handle_abandonment(&mut self, event: Event) {
        if self.wait_queue.remove(event.call_id).is_some() {
            self.stats.record_abandonment();
        }
    }

    /// Assign a call to a specific idle agent
    ///
    /// Samples the service duration at `rate = 1 / average_call_time`,
    /// reserves the agent (accruing the full duration into its busy
    /// accumulator now), and schedules the completion event.
    fn assign(&mut self, agent_id: usize, call_id: u64) -> Result<(), SimulationError> {
        let rate = 1.0 / self.config.average_call_time;
        let duration = sample_exponential(self.source.as_mut(), rate);

        self.pool.agent_mut(agent_id).begin_call(duration)?;
        self.event_queue.push(Event::completion(
            self.clock.now() + duration,
            call_id,
            agent_id,
        ));
        Ok(())
    }
}

/// Run one simulation to completion from a configuration and a seed
///
/// The single entry point for external callers: builds a fresh seeded
/// RNG, runs the engine, and returns the aggregate statistics.
///
/// # Example
/// ```
/// use call_center_sim_core_rs::{run_simulation, CallCenterConfig};
///
/// let config = CallCenterConfig {
///     num_agents: 2,
///     max_wait_time: 5,
///     lambda: 0.5,
///     average_call_time: 3.0,
///     horizon: 120,
/// };
///
/// let report = run_simulation(&config, 42).unwrap();
/// assert!(report.abandoned_calls <= report.total_calls);
/// ```
pub fn run_simulation(
    config: &CallCenterConfig,
    seed: u64,
) -> Result<SimulationReport, SimulationError> {
    let mut engine = CallCenter::new(config.clone(), Box::new(SimRng::new(seed)))?;
    engine.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CallCenterConfig {
        CallCenterConfig {
            num_agents: 2,
            max_wait_time: 5,
            lambda: 1.0,
            average_call_time: 3.0,
            horizon: 60,
        }
    }

    #[test]
    fn test_validate_rejects_zero_agents() {
        let config = CallCenterConfig {
            num_agents: 0,
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_lambda() {
        for lambda in [0.0, -1.0, f64::NAN] {
            let config = CallCenterConfig {
                lambda,
                ..base_config()
            };
            assert!(
                config.validate().is_err(),
                "lambda {} should be rejected",
                lambda
            );
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_service_time() {
        for average_call_time in [0.0, -3.0] {
            let config = CallCenterConfig {
                average_call_time,
                ..base_config()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_validate_rejects_zero_horizon() {
        let config = CallCenterConfig {
            horizon: 0,
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_new_fails_fast_on_invalid_config() {
        let config = CallCenterConfig {
            lambda: 0.0,
            ..base_config()
        };
        assert!(CallCenter::new(config, Box::new(SimRng::new(1))).is_err());
    }

    #[test]
    fn test_run_produces_consistent_counts() {
        let report = run_simulation(&base_config(), 7).unwrap();
        assert!(report.abandoned_calls <= report.total_calls);
        assert!(report.utilization >= 0.0);
    }
}
