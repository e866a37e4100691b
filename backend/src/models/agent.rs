//! Agent model and the fixed-size agent pool.
//!
//! An agent is either idle or busy with exactly one call. Busy time is
//! accounted **at assignment time**: when a call is assigned, the full
//! sampled service duration is added to the agent's accumulator up
//! front, so utilization reflects reserved rather than elapsed service
//! time. A completion scheduled past the simulation horizon still
//! contributes its whole duration, which is why utilization can exceed
//! 1.0 under extreme configurations and is deliberately not clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from agent state transitions
///
/// The engine upholds the invariant that an agent is busy iff it has an
/// outstanding completion event, so these only fire on a caller bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("agent {id} is already busy")]
    AlreadyBusy { id: usize },

    #[error("agent {id} has no call in progress")]
    NotBusy { id: usize },
}

/// Availability state of an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Idle,
    Busy,
}

/// A single call center agent
///
/// # Example
/// ```
/// use call_center_sim_core_rs::Agent;
///
/// let mut agent = Agent::new(0);
/// assert!(agent.is_idle());
///
/// agent.begin_call(4).unwrap();
/// assert!(!agent.is_idle());
/// assert_eq!(agent.busy_minutes(), 4); // reserved at assignment
///
/// agent.finish_call().unwrap();
/// assert!(agent.is_idle());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Pool index, fixed for the lifetime of the simulation
    id: usize,

    /// Current availability
    state: AgentState,

    /// Cumulative reserved service minutes
    busy_minutes: u64,
}

impl Agent {
    /// Create an idle agent with the given pool index
    pub fn new(id: usize) -> Self {
        Self {
            id,
            state: AgentState::Idle,
            busy_minutes: 0,
        }
    }

    /// Pool index of this agent
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current availability state
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Whether the agent can take a call
    pub fn is_idle(&self) -> bool {
        self.state == AgentState::Idle
    }

    /// Cumulative reserved service minutes
    pub fn busy_minutes(&self) -> u64 {
        self.busy_minutes
    }

    /// Start serving a call of `duration` minutes
    ///
    /// Marks the agent busy and accrues the full duration immediately.
    pub fn begin_call(&mut self, duration: u64) -> Result<(), AgentError> {
        if self.state == AgentState::Busy {
            return Err(AgentError::AlreadyBusy { id: self.id });
        }
        self.state = AgentState::Busy;
        self.busy_minutes += duration;
        Ok(())
    }

    /// Finish the call in progress, returning the agent to idle
    ///
    /// Busy time was already accrued at assignment, so this only flips
    /// the availability flag.
    pub fn finish_call(&mut self) -> Result<(), AgentError> {
        if self.state == AgentState::Idle {
            return Err(AgentError::NotBusy { id: self.id });
        }
        self.state = AgentState::Idle;
        Ok(())
    }
}

/// Fixed-size pool of agents, indexable by agent id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPool {
    agents: Vec<Agent>,
}

impl AgentPool {
    /// Create a pool of `num_agents` idle agents with ids `0..num_agents`
    pub fn new(num_agents: usize) -> Self {
        Self {
            agents: (0..num_agents).map(Agent::new).collect(),
        }
    }

    /// Number of agents in the pool
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check if the pool has no agents
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Lowest-id idle agent, if any
    ///
    /// The scan order is ascending agent id, so assignment is fully
    /// deterministic.
    pub fn first_idle(&self) -> Option<usize> {
        self.agents.iter().find(|a| a.is_idle()).map(|a| a.id())
    }

    /// Borrow an agent by id
    pub fn agent(&self, id: usize) -> &Agent {
        &self.agents[id]
    }

    /// Mutably borrow an agent by id
    pub fn agent_mut(&mut self, id: usize) -> &mut Agent {
        &mut self.agents[id]
    }

    /// All agents, in id order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Sum of reserved service minutes across the pool
    pub fn total_busy_minutes(&self) -> u64 {
        self.agents.iter().map(|a| a.busy_minutes()).sum()
    }
}
