//! Domain types for the call center simulation.

pub mod agent;
pub mod event;
pub mod event_queue;
pub mod wait_queue;

pub use agent::{Agent, AgentError, AgentPool, AgentState};
pub use event::{Event, EventKind, EventLog};
pub use event_queue::EventQueue;
pub use wait_queue::{QueuedCall, WaitQueue};
