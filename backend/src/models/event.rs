//! Simulation events and the dispatch log.
//!
//! An [`Event`] is an immutable record of something scheduled to happen
//! at a simulated minute. The engine appends every *dispatched* event to
//! an [`EventLog`], which enables:
//! - Determinism checks (two runs with the same seed must dispatch the
//!   same events in the same order)
//! - Debugging (understand what happened and when)
//! - Analysis (count outcomes per call or per kind)

/// Kind of a scheduled simulation event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A new call enters the system
    Arrival,
    /// An agent finishes service of an assigned call
    Completion,
    /// A queued call's patience timer matures
    Abandonment,
}

/// Immutable event record
///
/// `agent_id` is `Some` only for [`EventKind::Completion`]; arrivals and
/// abandonments are not tied to an agent when scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Simulated minute at which the event fires
    pub timestamp: u64,

    /// What happens when the event fires
    pub kind: EventKind,

    /// Unique call identifier, monotonically assigned at arrival
    pub call_id: u64,

    /// Serving agent, for completion events only
    pub agent_id: Option<usize>,
}

impl Event {
    /// Arrival of a new call at `timestamp`
    pub fn arrival(timestamp: u64, call_id: u64) -> Self {
        Self {
            timestamp,
            kind: EventKind::Arrival,
            call_id,
            agent_id: None,
        }
    }

    /// Completion of `call_id` by `agent_id` at `timestamp`
    pub fn completion(timestamp: u64, call_id: u64, agent_id: usize) -> Self {
        Self {
            timestamp,
            kind: EventKind::Completion,
            call_id,
            agent_id: Some(agent_id),
        }
    }

    /// Patience timer for a queued call maturing at `timestamp`
    pub fn abandonment(timestamp: u64, call_id: u64) -> Self {
        Self {
            timestamp,
            kind: EventKind::Abandonment,
            call_id,
            agent_id: None,
        }
    }
}

/// Append-only log of dispatched events, in dispatch order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append a dispatched event
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All dispatched events, in dispatch order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of dispatched events of the given kind
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// Dispatched events touching a specific call
    pub fn events_for_call(&self, call_id: u64) -> Vec<&Event> {
        self.events.iter().filter(|e| e.call_id == call_id).collect()
    }
}
