//! Timestamp-ordered event queue with deterministic tie-breaking.
//!
//! # Ordering
//!
//! Events pop in ascending `(timestamp, sequence)` order, where the
//! sequence number is assigned monotonically at push time. Two events
//! sharing a timestamp therefore dispatch in insertion order, which
//! makes the whole simulation deterministic for a given uniform random
//! sequence. A plain binary heap keyed on timestamp alone would leave
//! the tie order unspecified and the outcome seed-dependent in
//! implementation-defined ways.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::models::event::Event;

/// A scheduled event tagged with its insertion sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
struct Scheduled {
    event: Event,
    seq: u64,
}

impl Ord for Scheduled {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest
        // (timestamp, seq) on top.
        (other.event.timestamp, other.seq).cmp(&(self.event.timestamp, self.seq))
    }
}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of pending simulation events
///
/// # Example
/// ```
/// use call_center_sim_core_rs::{Event, EventQueue};
///
/// let mut queue = EventQueue::new();
/// queue.push(Event::arrival(5, 1));
/// queue.push(Event::arrival(2, 2));
///
/// assert_eq!(queue.pop().unwrap().timestamp, 2);
/// assert_eq!(queue.pop().unwrap().timestamp, 5);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    heap: BinaryHeap<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert an event, O(log n)
    ///
    /// The event receives the next sequence number; among events with
    /// equal timestamps, earlier pushes pop first.
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Scheduled { event, seq });
    }

    /// Remove and return the earliest event, O(log n)
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|s| s.event)
    }

    /// Peek at the earliest event without removing it
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|s| &s.event)
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no events are pending
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
