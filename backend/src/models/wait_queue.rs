//! FIFO wait queue for calls that found every agent busy.
//!
//! Backed by a ring buffer: O(1) push-tail and pop-head. Removal by
//! call id (the abandonment path) is a linear scan, matching the small
//! queue sizes this simulation produces. A call appears in the queue at
//! most once, and only while it is neither assigned nor abandoned.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A call waiting for an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedCall {
    /// Unique call identifier
    pub call_id: u64,

    /// Minute at which the call joined the queue
    pub enqueued_at: u64,
}

/// FIFO queue of waiting calls
///
/// # Example
/// ```
/// use call_center_sim_core_rs::WaitQueue;
///
/// let mut queue = WaitQueue::new();
/// queue.push_back(1, 10);
/// queue.push_back(2, 11);
///
/// assert_eq!(queue.pop_front().unwrap().call_id, 1);
/// assert!(queue.remove(2).is_some());
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitQueue {
    calls: VecDeque<QueuedCall>,
}

impl WaitQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            calls: VecDeque::new(),
        }
    }

    /// Append a call to the tail
    pub fn push_back(&mut self, call_id: u64, enqueued_at: u64) {
        debug_assert!(
            !self.contains(call_id),
            "call {} queued twice",
            call_id
        );
        self.calls.push_back(QueuedCall {
            call_id,
            enqueued_at,
        });
    }

    /// Remove and return the oldest waiting call
    pub fn pop_front(&mut self) -> Option<QueuedCall> {
        self.calls.pop_front()
    }

    /// Remove a specific call, wherever it sits in the queue
    ///
    /// Returns `None` if the call is not waiting (already assigned or
    /// already abandoned) — the caller treats that as a no-op.
    pub fn remove(&mut self, call_id: u64) -> Option<QueuedCall> {
        let idx = self.calls.iter().position(|c| c.call_id == call_id)?;
        self.calls.remove(idx)
    }

    /// Whether a call is currently waiting
    pub fn contains(&self, call_id: u64) -> bool {
        self.calls.iter().any(|c| c.call_id == call_id)
    }

    /// Number of waiting calls
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Check if no calls are waiting
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = WaitQueue::new();
        queue.push_back(1, 0);
        queue.push_back(2, 1);
        queue.push_back(3, 2);

        assert_eq!(queue.pop_front().unwrap().call_id, 1);
        assert_eq!(queue.pop_front().unwrap().call_id, 2);
        assert_eq!(queue.pop_front().unwrap().call_id, 3);
        assert_eq!(queue.pop_front(), None);
    }

    #[test]
    fn test_remove_from_middle_preserves_order() {
        let mut queue = WaitQueue::new();
        queue.push_back(1, 0);
        queue.push_back(2, 0);
        queue.push_back(3, 0);

        let removed = queue.remove(2).unwrap();
        assert_eq!(removed.call_id, 2);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_front().unwrap().call_id, 1);
        assert_eq!(queue.pop_front().unwrap().call_id, 3);
    }

    #[test]
    fn test_remove_missing_call_is_none() {
        let mut queue = WaitQueue::new();
        queue.push_back(1, 0);

        assert!(queue.remove(99).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_enqueued_at_is_preserved() {
        let mut queue = WaitQueue::new();
        queue.push_back(7, 42);

        assert_eq!(queue.pop_front().unwrap().enqueued_at, 42);
    }
}
