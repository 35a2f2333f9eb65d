//! Deferred task queue.
//!
//! Text-change handling is deferred by one turn so the host editor's own
//! internal state settles before the overlay queries selection and leaf
//! state. [`DeferredQueue`] models that single-shot timer: a scheduled task
//! always runs (there is no cancellation), and rapid successive schedules
//! queue independently rather than coalescing. Re-running reconciliation with
//! unchanged ranges is idempotent, so the duplicate passes are accepted as
//! bounded, cheap work.

use std::collections::VecDeque;

/// A fire-once queue of deferred tasks.
#[derive(Clone, Debug)]
pub struct DeferredQueue<T> {
    pending: VecDeque<T>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task for the next turn.
    pub fn schedule(&mut self, task: T) {
        self.pending.push_back(task);
    }

    /// Take the oldest pending task.
    pub fn pop(&mut self) -> Option<T> {
        self.pending.pop_front()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(1);
        queue.schedule(2);
        queue.schedule(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_schedules_do_not_coalesce() {
        let mut queue = DeferredQueue::new();
        queue.schedule("edit");
        queue.schedule("edit");
        assert_eq!(queue.len(), 2);
    }
}
