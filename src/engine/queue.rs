//! Shared work queue: candidates waiting for a worker.

use crate::model::WorkItem;
use std::collections::VecDeque;
use std::ops::Range;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A queue of pending candidates drained concurrently by workers.
///
/// Populated once per trial. Every removal happens under the queue's own
/// lock, so each item is handed to exactly one caller of [`try_take`].
///
/// [`try_take`]: WorkQueue::try_take
#[derive(Debug)]
pub struct WorkQueue {
    items: Mutex<VecDeque<WorkItem>>,
    initial_len: usize,
}

impl WorkQueue {
    /// Fill a queue with every integer in `range`, in ascending order.
    pub fn from_range(range: Range<WorkItem>) -> Self {
        let items: VecDeque<WorkItem> = range.collect();
        let initial_len = items.len();
        Self {
            items: Mutex::new(items),
            initial_len,
        }
    }

    /// Remove and return the next candidate, or None once the queue is drained.
    pub fn try_take(&self) -> Option<WorkItem> {
        self.lock().pop_front()
    }

    /// Number of candidates not yet taken by any worker.
    pub fn remaining_count(&self) -> usize {
        self.lock().len()
    }

    /// Number of candidates the queue was populated with.
    pub fn initial_len(&self) -> usize {
        self.initial_len
    }

    /// Share of the original candidates already taken, in `0.0..=1.0`.
    /// An empty queue counts as fully drained.
    pub fn drained_fraction(&self) -> f64 {
        if self.initial_len == 0 {
            return 1.0;
        }
        let taken = self.initial_len - self.remaining_count();
        taken as f64 / self.initial_len as f64
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // The guarded data is a plain list of integers, so a guard dropped
    // during a worker panic leaves it consistent. The panic itself is
    // reported when the worker is joined.
    fn lock(&self) -> MutexGuard<'_, VecDeque<WorkItem>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
