//! Shared, append-only collection of discovered primes.

use crate::model::WorkItem;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Primes found by the workers of one trial.
///
/// Guarded by its own lock, separate from the [`WorkQueue`]'s. Insertion
/// order follows whichever worker finished first and is not stable
/// across runs.
///
/// [`WorkQueue`]: super::WorkQueue
#[derive(Debug, Default)]
pub struct ResultSink {
    values: Mutex<Vec<WorkItem>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, value: WorkItem) {
        self.lock().push(value);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consume the sink, returning its values in ascending order.
    pub fn into_sorted(self) -> Vec<WorkItem> {
        let mut values = self
            .values
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        values.sort_unstable();
        values
    }

    fn lock(&self) -> MutexGuard<'_, Vec<WorkItem>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
