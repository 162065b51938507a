//! Worker loop: drain the queue, keep the primes.

use crate::prime::is_prime;
use tracing::debug;

use super::{ResultSink, WorkQueue};

/// Drain `queue` until it reports empty, inserting every prime into `sink`.
///
/// The queue lock is released before testing and the sink lock is taken
/// only for the insert, so a worker never holds both. Returns the number
/// of candidates this worker tested.
pub fn run_worker(index: usize, queue: &WorkQueue, sink: &ResultSink) -> usize {
    let mut tested = 0;
    while let Some(candidate) = queue.try_take() {
        if is_prime(candidate) {
            sink.insert(candidate);
        }
        tested += 1;
    }
    debug!(worker = index, tested, "worker drained queue");
    tested
}
