//! Naive primality test.
//!
//! Trial division over every integer below `n`. Deliberately slow: the
//! benchmark needs per-item work heavy enough for thread scaling to show.

use crate::model::WorkItem;

/// Checks if the given number is prime.
#[must_use]
pub fn is_prime(n: WorkItem) -> bool {
    n >= 2 && (2..n).all(|d| n % d != 0)
}
