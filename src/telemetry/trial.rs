//! Trial span helpers.
//!
//! One span per trial; worker threads re-enter it so their events carry
//! the trial's fields.

use tracing::Span;

/// Start a span for one trial.
///
/// The result fields are declared empty and filled by
/// [`record_trial_finished`].
pub fn start_trial_span(workers: usize, start: u64, end: u64) -> Span {
    tracing::info_span!(
        "trial.run",
        "trial.workers" = workers,
        "trial.range.start" = start,
        "trial.range.end" = end,
        "trial.elapsed_ms" = tracing::field::Empty,
        "trial.primes" = tracing::field::Empty,
    )
}

/// Record the trial's outcome on its span.
pub fn record_trial_finished(span: &Span, elapsed_ms: u64, primes: usize) {
    span.record("trial.elapsed_ms", elapsed_ms);
    span.record("trial.primes", primes as u64);
}
