//! Trial driver: populate the queue, spawn workers, sample progress, join.

use crate::error::{Error, Result};
use crate::model::{TrialReport, WorkItem};
use crate::prime::is_prime;
use crate::progress::{NoProgress, ProgressSink};
use crate::telemetry::trial::{record_trial_finished, start_trial_span};
use chrono::Utc;
use std::ops::Range;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{Span, debug, info};

use super::worker::run_worker;
use super::{ResultSink, WorkQueue};

/// Candidates the sequential baseline tests between progress checks.
const SAMPLE_BATCH: usize = 256;

/// Configuration for the trial driver.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// How often progress is sampled while workers run.
    pub progress_interval: Duration,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(100),
        }
    }
}

/// Runs trials. Holds no state between them: every trial gets a fresh
/// queue, a fresh sink and fresh threads.
#[derive(Debug, Clone, Default)]
pub struct TrialRunner {
    config: TrialConfig,
}

impl TrialRunner {
    pub fn new(config: TrialConfig) -> Self {
        Self { config }
    }

    /// Drain `range` with `workers` threads and report the primes found.
    ///
    /// One worker is the sequential baseline: it runs on the calling
    /// thread over the range directly and takes no locks.
    ///
    /// # Errors
    ///
    /// `InvalidInput` for zero workers, `Spawn` if the OS refuses a thread,
    /// `WorkerPanicked` if a worker dies before the queue is drained.
    pub fn run(
        &self,
        range: Range<WorkItem>,
        workers: usize,
        progress: &mut dyn ProgressSink,
    ) -> Result<TrialReport> {
        if workers == 0 {
            return Err(Error::InvalidInput(
                "a trial needs at least one worker".to_string(),
            ));
        }

        let span = start_trial_span(workers, range.start, range.end);
        let _entered = span.enter();

        let started_at = Utc::now();
        let start = Instant::now();
        progress.update(0.0);

        let primes = if workers == 1 {
            self.run_sequential(range.clone(), progress)
        } else {
            self.run_parallel(range.clone(), workers, progress, &span)?
        };

        let elapsed = start.elapsed();
        progress.finish();

        record_trial_finished(&span, elapsed.as_millis() as u64, primes.len());
        info!(
            workers,
            elapsed_ms = elapsed.as_millis() as u64,
            primes = primes.len(),
            "trial finished"
        );

        Ok(TrialReport::new(workers, range, elapsed, primes, started_at))
    }

    fn run_sequential(
        &self,
        range: Range<WorkItem>,
        progress: &mut dyn ProgressSink,
    ) -> Vec<WorkItem> {
        let total = range.end.saturating_sub(range.start);
        let mut primes = Vec::new();
        let mut last_sample = Instant::now();

        for (done, candidate) in range.enumerate() {
            if is_prime(candidate) {
                primes.push(candidate);
            }
            // The clock is read once per batch, not per candidate.
            if (done + 1) % SAMPLE_BATCH == 0
                && last_sample.elapsed() >= self.config.progress_interval
            {
                progress.update((done + 1) as f64 / total as f64);
                last_sample = Instant::now();
            }
        }

        primes
    }

    fn run_parallel(
        &self,
        range: Range<WorkItem>,
        workers: usize,
        progress: &mut dyn ProgressSink,
        span: &Span,
    ) -> Result<Vec<WorkItem>> {
        let queue = WorkQueue::from_range(range);
        let sink = ResultSink::new();
        debug!(workers, candidates = queue.initial_len(), "queue populated");

        thread::scope(|scope| -> Result<()> {
            let (done_tx, done_rx) = mpsc::channel::<usize>();
            let mut handles = Vec::with_capacity(workers);

            for index in 0..workers {
                let (queue, sink) = (&queue, &sink);
                let done_tx = done_tx.clone();
                let span = span.clone();
                let handle = thread::Builder::new()
                    .name(format!("primebench-worker-{index}"))
                    .spawn_scoped(scope, move || {
                        span.in_scope(|| run_worker(index, queue, sink));
                        // The driver may already be gone if a sibling panicked.
                        let _ = done_tx.send(index);
                    })
                    .map_err(Error::Spawn)?;
                handles.push(handle);
            }
            // Only workers hold senders now; a panicked worker drops its own
            // without reporting, which ends the wait once the rest are done.
            drop(done_tx);

            let mut finished = 0;
            while finished < workers {
                match done_rx.recv_timeout(self.config.progress_interval) {
                    Ok(_) => finished += 1,
                    Err(RecvTimeoutError::Timeout) => progress.update(queue.drained_fraction()),
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            for (index, handle) in handles.into_iter().enumerate() {
                handle
                    .join()
                    .map_err(|_| Error::WorkerPanicked { worker: index })?;
            }
            Ok(())
        })?;

        Ok(sink.into_sorted())
    }
}

/// Run a trial with default settings and no progress output.
pub fn run_trial(range: Range<WorkItem>, workers: usize) -> Result<TrialReport> {
    TrialRunner::default().run(range, workers, &mut NoProgress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        samples: Vec<f64>,
        finished: usize,
    }

    impl ProgressSink for Recorder {
        fn update(&mut self, fraction: f64) {
            self.samples.push(fraction);
        }
        fn finish(&mut self) {
            self.finished += 1;
        }
    }

    #[test]
    fn progress_starts_at_zero_and_finishes_once() {
        let runner = TrialRunner::new(TrialConfig {
            progress_interval: Duration::from_millis(1),
        });
        for workers in [1, 3] {
            let mut recorder = Recorder::default();
            runner.run(3..500, workers, &mut recorder).unwrap();
            assert_eq!(recorder.samples.first(), Some(&0.0));
            assert!(recorder.samples.iter().all(|f| (0.0..=1.0).contains(f)));
            assert_eq!(recorder.finished, 1);
        }
    }

    #[test]
    fn sequential_progress_is_sampled_only_at_batch_boundaries() {
        let runner = TrialRunner::new(TrialConfig {
            progress_interval: Duration::ZERO,
        });
        let total = 3 * SAMPLE_BATCH as u64 + 17;
        let mut recorder = Recorder::default();
        runner.run(3..3 + total, 1, &mut recorder).unwrap();

        let expected: Vec<f64> = std::iter::once(0.0)
            .chain((1..=3).map(|b| (b * SAMPLE_BATCH) as f64 / total as f64))
            .collect();
        assert_eq!(recorder.samples, expected);
        assert_eq!(recorder.finished, 1);
    }

    #[test]
    fn zero_workers_is_rejected() {
        let err = run_trial(3..10, 0).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
