//! Benchmark series: a sequential baseline, then one trial per worker count.

use crate::engine::TrialRunner;
use crate::error::{Error, Result};
use crate::model::{BenchReport, FIRST_CANDIDATE, TrialReport, WorkItem};
use crate::progress::ProgressSink;
use tracing::{info, warn};

/// Parameters for a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Exclusive upper bound; candidates are `3..upper`.
    pub upper: WorkItem,
    /// Highest worker count to try. Trials run for `2..=max_workers`.
    pub max_workers: usize,
}

impl BenchConfig {
    /// Validate raw parameters.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if either value is zero.
    pub fn new(upper: WorkItem, max_workers: usize) -> Result<Self> {
        if upper == 0 {
            return Err(Error::InvalidInput(
                "upper bound must be a positive integer".to_string(),
            ));
        }
        if max_workers == 0 {
            return Err(Error::InvalidInput(
                "maximum thread count must be at least 1".to_string(),
            ));
        }
        Ok(Self { upper, max_workers })
    }

    /// The candidates every trial scans. Empty when `upper <= 3`.
    pub fn range(&self) -> std::ops::Range<WorkItem> {
        FIRST_CANDIDATE..self.upper.max(FIRST_CANDIDATE)
    }

    /// Worker counts in run order, baseline first.
    pub fn worker_counts(&self) -> impl Iterator<Item = usize> {
        1..=self.max_workers
    }
}

/// Runs a benchmark series on a [`TrialRunner`].
pub struct Benchmark {
    runner: TrialRunner,
}

impl Benchmark {
    pub fn new(runner: TrialRunner) -> Self {
        Self { runner }
    }

    /// Run the baseline and every multi-worker trial.
    ///
    /// `on_trial` is invoked after each trial (baseline included) with the
    /// trial and its speedup, so a caller can print results as they arrive.
    pub fn run(
        &self,
        config: BenchConfig,
        progress: &mut dyn ProgressSink,
        mut on_trial: impl FnMut(&TrialReport, Option<f64>),
    ) -> Result<BenchReport> {
        info!(upper = config.upper, max_workers = config.max_workers, "benchmark started");

        let baseline = self.runner.run(config.range(), 1, progress)?;
        let mut report = BenchReport::new(baseline);
        on_trial(&report.baseline, report.baseline_speedup());

        for workers in config.worker_counts().skip(1) {
            let trial = self.runner.run(config.range(), workers, progress)?;
            if trial.primes != report.baseline.primes {
                warn!(workers, "trial disagrees with the sequential baseline");
            }
            report.push(trial);
            if let Some(last) = report.trials.last() {
                on_trial(&last.trial, last.speedup);
            }
        }

        Ok(report)
    }
}
