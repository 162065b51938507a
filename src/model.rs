//! Core data model.
//!
//! A trial drains a contiguous range of candidates with a fixed number of
//! workers and produces a report. A benchmark is a baseline trial plus one
//! trial per additional worker count, each scaled against the baseline.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::ops::Range;
use std::time::Duration;

/// A candidate integer waiting to be tested.
pub type WorkItem = u64;

/// Smallest candidate the driver ever enqueues.
pub const FIRST_CANDIDATE: WorkItem = 3;

/// How many primes the text report lists per trial.
pub const PREVIEW_LEN: usize = 10;

// ---------------------------------------------------------------------------
// Trial Report
// ---------------------------------------------------------------------------

/// Outcome of a single trial.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    /// Number of workers that drained the queue. 1 is the sequential baseline.
    pub workers: usize,

    /// First candidate of the scanned range (inclusive).
    pub start: WorkItem,

    /// End of the scanned range (exclusive).
    pub end: WorkItem,

    /// Wall-clock time from spawn to final join.
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,

    /// Primes found, sorted ascending.
    pub primes: Vec<WorkItem>,

    pub started_at: DateTime<Utc>,
}

impl TrialReport {
    /// Build a report; `primes` is sorted here so callers never see the
    /// scheduling order of the sink.
    pub fn new(
        workers: usize,
        range: Range<WorkItem>,
        elapsed: Duration,
        mut primes: Vec<WorkItem>,
        started_at: DateTime<Utc>,
    ) -> Self {
        primes.sort_unstable();
        Self {
            workers,
            start: range.start,
            end: range.end,
            elapsed,
            primes,
            started_at,
        }
    }

    pub fn range(&self) -> Range<WorkItem> {
        self.start..self.end
    }

    /// The first `n` primes found (fewer if the trial found fewer).
    pub fn first(&self, n: usize) -> &[WorkItem] {
        &self.primes[..n.min(self.primes.len())]
    }

    pub fn largest(&self) -> Option<WorkItem> {
        self.primes.last().copied()
    }

    pub fn prime_count(&self) -> usize {
        self.primes.len()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    pub fn is_baseline(&self) -> bool {
        self.workers == 1
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(elapsed.as_millis() as u64)
}

// ---------------------------------------------------------------------------
// Bench Report
// ---------------------------------------------------------------------------

/// A trial scaled against the sequential baseline.
#[derive(Debug, Clone, Serialize)]
pub struct ScaledTrial {
    #[serde(flatten)]
    pub trial: TrialReport,

    /// `baseline.elapsed / trial.elapsed`. None when the trial finished
    /// below timer resolution.
    pub speedup: Option<f64>,
}

/// Result of a whole benchmark run.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub baseline: TrialReport,
    /// Multi-worker trials, in ascending worker count.
    pub trials: Vec<ScaledTrial>,
}

impl BenchReport {
    pub fn new(baseline: TrialReport) -> Self {
        Self {
            baseline,
            trials: Vec::new(),
        }
    }

    /// Scale a trial against the baseline and append it.
    pub fn push(&mut self, trial: TrialReport) {
        let speedup = speedup(&self.baseline, &trial);
        self.trials.push(ScaledTrial { trial, speedup });
    }

    /// The baseline's speedup against itself.
    pub fn baseline_speedup(&self) -> Option<f64> {
        speedup(&self.baseline, &self.baseline)
    }

    /// True when every trial found exactly the baseline's primes.
    pub fn results_agree(&self) -> bool {
        self.trials
            .iter()
            .all(|t| t.trial.primes == self.baseline.primes)
    }
}

/// Ratio of baseline time to trial time.
pub fn speedup(baseline: &TrialReport, trial: &TrialReport) -> Option<f64> {
    let trial_secs = trial.elapsed.as_secs_f64();
    if trial_secs == 0.0 {
        return None;
    }
    Some(baseline.elapsed.as_secs_f64() / trial_secs)
}
