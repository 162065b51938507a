//! Work distribution engine: shared queue, result sink, workers, trial driver.

pub mod queue;
pub mod sink;
pub mod trial;
pub mod worker;

pub use queue::WorkQueue;
pub use sink::ResultSink;
pub use trial::{TrialConfig, TrialRunner, run_trial};
pub use worker::run_worker;
