//! # primebench
//!
//! Benchmarks naive primality testing under sequential and multi-threaded
//! execution.
//!
//! A trial fills a shared work queue with a contiguous range of candidates
//! and lets a fixed pool of worker threads drain it, each testing its
//! candidate and appending primes to a shared result sink. The queue and
//! the sink each own their lock. A benchmark runs a single-threaded
//! baseline, then one trial per worker count, and reports the speedup.

pub mod bench;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod prime;
pub mod progress;
pub mod report;
pub mod telemetry;
