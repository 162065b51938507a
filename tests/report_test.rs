//! Tests for the text report.

use chrono::Utc;
use primebench::model::TrialReport;
use primebench::report::{format_speedup, write_trial};
use std::time::Duration;

fn render_trial(trial: &TrialReport, speedup: Option<f64>) -> String {
    let mut out = Vec::new();
    write_trial(&mut out, trial, speedup).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn baseline_block_lists_first_ten_and_largest() {
    let primes: Vec<u64> = vec![3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
    let trial = TrialReport::new(1, 3..42, Duration::from_millis(12), primes, Utc::now());
    let text = render_trial(&trial, Some(1.0));

    assert!(text.starts_with("== sequential baseline (1 thread) ==\n"));
    assert!(text.contains("First 10 primes: [3, 5, 7, 11, 13, 17, 19, 23, 29, 31]\n"));
    assert!(text.contains("Largest prime:   41\n"));
    assert!(text.contains("Primes found:    12\n"));
    assert!(text.contains("Elapsed:         12 ms\n"));
    assert!(text.contains("Speedup:         1.00x\n"));
}

#[test]
fn empty_trial_reports_no_largest_prime() {
    let trial = TrialReport::new(4, 3..3, Duration::ZERO, vec![], Utc::now());
    let text = render_trial(&trial, None);

    assert!(text.starts_with("== 4 threads ==\n"));
    assert!(text.contains("First 10 primes: []\n"));
    assert!(text.contains("Largest prime:   none\n"));
    assert!(text.contains("Speedup:         n/a\n"));
}

#[test]
fn speedup_formatting() {
    assert_eq!(format_speedup(Some(3.456)), "3.46x");
    assert_eq!(format_speedup(None), "n/a");
}
