//! Text rendering of trial results.

use crate::model::{PREVIEW_LEN, TrialReport};
use std::io::Write;

/// Write the summary block for one trial.
pub fn write_trial<W: Write>(
    out: &mut W,
    trial: &TrialReport,
    speedup: Option<f64>,
) -> std::io::Result<()> {
    if trial.is_baseline() {
        writeln!(out, "== sequential baseline (1 thread) ==")?;
    } else {
        writeln!(out, "== {} threads ==", trial.workers)?;
    }

    let preview: Vec<String> = trial
        .first(PREVIEW_LEN)
        .iter()
        .map(u64::to_string)
        .collect();
    writeln!(out, "First {PREVIEW_LEN} primes: [{}]", preview.join(", "))?;

    match trial.largest() {
        Some(p) => writeln!(out, "Largest prime:   {p}")?,
        None => writeln!(out, "Largest prime:   none")?,
    }
    writeln!(out, "Primes found:    {}", trial.prime_count())?;
    writeln!(out, "Elapsed:         {} ms", trial.elapsed_ms())?;
    writeln!(out, "Speedup:         {}", format_speedup(speedup))?;
    writeln!(out)
}

pub fn format_speedup(speedup: Option<f64>) -> String {
    match speedup {
        Some(s) => format!("{s:.2}x"),
        None => "n/a".to_string(),
    }
}
