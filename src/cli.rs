//! Command-line surface: flags, parameter prompts, and report output.
//!
//! The binary only wires real stdin/stdout/stderr into [`execute`].

use crate::bench::{BenchConfig, Benchmark};
use crate::config::Config;
use crate::engine::{TrialConfig, TrialRunner};
use crate::error::{Error, Result};
use crate::input::{UPPER_PROMPT, WORKERS_PROMPT, resolve};
use crate::model::BenchReport;
use crate::progress::ProgressSink;
use crate::report;
use clap::Parser;
use std::io::{BufRead, Write};

#[derive(Debug, Parser)]
#[command(
    name = "primebench",
    about = "Benchmark naive primality testing across thread counts"
)]
pub struct Cli {
    /// Exclusive upper bound of the range to scan (prompted if omitted)
    #[arg(long)]
    pub upper: Option<u64>,
    /// Highest thread count to test (prompted if omitted)
    #[arg(long)]
    pub max_workers: Option<u64>,
    /// Print the full report as JSON instead of text
    #[arg(long)]
    pub json: bool,
    /// Hide the progress bar
    #[arg(long, short)]
    pub quiet: bool,
}

impl Cli {
    /// The bar shares stdout with the report, so JSON output turns it off.
    pub fn shows_progress(&self) -> bool {
        !self.quiet && !self.json
    }
}

/// Resolve parameters, run the benchmark, and write the report to `out`.
///
/// Prompts go to `out` for the text report and to `err` with `--json`,
/// so that `out` carries nothing but the JSON document.
///
/// # Errors
///
/// `InvalidInput` for bad parameters, `Io` if a stream fails, `Other` if
/// any trial disagrees with the sequential baseline.
pub fn execute<R: BufRead, W: Write, E: Write>(
    cli: &Cli,
    config: &Config,
    input: &mut R,
    out: &mut W,
    err: &mut E,
    progress: &mut dyn ProgressSink,
) -> Result<BenchReport> {
    let bench_config = {
        let mut prompt_out: &mut dyn Write = if cli.json {
            err as &mut dyn Write
        } else {
            &mut *out as &mut dyn Write
        };
        let upper = resolve(cli.upper, input, &mut prompt_out, "upper bound", UPPER_PROMPT)?;
        let max_workers = resolve(
            cli.max_workers,
            input,
            &mut prompt_out,
            "maximum thread count",
            WORKERS_PROMPT,
        )?;
        let max_workers = usize::try_from(max_workers).map_err(|_| {
            Error::InvalidInput(format!("maximum thread count {max_workers} is too large"))
        })?;
        BenchConfig::new(upper, max_workers)?
    };

    let benchmark = Benchmark::new(TrialRunner::new(TrialConfig {
        progress_interval: config.progress_interval,
    }));

    if cli.json {
        let report = benchmark.run(bench_config, progress, |_, _| {})?;
        serde_json::to_writer_pretty(&mut *out, &report)
            .map_err(|e| Error::Other(format!("failed to write JSON report: {e}")))?;
        writeln!(out)?;
        return check_agreement(report);
    }

    let mut write_err = None;
    let report = benchmark.run(bench_config, progress, |trial, speedup| {
        if write_err.is_none() {
            write_err = report::write_trial(&mut *out, trial, speedup).err();
        }
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }
    check_agreement(report)
}

fn check_agreement(report: BenchReport) -> Result<BenchReport> {
    if !report.results_agree() {
        return Err(Error::Other(
            "trials found different primes than the sequential baseline".to_string(),
        ));
    }
    Ok(report)
}
