//! primebench CLI: sequential vs. multi-threaded prime search benchmark.

use clap::Parser;
use primebench::cli::{Cli, execute};
use primebench::config::Config;
use primebench::progress::{NoProgress, ProgressBar, ProgressSink};
use primebench::telemetry::{TelemetryConfig, init_telemetry};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_env()?;

    init_telemetry(TelemetryConfig {
        default_filter: config.log_level.clone(),
    })?;

    let mut progress: Box<dyn ProgressSink> = if cli.shows_progress() {
        Box::new(ProgressBar::new(std::io::stdout(), config.progress_width))
    } else {
        Box::new(NoProgress)
    };

    execute(
        &cli,
        &config,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
        progress.as_mut(),
    )?;
    Ok(())
}
