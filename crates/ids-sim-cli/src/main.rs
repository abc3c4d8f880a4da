//! ids-sim - synthetic activity generator and anomaly detector
//!
//! Generates a training period of daily activity from an events catalog and
//! a stats file, aggregates it, then optionally scores a live period drawn
//! from a second stats file against the training statistics.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod output;
mod prompt;
mod simulate;

use config::SimConfig;
use error::{CliError, CliResult};
use simulate::SessionOptions;

/// ids-sim CLI application
#[derive(Parser)]
#[command(name = "ids-sim")]
#[command(about = "Synthetic activity generator and weighted-deviation anomaly detector", long_about = None)]
#[command(version)]
struct Cli {
    /// Events catalog file (`name:kind:min:max:weight` lines)
    events: PathBuf,

    /// Baseline stats file (`name:mean:stddev` lines)
    stats: PathBuf,

    /// Number of training days to generate
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    days: u64,

    /// Stats file for the live (detection) period
    #[arg(long)]
    live_stats: Option<PathBuf>,

    /// Number of live days (defaults to DAYS)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    live_days: Option<u64>,

    /// RNG seed for reproducible runs
    #[arg(long, env = "IDS_SIM_SEED")]
    seed: Option<u64>,

    /// Directory for the report files
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, env = "IDS_SIM_CONFIG")]
    config: Option<String>,

    /// Prompt for missing inputs and re-prompt on invalid files
    #[arg(short, long)]
    interactive: bool,

    /// Console output format (table, json, yaml)
    #[arg(short, long)]
    format: Option<output::OutputFormat>,

    /// Show per-event contributions for each verdict
    #[arg(long)]
    explain: bool,

    /// Log level
    #[arg(long, env = "IDS_SIM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "IDS_SIM_LOG_JSON")]
    log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = SimConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let level = if cli.verbose {
        "debug".to_string()
    } else {
        cli.log_level
            .clone()
            .unwrap_or_else(|| config.logging.level.clone())
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    if cli.log_json || config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    let opts = SessionOptions {
        events: cli.events,
        stats: cli.stats,
        days: to_days(cli.days)?,
        live_stats: cli.live_stats,
        live_days: cli.live_days.map(to_days).transpose()?,
        seed: cli.seed.or(config.seed),
        output_dir: cli.output_dir.unwrap_or(config.output_dir),
        files: config.files,
        interactive: cli.interactive || config.interactive,
        format: cli.format.unwrap_or(config.format),
        explain: cli.explain,
    };

    simulate::execute(opts)
}

fn to_days(days: u64) -> CliResult<usize> {
    usize::try_from(days).map_err(|_| CliError::Usage(format!("{} days is too many", days)))
}
