//! The training-then-detection session driven by the command line.
//!
//! ```text
//!   events ──► catalog
//!   stats  ──► baseline (advisory) ──► training ──► logs + analysis_results
//!                                          │
//!                                          ▼ reference
//!   live stats (strict) ──────────────► detection ──► live logs + alerts
//!        ▲                                 │
//!        └──── interactive: try another ◄──┘
//! ```

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use ids_sim_core::{
    parse_events, parse_stats, run_detection, run_training, Baseline, BaselineLoader,
    EventCatalog, JsonFileSink, ReportFiles, Sampler, SimError, SimResult, ValidationMode,
};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};
use crate::output::{self, print_error, print_info, print_success, print_warning, OutputFormat, StatRow};
use crate::prompt;

/// Everything a session needs, after flags and config have been merged.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub events: PathBuf,
    pub stats: PathBuf,
    pub days: usize,
    pub live_stats: Option<PathBuf>,
    pub live_days: Option<usize>,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub files: ReportFiles,
    pub interactive: bool,
    pub format: OutputFormat,
    pub explain: bool,
}

/// Run a full session.
pub fn execute(opts: SessionOptions) -> CliResult<()> {
    let catalog = load_catalog(&opts.events)?;
    print_success(&format!(
        "Loaded {} events from {} (threshold {})",
        catalog.len(),
        opts.events.display(),
        catalog.threshold()
    ));
    for name in catalog.duplicates() {
        print_warning(&format!("'{}' is defined more than once; the last definition is used", name));
    }

    let baseline = obtain_baseline(&catalog, opts.stats.clone(), ValidationMode::Advisory, opts.interactive)?;

    let mut sampler = match opts.seed {
        Some(seed) => Sampler::seeded(seed),
        None => Sampler::from_entropy(),
    };
    let start = today();
    let mut sink = JsonFileSink::new(&opts.output_dir, opts.files.clone());

    // ── Training ──

    let training = run_training(&mut sampler, &catalog, &baseline, start, opts.days)?;
    training.emit(&mut sink)?;
    print_success(&format!(
        "Training: {} days written to {} and {}",
        opts.days,
        sink.path_of(&opts.files.records).display(),
        sink.path_of(&opts.files.statistics).display()
    ));
    output::print_output(StatRow::from_statistics(&training.statistics), opts.format)?;

    let reference = training.reference_baseline();
    if opts.interactive {
        prompt::pause()?;
    }

    // ── Detection ──

    let mut live_path = opts.live_stats.clone();
    loop {
        let path = match live_path.take() {
            Some(path) => path,
            None if opts.interactive => prompt::file_path("Live stats file")?,
            None => {
                print_info("No live stats supplied; stopping after training");
                return Ok(());
            }
        };
        let live = obtain_baseline(&catalog, path, ValidationMode::Strict, opts.interactive)?;

        let live_days = match opts.live_days {
            Some(days) => days,
            None if opts.interactive => prompt::day_count("Number of live days", opts.days)?,
            None => opts.days,
        };

        let detection = run_detection(&mut sampler, &catalog, &live, &reference, start, live_days)?;
        detection.emit(&mut sink)?;
        print_success(&format!(
            "Detection: {} days written to {} and {}",
            live_days,
            sink.path_of(&opts.files.live_records).display(),
            sink.path_of(&opts.files.alerts).display()
        ));
        output::print_verdicts(&detection.verdicts, opts.explain, opts.format)?;

        let flagged = detection.flagged();
        let summary = format!("{} of {} days flagged", flagged, detection.verdicts.len());
        if flagged > 0 {
            print_warning(&summary);
        } else {
            print_success(&summary);
        }

        if !opts.interactive || !prompt::confirm("Try another live stats file?")? {
            return Ok(());
        }
    }
}

/// Read and validate the events file.
pub fn load_catalog(path: &Path) -> CliResult<EventCatalog> {
    let text = read_input(path)?;
    let (declared, rows) = parse_events(&text)?;
    let catalog = EventCatalog::from_rows(declared, &rows)?;
    debug!(path = %path.display(), events = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Read and validate a stats file, printing any warnings the loader recorded.
pub fn load_baseline(catalog: &EventCatalog, path: &Path, mode: ValidationMode) -> CliResult<Baseline> {
    let text = read_input(path)?;
    let (declared, rows) = parse_stats(&text)?;

    let mut loader = BaselineLoader::new(catalog, mode);
    let result = loader.load(declared, &rows);
    for warning in advisories(loader.warnings(), &result) {
        print_warning(warning);
    }
    let baseline = result?;
    info!(path = %path.display(), events = baseline.len(), ?mode, "stats loaded");
    Ok(baseline)
}

/// Warnings worth printing on their own. A rejected mean is also the
/// returned error, which the caller reports.
fn advisories<'a>(warnings: &'a [String], result: &SimResult<Baseline>) -> &'a [String] {
    match result {
        Err(SimError::OutOfRange { .. }) => &warnings[..warnings.len().saturating_sub(1)],
        _ => warnings,
    }
}

/// Load a stats file; interactive sessions re-prompt until one validates.
fn obtain_baseline(
    catalog: &EventCatalog,
    mut path: PathBuf,
    mode: ValidationMode,
    interactive: bool,
) -> CliResult<Baseline> {
    loop {
        match load_baseline(catalog, &path, mode) {
            Ok(baseline) => {
                print_success(&format!("Loaded stats from {}", path.display()));
                return Ok(baseline);
            }
            Err(e) if interactive && e.is_recoverable() => {
                print_error(&e.to_string());
                path = prompt::file_path("Stats file")?;
            }
            Err(e) => return Err(e),
        }
    }
}

fn read_input(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
