//! Two-phase simulation helpers.
//!
//! Training generates records from the configured baseline and aggregates
//! them. Detection generates records from a live baseline and scores them
//! against a reference baseline (usually the training statistics). The two
//! are independent calls; nothing carries over except what the caller
//! passes in.

use chrono::NaiveDate;
use rand::Rng;
use tracing::info;

use crate::aggregate::{aggregate, Statistics};
use crate::anomaly::{AnomalyScorer, AnomalyVerdict};
use crate::baseline::Baseline;
use crate::catalog::EventCatalog;
use crate::error::SimResult;
use crate::records::DailyRecord;
use crate::sampler::Sampler;
use crate::sink::{RecordKind, ReportSink};

/// Output of the training phase.
#[derive(Clone, Debug)]
pub struct TrainingRun {
    pub records: Vec<DailyRecord>,
    pub statistics: Statistics,
}

impl TrainingRun {
    /// The training statistics as a scoring baseline.
    pub fn reference_baseline(&self) -> Baseline {
        Baseline::from_statistics(&self.statistics)
    }

    pub fn emit(&self, sink: &mut dyn ReportSink) -> SimResult<()> {
        sink.emit_records(RecordKind::Training, &self.records)?;
        sink.emit_statistics(&self.statistics)
    }
}

/// Output of the detection phase.
#[derive(Clone, Debug)]
pub struct DetectionRun {
    pub records: Vec<DailyRecord>,
    pub verdicts: Vec<AnomalyVerdict>,
}

impl DetectionRun {
    pub fn flagged(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_flagged()).count()
    }

    pub fn emit(&self, sink: &mut dyn ReportSink) -> SimResult<()> {
        sink.emit_records(RecordKind::Live, &self.records)?;
        sink.emit_verdicts(&self.verdicts)
    }
}

/// Generate `days` records from `baseline` and aggregate them.
///
/// Fails with `EmptyInput` when `days == 0`.
pub fn run_training<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &EventCatalog,
    baseline: &Baseline,
    start: NaiveDate,
    days: usize,
) -> SimResult<TrainingRun> {
    let records = sampler.generate_days(catalog, baseline, start, days)?;
    let statistics = aggregate(&records)?;
    info!(days, events = statistics.len(), "training phase complete");
    Ok(TrainingRun {
        records,
        statistics,
    })
}

/// Generate `days` records from `live` and score them against `reference`.
pub fn run_detection<R: Rng>(
    sampler: &mut Sampler<R>,
    catalog: &EventCatalog,
    live: &Baseline,
    reference: &Baseline,
    start: NaiveDate,
    days: usize,
) -> SimResult<DetectionRun> {
    let records = sampler.generate_days(catalog, live, start, days)?;
    let verdicts = AnomalyScorer::evaluate(&records, reference, catalog, start);
    let run = DetectionRun { records, verdicts };
    info!(days, flagged = run.flagged(), "detection phase complete");
    Ok(run)
}
