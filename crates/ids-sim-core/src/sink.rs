//! Reporting sinks for generated records, statistics and verdicts.
//!
//! Provides the `ReportSink` trait, a `JsonFileSink` that writes pretty
//! JSON report files, and an `InMemorySink` for tests.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::aggregate::Statistics;
use crate::anomaly::AnomalyVerdict;
use crate::error::SimResult;
use crate::records::DailyRecord;

/// Which phase produced a batch of records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    /// Records generated from the configured stats (baseline phase).
    Training,
    /// Records generated from replacement stats for detection.
    Live,
}

/// Destination for simulation output.
pub trait ReportSink {
    /// Emit a batch of generated records.
    fn emit_records(&mut self, kind: RecordKind, records: &[DailyRecord]) -> SimResult<()>;

    /// Emit aggregated statistics.
    fn emit_statistics(&mut self, statistics: &Statistics) -> SimResult<()>;

    /// Emit anomaly verdicts.
    fn emit_verdicts(&mut self, verdicts: &[AnomalyVerdict]) -> SimResult<()>;
}

/// Output file names, relative to the sink's directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFiles {
    pub records: String,
    pub statistics: String,
    pub live_records: String,
    pub alerts: String,
}

impl Default for ReportFiles {
    fn default() -> Self {
        Self {
            records: "logs.json".into(),
            statistics: "analysis_results.json".into(),
            live_records: "live_daily_events.json".into(),
            alerts: "alerts.json".into(),
        }
    }
}

/// Writes each report as a pretty-printed JSON file.
///
/// Writes are atomic (write to `.tmp`, then rename).
pub struct JsonFileSink {
    dir: PathBuf,
    files: ReportFiles,
}

impl JsonFileSink {
    pub fn new(dir: impl Into<PathBuf>, files: ReportFiles) -> Self {
        Self {
            dir: dir.into(),
            files,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of a report file.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    fn write_json<T: Serialize + ?Sized>(&self, file_name: &str, value: &T) -> SimResult<PathBuf> {
        let json = serde_json::to_string_pretty(value)?;
        std::fs::create_dir_all(&self.dir)?;

        let path = self.path_of(file_name);
        let tmp_path = path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &path)?;

        info!(path = %path.display(), "report written");
        Ok(path)
    }
}

impl ReportSink for JsonFileSink {
    fn emit_records(&mut self, kind: RecordKind, records: &[DailyRecord]) -> SimResult<()> {
        let name = match kind {
            RecordKind::Training => &self.files.records,
            RecordKind::Live => &self.files.live_records,
        };
        self.write_json(name, records).map(|_| ())
    }

    fn emit_statistics(&mut self, statistics: &Statistics) -> SimResult<()> {
        self.write_json(&self.files.statistics, statistics).map(|_| ())
    }

    fn emit_verdicts(&mut self, verdicts: &[AnomalyVerdict]) -> SimResult<()> {
        self.write_json(&self.files.alerts, verdicts).map(|_| ())
    }
}

/// Keeps emitted reports in memory (for testing).
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub training: Vec<DailyRecord>,
    pub live: Vec<DailyRecord>,
    pub statistics: Option<Statistics>,
    pub verdicts: Vec<AnomalyVerdict>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportSink for InMemorySink {
    fn emit_records(&mut self, kind: RecordKind, records: &[DailyRecord]) -> SimResult<()> {
        let target = match kind {
            RecordKind::Training => &mut self.training,
            RecordKind::Live => &mut self.live,
        };
        *target = records.to_vec();
        Ok(())
    }

    fn emit_statistics(&mut self, statistics: &Statistics) -> SimResult<()> {
        self.statistics = Some(statistics.clone());
        Ok(())
    }

    fn emit_verdicts(&mut self, verdicts: &[AnomalyVerdict]) -> SimResult<()> {
        self.verdicts = verdicts.to_vec();
        Ok(())
    }
}
