//! Aggregation of a day sequence into per-event total / mean / stddev.
//!
//! Variance is the population variance (divisor = number of days). All
//! three outputs are rounded to two decimals for reporting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::records::{round2, DailyRecord};

/// Summary of one event across a day sequence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AggregatedStat {
    pub total: f64,
    pub mean: f64,
    pub stddev: f64,
}

impl AggregatedStat {
    /// Summarize a non-empty value sequence.
    fn from_values(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let total: f64 = values.iter().sum();
        let mean = total / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            total: round2(total),
            mean: round2(mean),
            stddev: round2(variance.sqrt()),
        }
    }
}

/// Event name → aggregated statistics.
pub type Statistics = BTreeMap<String, AggregatedStat>;

/// Aggregate every event observed across `records`.
///
/// An event missing from some days is summarized over the days that have it.
pub fn aggregate(records: &[DailyRecord]) -> SimResult<Statistics> {
    if records.is_empty() {
        return Err(SimError::EmptyInput);
    }

    let mut columns: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        for (name, value) in record.iter() {
            columns.entry(name).or_default().push(value);
        }
    }

    let stats: Statistics = columns
        .into_iter()
        .map(|(name, values)| (name.to_string(), AggregatedStat::from_values(&values)))
        .collect();

    debug!(days = records.len(), events = stats.len(), "aggregated statistics");
    Ok(stats)
}
