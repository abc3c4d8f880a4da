//! Weighted-deviation anomaly scorer.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::baseline::Baseline;
use crate::catalog::EventCatalog;
use crate::records::DailyRecord;
use crate::sampler::offset_date;

use super::types::{AnomalyScore, AnomalyStatus, AnomalyVerdict};

/// Scores days against a reference baseline.
///
/// Per event: `|value - mean| / stddev × weight`, summed over every event
/// present in both the record and the baseline. Events whose baseline
/// stddev is not positive, or that the catalog does not define, add nothing.
pub struct AnomalyScorer;

impl AnomalyScorer {
    /// Score a single day.
    pub fn score(record: &DailyRecord, baseline: &Baseline, catalog: &EventCatalog) -> AnomalyScore {
        let mut result = AnomalyScore::default();

        for (name, value) in record.iter() {
            let Some(entry) = baseline.get(name) else {
                continue;
            };
            if !entry.is_usable() {
                debug!(event = name, stddev = entry.stddev, "skipping event with non-positive stddev");
                continue;
            }
            let Some(def) = catalog.get(name) else {
                debug!(event = name, "skipping event missing from catalog");
                continue;
            };

            let deviation = (value - entry.mean).abs() / entry.stddev;
            let contribution = deviation * f64::from(def.weight());
            result.score += contribution;
            result.contributions.insert(name.to_string(), contribution);
        }

        result
    }

    /// Decision boundary for `catalog`: `2 × Σ weight`.
    pub fn threshold(catalog: &EventCatalog) -> f64 {
        catalog.threshold()
    }

    /// `Flagged` strictly above the threshold, `Normal` otherwise.
    pub fn classify(score: f64, threshold: f64) -> AnomalyStatus {
        if score > threshold {
            AnomalyStatus::Flagged
        } else {
            AnomalyStatus::Normal
        }
    }

    /// Score every record in order. Verdict `i` is dated `start + i` days.
    pub fn evaluate(
        records: &[DailyRecord],
        baseline: &Baseline,
        catalog: &EventCatalog,
        start: NaiveDate,
    ) -> Vec<AnomalyVerdict> {
        let threshold = Self::threshold(catalog);

        let verdicts: Vec<AnomalyVerdict> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let AnomalyScore {
                    score,
                    contributions,
                } = Self::score(record, baseline, catalog);
                AnomalyVerdict {
                    date: offset_date(start, i),
                    score,
                    threshold,
                    status: Self::classify(score, threshold),
                    contributions,
                }
            })
            .collect();

        let flagged = verdicts.iter().filter(|v| v.is_flagged()).count();
        info!(days = verdicts.len(), flagged, threshold, "anomaly evaluation complete");
        verdicts
    }
}
