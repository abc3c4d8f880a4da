//! Property tests: weighted-deviation scoring.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use ids_sim_core::{
    AnomalyScorer, AnomalyStatus, Baseline, BaselineEntry, DailyRecord, EventCatalog, EventRow,
    EventValue,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn catalog(weights: &[i64]) -> EventCatalog {
    let rows: Vec<EventRow> = weights
        .iter()
        .enumerate()
        .map(|(i, w)| EventRow::new(format!("E{}", i), "C", None, None, *w))
        .collect();
    EventCatalog::from_rows(rows.len(), &rows).unwrap()
}

fn record(values: &[f64]) -> DailyRecord {
    let map: BTreeMap<String, EventValue> = values
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("E{}", i), EventValue::Continuous(*v)))
        .collect();
    DailyRecord::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), map)
}

fn baseline(entries: &[(f64, f64)]) -> Baseline {
    entries
        .iter()
        .enumerate()
        .map(|(i, (mean, stddev))| (format!("E{}", i), BaselineEntry::new(*mean, *stddev)))
        .collect()
}

fn arb_events() -> impl Strategy<Value = Vec<(i64, f64, f64)>> {
    prop::collection::vec((1i64..10, -500.0f64..500.0, 0.1f64..100.0), 1..8)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A day sitting exactly on every mean scores zero and is never flagged.
    #[test]
    fn day_at_mean_scores_zero(events in arb_events()) {
        let weights: Vec<i64> = events.iter().map(|e| e.0).collect();
        let entries: Vec<(f64, f64)> = events.iter().map(|e| (e.1, e.2)).collect();
        let means: Vec<f64> = events.iter().map(|e| e.1).collect();

        let cat = catalog(&weights);
        let score = AnomalyScorer::score(&record(&means), &baseline(&entries), &cat);
        prop_assert_eq!(score.score, 0.0);
        prop_assert_eq!(
            AnomalyScorer::classify(score.score, cat.threshold()),
            AnomalyStatus::Normal
        );
    }

    /// Scores are non-negative and equal the sum of their contributions.
    #[test]
    fn score_is_sum_of_contributions(
        events in arb_events(),
        offsets in prop::collection::vec(-300.0f64..300.0, 8),
    ) {
        let weights: Vec<i64> = events.iter().map(|e| e.0).collect();
        let entries: Vec<(f64, f64)> = events.iter().map(|e| (e.1, e.2)).collect();
        let values: Vec<f64> = events.iter().zip(&offsets).map(|(e, o)| e.1 + o).collect();

        let score = AnomalyScorer::score(&record(&values), &baseline(&entries), &catalog(&weights));
        let sum: f64 = score.contributions.values().sum();
        prop_assert!(score.score >= 0.0);
        prop_assert!((score.score - sum).abs() < 1e-9 * sum.max(1.0));
    }

    /// The threshold is twice the summed weights, independent of the data.
    #[test]
    fn threshold_depends_only_on_weights(weights in prop::collection::vec(1i64..20, 1..10)) {
        let cat = catalog(&weights);
        prop_assert_eq!(cat.threshold(), 2.0 * weights.iter().sum::<i64>() as f64);
        prop_assert_eq!(AnomalyScorer::threshold(&cat), cat.threshold());
    }

    /// Scoring a day does not depend on which other days are evaluated.
    #[test]
    fn verdicts_are_independent_of_order(
        events in arb_events(),
        days in prop::collection::vec(prop::collection::vec(-300.0f64..300.0, 8), 1..10),
    ) {
        let weights: Vec<i64> = events.iter().map(|e| e.0).collect();
        let entries: Vec<(f64, f64)> = events.iter().map(|e| (e.1, e.2)).collect();
        let cat = catalog(&weights);
        let base = baseline(&entries);

        let records: Vec<DailyRecord> = days
            .iter()
            .map(|offsets| {
                record(&events.iter().zip(offsets).map(|(e, o)| e.1 + o).collect::<Vec<_>>())
            })
            .collect();
        let mut reversed = records.clone();
        reversed.reverse();

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let forward = AnomalyScorer::evaluate(&records, &base, &cat, start);
        let backward = AnomalyScorer::evaluate(&reversed, &base, &cat, start);

        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            prop_assert_eq!(f.score, b.score);
            prop_assert_eq!(f.status, b.status);
        }
    }
}
