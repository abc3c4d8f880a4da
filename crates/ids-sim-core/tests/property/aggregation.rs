//! Property tests: aggregation of arbitrary day sequences.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use ids_sim_core::{aggregate, DailyRecord, EventValue};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reported statistics carry two decimals; summation order can move a
/// value across a rounding boundary.
const ROUNDING_STEP: f64 = 0.01 + 1e-9;

fn days_of(values: &[i64]) -> Vec<DailyRecord> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let mut map = BTreeMap::new();
            map.insert("E".to_string(), EventValue::Discrete(*v));
            DailyRecord::new(start + Days::new(i as u64), map)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// A constant column has mean equal to the constant and zero spread.
    #[test]
    fn constant_column_has_zero_stddev(value in -1000i64..1000, n in 1usize..50) {
        let stats = aggregate(&days_of(&vec![value; n])).unwrap();
        let stat = stats["E"];
        prop_assert_eq!(stat.mean, value as f64);
        prop_assert_eq!(stat.total, (value * n as i64) as f64);
        prop_assert_eq!(stat.stddev, 0.0);
    }

    /// The mean lies between the smallest and largest observation, and the
    /// spread is never negative.
    #[test]
    fn mean_is_bounded_by_observations(values in prop::collection::vec(-1000i64..1000, 1..60)) {
        let stats = aggregate(&days_of(&values)).unwrap();
        let stat = stats["E"];
        let lo = *values.iter().min().unwrap() as f64;
        let hi = *values.iter().max().unwrap() as f64;

        prop_assert!(stat.mean >= lo - 0.005 && stat.mean <= hi + 0.005);
        prop_assert!(stat.stddev >= 0.0);
        prop_assert_eq!(stat.total, values.iter().sum::<i64>() as f64);
    }

    /// Day order does not change the statistics beyond one rounding step.
    #[test]
    fn aggregation_ignores_day_order(values in prop::collection::vec(-1000i64..1000, 1..40)) {
        let mut reversed = values.clone();
        reversed.reverse();
        let forward = aggregate(&days_of(&values)).unwrap();
        let backward = aggregate(&days_of(&reversed)).unwrap();

        prop_assert_eq!(forward.keys().collect::<Vec<_>>(), backward.keys().collect::<Vec<_>>());
        let (a, b) = (forward["E"], backward["E"]);
        prop_assert!((a.total - b.total).abs() <= ROUNDING_STEP, "{} vs {}", a.total, b.total);
        prop_assert!((a.mean - b.mean).abs() <= ROUNDING_STEP, "{} vs {}", a.mean, b.mean);
        prop_assert!((a.stddev - b.stddev).abs() <= ROUNDING_STEP, "{} vs {}", a.stddev, b.stddev);
    }
}
