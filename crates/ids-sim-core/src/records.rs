//! Per-day activity records produced by the sampler.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Round to two decimal places (half away from zero).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A sampled value, typed by the event's kind.
///
/// Serializes as a bare JSON number: integers for discrete events, reals
/// for continuous ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventValue {
    Discrete(i64),
    Continuous(f64),
}

impl EventValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Discrete(v) => v as f64,
            Self::Continuous(v) => v,
        }
    }
}

impl std::fmt::Display for EventValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discrete(v) => write!(f, "{}", v),
            Self::Continuous(v) => write!(f, "{:.2}", v),
        }
    }
}

/// One simulated day: a date plus one value per event.
///
/// Serialized flat: `{"date": "2024-05-01", "Logins": 4, "Time online": 151.23}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub values: BTreeMap<String, EventValue>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, values: BTreeMap<String, EventValue>) -> Self {
        Self { date, values }
    }

    pub fn get(&self, name: &str) -> Option<EventValue> {
        self.values.get(name).copied()
    }

    /// Values in name order, as reals.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_f64()))
    }
}
