//! Anomaly scoring types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::records::round2;

/// Outcome of comparing a day's score to the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyStatus {
    /// `score <= threshold`.
    #[serde(rename = "OK")]
    Normal,
    /// `score > threshold`.
    #[serde(rename = "FLAGGED")]
    Flagged,
}

impl AnomalyStatus {
    pub fn is_flagged(&self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl std::fmt::Display for AnomalyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "OK"),
            Self::Flagged => write!(f, "FLAGGED"),
        }
    }
}

/// Score of a single day, with each event's weighted deviation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnomalyScore {
    pub score: f64,
    pub contributions: BTreeMap<String, f64>,
}

/// Verdict for one evaluated day.
///
/// Serialized as `{"date", "anomaly counter", "threshold", "status"}`; the
/// counter is rounded to two decimals on output only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnomalyVerdict {
    pub date: NaiveDate,
    #[serde(rename = "anomaly counter", serialize_with = "serialize_rounded")]
    pub score: f64,
    pub threshold: f64,
    pub status: AnomalyStatus,
    /// Per-event weighted deviations behind `score`.
    #[serde(skip)]
    pub contributions: BTreeMap<String, f64>,
}

impl AnomalyVerdict {
    pub fn is_flagged(&self) -> bool {
        self.status.is_flagged()
    }
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round2(*value))
}
