//! Baseline type definitions.
//!
//! A baseline is the `(mean, stddev)` pair per event used either as the
//! generating distribution or as the reference for anomaly scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::aggregate::Statistics;

/// One stats row as supplied by the configuration loader.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsRow {
    pub name: String,
    pub mean: f64,
    pub stddev: f64,
}

impl StatsRow {
    pub fn new(name: impl Into<String>, mean: f64, stddev: f64) -> Self {
        Self {
            name: name.into(),
            mean,
            stddev,
        }
    }
}

/// Mean and standard deviation of a single event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineEntry {
    pub mean: f64,
    pub stddev: f64,
}

impl BaselineEntry {
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }

    /// Whether this entry can be used as a scoring reference (`stddev > 0`).
    pub fn is_usable(&self) -> bool {
        self.stddev > 0.0
    }
}

/// Which checks the baseline loader runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Fatal checks plus advisory warnings about stddev shape and sign.
    #[default]
    Advisory,
    /// Fatal checks only. Used for replacement (live) stats inputs.
    Strict,
}

/// Name → (mean, stddev) mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Baseline {
    entries: BTreeMap<String, BaselineEntry>,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use aggregated statistics (mean, stddev) as a baseline.
    pub fn from_statistics(stats: &Statistics) -> Self {
        stats
            .iter()
            .map(|(name, s)| (name.clone(), BaselineEntry::new(s.mean, s.stddev)))
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: BaselineEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&BaselineEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BaselineEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, BaselineEntry)> for Baseline {
    fn from_iter<T: IntoIterator<Item = (String, BaselineEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
