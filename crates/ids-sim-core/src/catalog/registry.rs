//! The validated event catalog.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{SimError, SimResult};

use super::types::{EventDefinition, EventRow};
use super::THRESHOLD_MULTIPLIER;

/// Immutable mapping from event name to its definition.
///
/// Duplicate names follow a last-definition-wins policy: a later row with
/// the same name replaces the earlier one, and the replaced name is listed
/// in [`EventCatalog::duplicates`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct EventCatalog {
    events: BTreeMap<String, EventDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    duplicates: Vec<String>,
}

impl EventCatalog {
    /// Validate `rows` against the declared row count and build the catalog.
    pub fn from_rows(declared: usize, rows: &[EventRow]) -> SimResult<Self> {
        if rows.len() != declared {
            return Err(SimError::Format(format!(
                "expected {} events, but found {} lines",
                declared,
                rows.len()
            )));
        }

        let mut events = BTreeMap::new();
        let mut duplicates = Vec::new();
        for row in rows {
            let def = EventDefinition::from_row(row)?;
            let name = def.name().to_string();
            if events.insert(name.clone(), def).is_some() {
                warn!(event = %name, "duplicate event definition; last one wins");
                duplicates.push(name);
            }
        }

        debug!(
            events = events.len(),
            duplicates = duplicates.len(),
            "event catalog built"
        );

        Ok(Self { events, duplicates })
    }

    pub fn get(&self, name: &str) -> Option<&EventDefinition> {
        self.events.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    /// Definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &EventDefinition> {
        self.events.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.events.keys().map(String::as_str)
    }

    /// Number of distinct event names.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Names that were defined more than once and overwritten.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    /// Sum of all configured weights.
    pub fn total_weight(&self) -> u64 {
        self.events.values().map(|d| u64::from(d.weight())).sum()
    }

    /// Anomaly decision boundary: `2 × Σ weight`.
    pub fn threshold(&self) -> f64 {
        THRESHOLD_MULTIPLIER * self.total_weight() as f64
    }
}
