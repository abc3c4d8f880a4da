//! Baseline loader: validates stats rows against an event catalog.
//!
//! Fatal checks (every mode):
//! 1. declared row count equals the catalog size and the number of rows supplied
//! 2. every name exists in the catalog and appears once
//! 3. mean and stddev are finite numbers
//! 4. `min <= mean <= max` where bounds exist
//!
//! Advisory checks (`ValidationMode::Advisory` only), reported as warnings:
//! 5. `stddev <= 0`
//! 6. discrete events with a fractional stddev, continuous events with an integral one

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{EventCatalog, EventKind};
use crate::error::{SimError, SimResult};

use super::types::{Baseline, BaselineEntry, StatsRow, ValidationMode};

/// Validates stats input and keeps the warnings it produced.
///
/// Warnings stay readable after a failed [`BaselineLoader::load`]: an
/// out-of-range mean is recorded as a warning before the error is returned.
pub struct BaselineLoader<'a> {
    catalog: &'a EventCatalog,
    mode: ValidationMode,
    warnings: Vec<String>,
}

impl<'a> BaselineLoader<'a> {
    pub fn new(catalog: &'a EventCatalog, mode: ValidationMode) -> Self {
        Self {
            catalog,
            mode,
            warnings: Vec::new(),
        }
    }

    /// Loader running fatal and advisory checks.
    pub fn advisory(catalog: &'a EventCatalog) -> Self {
        Self::new(catalog, ValidationMode::Advisory)
    }

    /// Loader running fatal checks only.
    pub fn strict(catalog: &'a EventCatalog) -> Self {
        Self::new(catalog, ValidationMode::Strict)
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate `rows` and build the baseline.
    ///
    /// Clears warnings from any previous call first.
    pub fn load(&mut self, declared: usize, rows: &[StatsRow]) -> SimResult<Baseline> {
        self.warnings.clear();
        let catalog = self.catalog;

        if declared != catalog.len() {
            return Err(SimError::Format(format!(
                "there are {} events in the event catalog, but the stats input declares {} events",
                catalog.len(),
                declared
            )));
        }
        if rows.len() != declared {
            return Err(SimError::Format(format!(
                "expected {} events, but found {} events",
                declared,
                rows.len()
            )));
        }

        let mut seen = HashSet::with_capacity(rows.len());
        for row in rows {
            if !catalog.contains(&row.name) {
                return Err(SimError::UnknownEvent(row.name.clone()));
            }
            if !seen.insert(row.name.as_str()) {
                return Err(SimError::DuplicateEvent(row.name.clone()));
            }
        }

        let mut baseline = Baseline::new();
        for row in rows {
            let def = catalog
                .get(&row.name)
                .ok_or_else(|| SimError::UnknownEvent(row.name.clone()))?;

            if !row.mean.is_finite() || !row.stddev.is_finite() {
                return Err(SimError::Format(format!(
                    "'{}' has a non-finite mean ({}) or standard deviation ({})",
                    row.name, row.mean, row.stddev
                )));
            }
            if let Some(min) = def.min() {
                if row.mean < min {
                    return Err(self.reject(SimError::below_min(&row.name, row.mean, min)));
                }
            }
            if let Some(max) = def.max() {
                if row.mean > max {
                    return Err(self.reject(SimError::above_max(&row.name, row.mean, max)));
                }
            }

            if self.mode == ValidationMode::Advisory {
                self.check_stddev(&row.name, def.kind(), row.stddev);
            }

            baseline.insert(row.name.clone(), BaselineEntry::new(row.mean, row.stddev));
        }

        debug!(
            events = baseline.len(),
            warnings = self.warnings.len(),
            mode = ?self.mode,
            "baseline validated"
        );

        Ok(baseline)
    }

    /// Warnings recorded by the last `load` call.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    // ── Private helpers ─────────────────────────────────────────────

    fn reject(&mut self, err: SimError) -> SimError {
        self.record(err.to_string());
        err
    }

    fn record(&mut self, message: String) {
        warn!("{}", message);
        self.warnings.push(message);
    }

    fn check_stddev(&mut self, name: &str, kind: EventKind, stddev: f64) {
        if stddev <= 0.0 {
            self.record(format!(
                "'{}' has an invalid standard deviation ({}). Must be > 0.",
                name, stddev
            ));
        }

        match kind {
            EventKind::Discrete if stddev.fract() != 0.0 => self.record(format!(
                "'{}' is discrete but has a non-integer standard deviation: {}",
                name, stddev
            )),
            EventKind::Continuous if stddev.fract() == 0.0 => self.record(format!(
                "'{}' is continuous but has an integer standard deviation: {}",
                name, stddev
            )),
            _ => {}
        }
    }
}
