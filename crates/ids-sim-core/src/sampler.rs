//! Gaussian activity sampler.
//!
//! Per event: draw `x ~ Normal(mean, stddev)`, clamp to the catalog bounds,
//! then truncate toward zero (discrete) or round to two decimals (continuous).
//!
//! The random source is injected. `Sampler::seeded` gives reproducible runs;
//! `Sampler::from_entropy` gives a fresh, non-deterministic stream.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::{debug, info};

use crate::baseline::{Baseline, BaselineEntry};
use crate::catalog::{EventCatalog, EventDefinition, EventKind};
use crate::error::{SimError, SimResult};
use crate::records::{round2, DailyRecord, EventValue};

/// Draws daily event values from a baseline distribution.
pub struct Sampler<R: Rng = StdRng> {
    rng: R,
}

impl Sampler<StdRng> {
    /// Deterministic sampler for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Sampler seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Sampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Sample a single event value.
    ///
    /// `stddev == 0` collapses to the (clamped) mean. A negative stddev
    /// mirrors the draw around the mean, which has the same distribution
    /// as its absolute value.
    pub fn sample_event(&mut self, def: &EventDefinition, entry: &BaselineEntry) -> EventValue {
        let z: f64 = self.rng.sample(StandardNormal);
        let raw = entry.mean + z * entry.stddev;
        let clamped = def.clamp(raw);
        if clamped != raw {
            debug!(event = def.name(), raw, clamped, "sample clamped to bounds");
        }

        match def.kind() {
            EventKind::Discrete => EventValue::Discrete(clamped.trunc() as i64),
            EventKind::Continuous => EventValue::Continuous(round2(clamped)),
        }
    }

    /// Generate one day's record: one value per catalog event.
    pub fn generate(
        &mut self,
        date: NaiveDate,
        catalog: &EventCatalog,
        baseline: &Baseline,
    ) -> SimResult<DailyRecord> {
        let mut values = BTreeMap::new();
        for def in catalog.iter() {
            let entry = baseline
                .get(def.name())
                .ok_or_else(|| SimError::MissingBaseline(def.name().to_string()))?;
            values.insert(def.name().to_string(), self.sample_event(def, entry));
        }
        Ok(DailyRecord::new(date, values))
    }

    /// Generate `days` consecutive records starting at `start`.
    pub fn generate_days(
        &mut self,
        catalog: &EventCatalog,
        baseline: &Baseline,
        start: NaiveDate,
        days: usize,
    ) -> SimResult<Vec<DailyRecord>> {
        let mut records = Vec::with_capacity(days);
        for offset in 0..days {
            records.push(self.generate(offset_date(start, offset), catalog, baseline)?);
        }
        info!(days, events = catalog.len(), %start, "generated daily records");
        Ok(records)
    }
}

/// `start + offset` days, saturating at the last representable date.
pub(crate) fn offset_date(start: NaiveDate, offset: usize) -> NaiveDate {
    start
        .checked_add_days(Days::new(offset as u64))
        .unwrap_or(NaiveDate::MAX)
}
