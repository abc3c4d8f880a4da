//! Anomaly scoring: weighted deviation of a day against a reference baseline.
//!
//! ```text
//!   DailyRecord + Baseline + EventCatalog
//!       │
//!       ├──► per event: |value − mean| / stddev × weight
//!       │
//!       ▼
//!   score ──► compare with 2 × Σ weight ──► AnomalyVerdict (OK | FLAGGED)
//! ```

pub mod scorer;
pub mod types;

pub use scorer::AnomalyScorer;
pub use types::{AnomalyScore, AnomalyStatus, AnomalyVerdict};
