//! Baseline statistics: per-event `(mean, stddev)` validated against the catalog.
//!
//! ```text
//!   StatsRow (name, mean, stddev) ──► BaselineLoader ──► Baseline
//!                                         │
//!                                         └── warnings (advisory, non-fatal)
//! ```

pub mod loader;
pub mod types;

pub use loader::BaselineLoader;
pub use types::{Baseline, BaselineEntry, StatsRow, ValidationMode};
