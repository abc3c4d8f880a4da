//! # ids-sim-core
//!
//! Synthetic user-activity generator and weighted-deviation anomaly detector.
//!
//! A catalog declares which events exist and how they behave, a baseline
//! gives each event a mean and standard deviation, and the sampler draws
//! daily records from that baseline. Training aggregates the records into
//! statistics; detection scores a second batch of records against them.
//!
//! ## Architecture
//!
//! ```text
//!   events text ──► parse_events ──► EventCatalog
//!                                        │
//!   stats text  ──► parse_stats  ──► BaselineLoader ──► Baseline
//!                                                          │
//!                                                          ▼
//!                                                   ┌─────────────┐
//!                                                   │   Sampler   │  Gaussian, clamped
//!                                                   └──────┬──────┘
//!                                 training                 │  DailyRecord × N
//!                         ┌────────────────────────────────┤
//!                         ▼                                ▼ detection
//!                  ┌─────────────┐                 ┌───────────────┐
//!                  │  aggregate  │ ──► Statistics ─►│ AnomalyScorer │ ──► AnomalyVerdict × N
//!                  └─────────────┘     (reference)  └───────────────┘
//!                         │                                │
//!                         └────────────► ReportSink ◄──────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use ids_sim_core::{
//!     parse_events, parse_stats, run_detection, run_training, BaselineLoader, EventCatalog,
//!     Sampler,
//! };
//!
//! let (declared, rows) = parse_events("1\nLogins:D:0::2\n").unwrap();
//! let catalog = EventCatalog::from_rows(declared, &rows).unwrap();
//!
//! let (declared, rows) = parse_stats("1\nLogins:4:1.5\n").unwrap();
//! let baseline = BaselineLoader::advisory(&catalog).load(declared, &rows).unwrap();
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let mut sampler = Sampler::seeded(7);
//! let training = run_training(&mut sampler, &catalog, &baseline, start, 30).unwrap();
//! let detection = run_detection(
//!     &mut sampler,
//!     &catalog,
//!     &baseline,
//!     &training.reference_baseline(),
//!     start,
//!     7,
//! )
//! .unwrap();
//! println!("{} of 7 days flagged", detection.flagged());
//! ```

#![deny(unsafe_code)]

pub mod aggregate;
pub mod anomaly;
pub mod baseline;
pub mod catalog;
pub mod error;
pub mod parser;
pub mod records;
pub mod sampler;
pub mod simulation;
pub mod sink;

// ── Re-exports ──────────────────────────────────────────────────────────

pub use aggregate::{aggregate, AggregatedStat, Statistics};
pub use anomaly::{AnomalyScore, AnomalyScorer, AnomalyStatus, AnomalyVerdict};
pub use baseline::{Baseline, BaselineEntry, BaselineLoader, StatsRow, ValidationMode};
pub use catalog::{EventCatalog, EventDefinition, EventKind, EventRow, THRESHOLD_MULTIPLIER};
pub use error::{SimError, SimResult};
pub use parser::{parse_events, parse_stats};
pub use records::{round2, DailyRecord, EventValue};
pub use sampler::Sampler;
pub use simulation::{run_detection, run_training, DetectionRun, TrainingRun};
pub use sink::{InMemorySink, JsonFileSink, RecordKind, ReportFiles, ReportSink};
