//! Event catalog: validated definitions of every simulated event type.
//!
//! ```text
//!   EventRow (name, kind, min?, max?, weight)
//!       │  EventDefinition::from_row   (kind, weight, min ≤ max)
//!       ▼
//!   EventCatalog  name → EventDefinition   (last definition wins)
//! ```

pub mod registry;
pub mod types;

pub use registry::EventCatalog;
pub use types::{EventDefinition, EventKind, EventRow};

/// The anomaly threshold is this multiple of the summed event weights.
pub const THRESHOLD_MULTIPLIER: f64 = 2.0;
