//! Event definition types.
//!
//! Key types: `EventKind` (integral vs fractional sampling), `EventRow`
//! (one tokenized catalog line), `EventDefinition` (validated, immutable).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::records::round2;

// ── Event Kind ──────────────────────────────────────────────────────────

/// Sampling kind of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Integral counts (e.g. logins per day). Sampled values are truncated toward zero.
    Discrete,
    /// Fractional magnitudes (e.g. minutes online). Sampled values keep two decimals.
    Continuous,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discrete => write!(f, "discrete"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

impl FromStr for EventKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "discrete" => Ok(Self::Discrete),
            "c" | "continuous" => Ok(Self::Continuous),
            other => Err(SimError::Format(format!(
                "unrecognized event kind '{}' (expected D or C)",
                other
            ))),
        }
    }
}

// ── Raw Row ─────────────────────────────────────────────────────────────

/// One catalog row as supplied by the configuration loader, before validation.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRow {
    pub name: String,
    /// Kind code as written (`D`, `C`, or the long forms).
    pub kind: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub weight: i64,
}

impl EventRow {
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
        weight: i64,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            min,
            max,
            weight,
        }
    }
}

// ── Event Definition ────────────────────────────────────────────────────

/// A validated event type.
///
/// Invariants: `weight >= 1`, finite bounds with `min <= max` when both
/// exist, and bounds on the event's own grid (whole numbers for discrete
/// events, two decimals for continuous ones). Only `from_row` builds one.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventDefinition {
    name: String,
    kind: EventKind,
    min: Option<f64>,
    max: Option<f64>,
    weight: u32,
}

impl EventDefinition {
    /// Validate a raw row into a definition.
    pub fn from_row(row: &EventRow) -> Result<Self, SimError> {
        let name = row.name.trim();
        if name.is_empty() {
            return Err(SimError::Format("event name must not be empty".into()));
        }

        let kind: EventKind = row.kind.parse()?;

        if row.weight < 1 {
            return Err(SimError::Format(format!(
                "'{}' has weight {} (must be a positive integer)",
                name, row.weight
            )));
        }
        let weight = u32::try_from(row.weight).map_err(|_| {
            SimError::Format(format!("'{}' has weight {} (too large)", name, row.weight))
        })?;

        for (bound, label) in [(row.min, "minimum"), (row.max, "maximum")] {
            if let Some(b) = bound {
                check_bound(name, kind, label, b)?;
            }
        }

        if let (Some(min), Some(max)) = (row.min, row.max) {
            if min > max {
                return Err(SimError::Format(format!(
                    "'{}' has minimum {} greater than maximum {}",
                    name, min, max
                )));
            }
        }

        Ok(Self {
            name: name.to_string(),
            kind,
            min: row.min,
            max: row.max,
            weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Lower bound; `None` means unbounded below.
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound; `None` means unbounded above.
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Contribution multiplier in the anomaly score.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Clamp a value into `[min, max]`, one-sided when only one bound exists.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut v = value;
        if let Some(min) = self.min {
            v = v.max(min);
        }
        if let Some(max) = self.max {
            v = v.min(max);
        }
        v
    }

    pub fn is_discrete(&self) -> bool {
        self.kind == EventKind::Discrete
    }
}

/// A bound must be finite and representable by the kind's output rounding,
/// so truncating or rounding a clamped sample cannot leave `[min, max]`.
fn check_bound(name: &str, kind: EventKind, label: &str, bound: f64) -> Result<(), SimError> {
    if !bound.is_finite() {
        return Err(SimError::Format(format!(
            "'{}' has a non-finite {} ({})",
            name, label, bound
        )));
    }
    match kind {
        EventKind::Discrete if bound.fract() != 0.0 => Err(SimError::Format(format!(
            "'{}' is discrete but its {} ({}) is not a whole number",
            name, label, bound
        ))),
        EventKind::Continuous if round2(bound) != bound => Err(SimError::Format(format!(
            "'{}' is continuous but its {} ({}) has more than two decimals",
            name, label, bound
        ))),
        _ => Ok(()),
    }
}
