use thiserror::Error;

/// Errors from catalog/baseline validation, sampling, aggregation and reporting.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("format error: {0}")]
    Format(String),

    #[error("'{0}' is present in the stats input but missing from the event catalog")]
    UnknownEvent(String),

    #[error("'{0}' appears more than once in the stats input")]
    DuplicateEvent(String),

    #[error("'{event}' has a mean ({mean}) {side} its {bound_name} value ({bound})")]
    OutOfRange {
        event: String,
        mean: f64,
        bound: f64,
        side: &'static str,
        bound_name: &'static str,
    },

    #[error("cannot aggregate an empty day sequence")]
    EmptyInput,

    #[error("no baseline entry for event '{0}'")]
    MissingBaseline(String),

    #[error("report i/o error: {0}")]
    Io(String),

    #[error("report serialization error: {0}")]
    Serialization(String),
}

impl SimError {
    /// Mean below the event's configured minimum.
    pub fn below_min(event: &str, mean: f64, min: f64) -> Self {
        SimError::OutOfRange {
            event: event.to_string(),
            mean,
            bound: min,
            side: "below",
            bound_name: "minimum",
        }
    }

    /// Mean above the event's configured maximum.
    pub fn above_max(event: &str, mean: f64, max: f64) -> Self {
        SimError::OutOfRange {
            event: event.to_string(),
            mean,
            bound: max,
            side: "above",
            bound_name: "maximum",
        }
    }

    /// Whether this error came from malformed or inconsistent configuration,
    /// as opposed to a failure writing reports.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            SimError::Format(_)
                | SimError::UnknownEvent(_)
                | SimError::DuplicateEvent(_)
                | SimError::OutOfRange { .. }
                | SimError::MissingBaseline(_)
        )
    }
}

impl From<std::io::Error> for SimError {
    fn from(e: std::io::Error) -> Self {
        SimError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(e: serde_json::Error) -> Self {
        SimError::Serialization(e.to_string())
    }
}

/// Convenience type alias for simulator results.
pub type SimResult<T> = Result<T, SimError>;
