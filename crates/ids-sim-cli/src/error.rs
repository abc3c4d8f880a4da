//! CLI error types

use std::path::PathBuf;

use ids_sim_core::SimError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Validation, simulation or report failure from the core
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read
    #[error("Cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failed (closed stdin, no terminal)
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Invalid command-line usage
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// Console rendering error
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Whether an interactive session can recover by asking for another file.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CliError::Sim(e) => e.is_fatal_config(),
            CliError::Io { .. } => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Output(e.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
