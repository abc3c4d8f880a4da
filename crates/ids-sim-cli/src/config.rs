//! Configuration for ids-sim

use std::path::{Path, PathBuf};

use ids_sim_core::ReportFiles;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Main simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Directory the report files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Fixed RNG seed; fresh entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Prompt for missing inputs and re-prompt on invalid files
    #[serde(default)]
    pub interactive: bool,

    /// Console output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report file names
    #[serde(default)]
    pub files: ReportFiles,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            seed: None,
            interactive: false,
            format: OutputFormat::default(),
            logging: LoggingConfig::default(),
            files: ReportFiles::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl SimConfig {
    /// Load configuration from file, falling back to defaults when it does not exist
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => match Self::default_config_path() {
                Some(p) => p,
                None => return Ok(SimConfig::default()),
            },
        };

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            Ok(SimConfig::default())
        }
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// `<config_dir>/ids-sim/config.toml`
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ids-sim").join("config.toml"))
    }
}

// Default value helpers
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "info".to_string()
}
