//! Output formatting utilities

use colored::*;
use ids_sim_core::{AnomalyVerdict, Statistics};
use serde::{Deserialize, Serialize};
use tabled::{Table, Tabled};

use crate::error::CliResult;

/// Output format for console results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Table row for aggregated statistics
#[derive(Debug, Serialize, Tabled)]
pub struct StatRow {
    /// Event name
    event: String,
    /// Sum over the period
    total: f64,
    /// Mean per day
    mean: f64,
    /// Population standard deviation
    stddev: f64,
}

impl StatRow {
    pub fn from_statistics(stats: &Statistics) -> Vec<Self> {
        stats
            .iter()
            .map(|(name, s)| Self {
                event: name.clone(),
                total: s.total,
                mean: s.mean,
                stddev: s.stddev,
            })
            .collect()
    }
}

/// Table row for a verdict
#[derive(Debug, Serialize, Tabled)]
pub struct VerdictRow {
    date: String,
    #[serde(rename = "anomaly counter")]
    #[tabled(rename = "anomaly counter")]
    score: String,
    threshold: f64,
    status: String,
}

impl From<&AnomalyVerdict> for VerdictRow {
    fn from(v: &AnomalyVerdict) -> Self {
        Self {
            date: v.date.to_string(),
            score: format!("{:.2}", v.score),
            threshold: v.threshold,
            status: v.status.to_string(),
        }
    }
}

/// Verdict row with the per-event contributions behind the score
#[derive(Debug, Serialize, Tabled)]
pub struct ExplainedVerdictRow {
    date: String,
    #[serde(rename = "anomaly counter")]
    #[tabled(rename = "anomaly counter")]
    score: String,
    threshold: f64,
    status: String,
    contributions: String,
}

impl From<&AnomalyVerdict> for ExplainedVerdictRow {
    fn from(v: &AnomalyVerdict) -> Self {
        let contributions = v
            .contributions
            .iter()
            .map(|(name, c)| format!("{}={:.2}", name, c))
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            date: v.date.to_string(),
            score: format!("{:.2}", v.score),
            threshold: v.threshold,
            status: v.status.to_string(),
            contributions,
        }
    }
}

/// Print a vector of items in the specified format
pub fn print_output<T: Serialize + Tabled>(data: Vec<T>, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No results".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&data)?);
        }
    }
    Ok(())
}

/// Print verdicts, with contributions when `explain` is set
pub fn print_verdicts(verdicts: &[AnomalyVerdict], explain: bool, format: OutputFormat) -> CliResult<()> {
    if explain {
        print_output(verdicts.iter().map(ExplainedVerdictRow::from).collect(), format)
    } else {
        print_output(verdicts.iter().map(VerdictRow::from).collect(), format)
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
