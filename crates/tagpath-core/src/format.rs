//! Output format handling for tagpath
//!
//! - human: readable, concise output for terminal use
//! - json: stable, machine-readable JSON
//! - records: line-oriented format for scripts and grep

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagpathError;
use crate::item::Difficulty;

/// Output format for tagpath commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output for line-oriented consumers
    Records,
}

impl FromStr for OutputFormat {
    type Err = TagpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(TagpathError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Display label for an optional difficulty
pub fn difficulty_label(difficulty: Option<Difficulty>) -> &'static str {
    difficulty.map_or("Unknown", Difficulty::as_str)
}

/// Acceptance rate as shown to humans, e.g. `52.8%`
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}

/// Distance as shown to humans; infinite distances read `inf`
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.4}", distance)
    }
}
