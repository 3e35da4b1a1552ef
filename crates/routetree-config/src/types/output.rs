//! Result rendering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per query
    Json,
}

impl OutputFormat {
    pub const VARIANTS: &'static [&'static str] = &["text", "json"];
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = crate::error::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(crate::error::ConfigError::invalid_enum(
                "output.format",
                s,
                Self::VARIANTS,
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the minutes of every leg under a shortest path
    #[serde(default = "default_show_legs")]
    pub show_legs: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_legs: default_show_legs(),
        }
    }
}

impl crate::validation::Validate for OutputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        Ok(())
    }
}

fn default_show_legs() -> bool {
    true
}
