//! Log verbosity

use serde::{Deserialize, Serialize};

pub const LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl crate::validation::Validate for LoggingConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::validate_one_of("logging.level", &self.level, LEVELS)
    }
}

fn default_level() -> String {
    "warn".to_string()
}
