//! Configuration type definitions
//!
//! One struct per concern, each with its own defaults and validation.

pub mod catalog;
pub mod logging;
pub mod output;
pub mod tree;

pub use catalog::CatalogConfig;
pub use logging::LoggingConfig;
pub use output::{OutputConfig, OutputFormat};
pub use tree::TreeConfig;

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where routes are read from
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Structural strictness for route trees
    #[serde(default)]
    pub tree: TreeConfig,

    /// How query results are printed
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.catalog.validate()?;
        self.tree.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
