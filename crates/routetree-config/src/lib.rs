//! Configuration management for routetree
//!
//! Layered loading with validation:
//! - Multiple formats (YAML, TOML, JSON)
//! - Helpful parse and validation errors
//! - Merging of file, environment and explicit overrides
//!
//! # Example
//!
//! ```no_run
//! use routetree_config::Config;
//!
//! // Load from default location (.routetree.{toml,yml,yaml,json})
//! let config = Config::load()?;
//!
//! // Or from a specific file
//! let config = Config::from_file("path/to/config.toml")?;
//!
//! let catalog = &config.catalog.path;
//! let strict = config.tree.strict_sides;
//! # Ok::<(), routetree_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;
pub use validation::Validate;
