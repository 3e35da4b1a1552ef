//! Configuration loading from various sources

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};

/// Format for configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Configuration source for layered loading
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    /// Explicit config object, e.g. from command-line flags
    Explicit(Config),
}

/// Default file names, checked in order
pub const DEFAULT_PATHS: &[&str] = &[
    ".routetree.toml",
    ".routetree.yml",
    ".routetree.yaml",
    ".routetree.json",
];

/// Builder for loading and merging configurations
///
/// Precedence: defaults < file < environment < explicit overrides
///
/// ```no_run
/// use routetree_config::loader::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".routetree.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), routetree_config::ConfigError>(())
/// ```
pub struct ConfigBuilder {
    sources: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.sources
            .push(ConfigSource::File(path.as_ref().to_path_buf()));
        self
    }

    /// Adds the first default file found in `dir`, if any
    pub fn with_default_file_in(self, dir: &Path) -> Self {
        match DEFAULT_PATHS.iter().map(|p| dir.join(p)).find(|p| p.exists()) {
            Some(path) => self.with_file(path),
            None => self,
        }
    }

    pub fn with_env(mut self) -> Self {
        self.sources.push(ConfigSource::Environment);
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.sources.push(ConfigSource::Explicit(config));
        self
    }

    /// Merges all sources in order, later ones winning, then validates.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        for source in self.sources {
            match source {
                ConfigSource::File(path) => {
                    let file_config = file::load_from_file(&path)?;
                    config = merge::merge(config, file_config);
                }
                ConfigSource::Environment => {
                    if let Some(env_config) = env::from_env()? {
                        config = merge::merge(config, env_config);
                    }
                }
                ConfigSource::Explicit(explicit_config) => {
                    config = merge::merge(config, explicit_config);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        Self::new().with_file(path).build()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the first default file in the working directory, if any, with
    /// the environment overlay applied. Falls back to defaults.
    pub fn load() -> Result<Self> {
        ConfigBuilder::new()
            .with_default_file_in(Path::new("."))
            .with_env()
            .build()
    }

    /// Loads a specific file with the environment overlay applied.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
