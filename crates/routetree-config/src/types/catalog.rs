//! Route catalog location

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Route catalog file (.yml, .yaml, .toml or .json)
    #[serde(default = "default_path")]
    pub path: Utf8PathBuf,

    /// Run structural validation on every route after loading
    #[serde(default = "default_validate_on_load")]
    pub validate_on_load: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            validate_on_load: default_validate_on_load(),
        }
    }
}

impl crate::validation::Validate for CatalogConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::error::ConfigError;
        use crate::validation::validate_not_empty;

        validate_not_empty("catalog.path", self.path.as_str())?;

        match self.path.extension() {
            Some("yml" | "yaml" | "toml" | "json") => Ok(()),
            other => Err(ConfigError::validation(
                "catalog.path",
                format!(
                    "unsupported extension {:?}, expected .yml, .yaml, .toml or .json",
                    other.unwrap_or("")
                ),
            )),
        }
    }
}

fn default_path() -> Utf8PathBuf {
    Utf8PathBuf::from("routes.yml")
}

fn default_validate_on_load() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unsupported_extension() {
        let config = CatalogConfig {
            path: Utf8PathBuf::from("routes.csv"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_path() {
        let config = CatalogConfig {
            path: Utf8PathBuf::from(""),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
