//! TOML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from TOML string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from TOML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    toml::from_str(content).map_err(|e| ConfigError::from_toml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_sections() {
        let toml = r#"
[catalog]
path = "data/routes.toml"
validate_on_load = false

[tree]
strict_sides = true
"#;
        let config = parse(toml).unwrap();
        assert_eq!(config.catalog.path.as_str(), "data/routes.toml");
        assert!(!config.catalog.validate_on_load);
        assert!(config.tree.strict_sides);
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse("[tree]\nstrict_sides = maybe").is_err());
    }
}
