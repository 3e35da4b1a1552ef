//! YAML format parser

use crate::{error::ConfigError, Config, Result};

/// Parse configuration from YAML string
pub fn parse(content: &str) -> Result<Config> {
    parse_with_path(content, None)
}

/// Parse configuration from YAML string with file path for better errors
pub fn parse_with_path(content: &str, path: Option<&str>) -> Result<Config> {
    serde_yaml::from_str(content).map_err(|e| ConfigError::from_yaml_error(e, content, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
output:
  format: json
"#;
        let config = parse(yaml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_legs);
    }

    #[test]
    fn test_parse_empty_yaml() {
        let config = parse("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_invalid_yaml_shows_line() {
        let yaml = "output:\n  format: xml\n";
        let err = parse_with_path(yaml, Some("cfg.yml")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("in cfg.yml"));
        assert!(message.contains("xml"));
    }
}
