//! Validation trait and helpers for configuration types

use crate::error::{ConfigError, Result};

/// Trait for validating configuration values
///
/// Implement this for any config type that needs checks beyond what the
/// type system gives. Errors should name the offending field.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that `value` is one of `options`, case-insensitively
pub fn validate_one_of(field: impl Into<String>, value: &str, options: &[&str]) -> Result<()> {
    if options.iter().any(|opt| opt.eq_ignore_ascii_case(value)) {
        return Ok(());
    }
    Err(ConfigError::invalid_enum(field, value, options))
}

/// Checks that a string setting is not blank
pub fn validate_not_empty(field: impl Into<String>, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_valid() {
        assert!(validate_one_of("test", "Debug", &["info", "debug"]).is_ok());
    }

    #[test]
    fn test_one_of_invalid() {
        assert!(validate_one_of("test", "verbose", &["info", "debug"]).is_err());
    }

    #[test]
    fn test_not_empty() {
        assert!(validate_not_empty("test", "routes.yml").is_ok());
        assert!(validate_not_empty("test", "  ").is_err());
    }
}
