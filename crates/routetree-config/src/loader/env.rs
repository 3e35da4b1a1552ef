//! Environment variable configuration overlay
//!
//! Variables take the form `ROUTETREE_<section>_<field>=value`:
//! - `ROUTETREE_CATALOG_PATH=data/routes.json`
//! - `ROUTETREE_TREE_STRICT_SIDES=true`
//! - `ROUTETREE_OUTPUT_FORMAT=json`
//! - `ROUTETREE_LOGGING_LEVEL=debug`

use crate::{error::ConfigError, types::*, Config, Result};
use std::env;

pub const PREFIX: &str = "ROUTETREE_";

/// Parse configuration from environment variables
pub fn from_env() -> Result<Option<Config>> {
    from_vars(env::vars().filter(|(k, _)| k.starts_with(PREFIX)))
}

/// Builds an overlay from `(key, value)` pairs; unparsable entries are an error.
pub fn from_vars<I>(vars: I) -> Result<Option<Config>>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut config = Config::default();
    let mut found_any = false;

    for (key, value) in vars {
        found_any = true;
        apply_env_var(&mut config, &key, &value)?;
    }

    Ok(found_any.then_some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let stripped = key.strip_prefix(PREFIX).unwrap_or(key);

    let Some((section, field)) = stripped.split_once('_') else {
        return Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: "Expected format: ROUTETREE_<section>_<field>".to_string(),
        });
    };
    let section = section.to_lowercase();
    let field = field.to_lowercase();

    match section.as_str() {
        "catalog" => apply_catalog_var(&mut config.catalog, key, &field, value),
        "tree" => apply_tree_var(&mut config.tree, key, &field, value),
        "output" => apply_output_var(&mut config.output, key, &field, value),
        "logging" => apply_logging_var(&mut config.logging, key, &field, value),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!("Unknown section: {}", section),
        }),
    }
}

fn unknown_field(key: &str, field: &str) -> ConfigError {
    ConfigError::EnvVarError {
        var: key.to_string(),
        message: format!("Unknown field: {}", field),
    }
}

fn apply_catalog_var(config: &mut CatalogConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "path" => config.path = value.into(),
        "validate_on_load" => config.validate_on_load = parse_bool(key, value)?,
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn apply_tree_var(config: &mut TreeConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "strict_sides" => config.strict_sides = parse_bool(key, value)?,
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn apply_output_var(config: &mut OutputConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "format" => config.format = value.parse()?,
        "show_legs" => config.show_legs = parse_bool(key, value)?,
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn apply_logging_var(config: &mut LoggingConfig, key: &str, field: &str, value: &str) -> Result<()> {
    match field {
        "level" => config.level = value.trim().to_lowercase(),
        _ => return Err(unknown_field(key, field)),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: key.to_string(),
            message: format!(
                "Invalid boolean: {} (use true/false, 1/0, yes/no, on/off)",
                value
            ),
        }),
    }
}
