use super::Cli;
use anyhow::{anyhow, Context, Result};
use routetree_config::{Config, ConfigBuilder, ErrorFormatter, Validate};
use routetree_core::{RouteCatalog, ValidationOptions};
use std::path::Path;
use tracing::info;

/// Resolves configuration: defaults, config file, environment, then flags.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let builder = match &cli.config {
        Some(path) => ConfigBuilder::new().with_file(path),
        None => ConfigBuilder::new().with_default_file_in(Path::new(".")),
    };
    let mut config = builder
        .with_env()
        .build()
        .map_err(|e| anyhow!("{}", ErrorFormatter::new(e)))?;

    if let Some(path) = &cli.catalog {
        config.catalog.path = path
            .to_str()
            .context("catalog path must be valid UTF-8")?
            .into();
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    config
        .validate()
        .map_err(|e| anyhow!("{}", ErrorFormatter::new(e)))?;

    Ok(config)
}

/// Configuration plus the route catalog it points at.
pub struct QueryContext {
    pub config: Config,
    pub catalog: RouteCatalog,
}

impl QueryContext {
    pub fn new(config: Config, catalog: RouteCatalog) -> Self {
        Self { config, catalog }
    }

    /// Reads the catalog and, when `catalog.validate_on_load` is set, rejects
    /// it on the first structural problem.
    pub fn load(config: Config) -> Result<Self> {
        let ctx = Self::load_unchecked(config)?;
        if ctx.config.catalog.validate_on_load {
            ctx.catalog
                .validate(&ctx.validation_options())
                .with_context(|| format!("invalid route catalog {}", ctx.config.catalog.path))?;
        }
        Ok(ctx)
    }

    pub fn load_unchecked(config: Config) -> Result<Self> {
        let catalog = RouteCatalog::load(config.catalog.path.as_std_path())
            .with_context(|| format!("failed to load route catalog {}", config.catalog.path))?;
        info!(
            path = %config.catalog.path,
            routes = catalog.routes.len(),
            "route catalog ready"
        );
        Ok(Self::new(config, catalog))
    }

    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            strict_sides: self.config.tree.strict_sides,
        }
    }
}
