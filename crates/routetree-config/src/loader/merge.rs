//! Configuration merging logic
//!
//! Fields of the overlay that differ from their defaults replace the base.

use crate::{types::*, Config};

/// Merge two configurations, with `overlay` taking precedence
pub fn merge(mut base: Config, overlay: Config) -> Config {
    base.catalog = merge_catalog(base.catalog, overlay.catalog);
    base.tree = merge_tree(base.tree, overlay.tree);
    base.output = merge_output(base.output, overlay.output);
    base.logging = merge_logging(base.logging, overlay.logging);
    base
}

fn pick<T: PartialEq>(base: T, overlay: T, default: T) -> T {
    if overlay != default {
        overlay
    } else {
        base
    }
}

fn merge_catalog(base: CatalogConfig, overlay: CatalogConfig) -> CatalogConfig {
    let default = CatalogConfig::default();
    CatalogConfig {
        path: pick(base.path, overlay.path, default.path),
        validate_on_load: pick(
            base.validate_on_load,
            overlay.validate_on_load,
            default.validate_on_load,
        ),
    }
}

fn merge_tree(base: TreeConfig, overlay: TreeConfig) -> TreeConfig {
    let default = TreeConfig::default();
    TreeConfig {
        strict_sides: pick(base.strict_sides, overlay.strict_sides, default.strict_sides),
    }
}

fn merge_output(base: OutputConfig, overlay: OutputConfig) -> OutputConfig {
    let default = OutputConfig::default();
    OutputConfig {
        format: pick(base.format, overlay.format, default.format),
        show_legs: pick(base.show_legs, overlay.show_legs, default.show_legs),
    }
}

fn merge_logging(base: LoggingConfig, overlay: LoggingConfig) -> LoggingConfig {
    let default = LoggingConfig::default();
    LoggingConfig {
        level: pick(base.level, overlay.level, default.level),
    }
}
