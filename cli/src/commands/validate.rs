use super::QueryContext;
use anyhow::{bail, Result};
use routetree_config::OutputFormat;
use serde::Serialize;
use std::io::Write;
use tracing::warn;

#[derive(Debug, Serialize)]
struct RouteCheck<'a> {
    route: &'a str,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    routes: Vec<RouteCheck<'a>>,
    catalog_error: Option<String>,
}

/// Checks each route, then cross-route constraints. Fails when anything is invalid.
pub fn handle_validate(ctx: &QueryContext, strict: bool, out: &mut impl Write) -> Result<()> {
    let mut options = ctx.validation_options();
    options.strict_sides |= strict;

    let routes: Vec<RouteCheck<'_>> = ctx
        .catalog
        .routes
        .iter()
        .map(|route| RouteCheck {
            route: &route.name,
            error: route.validate(&options).err().map(|e| e.to_string()),
        })
        .collect();

    let invalid = routes.iter().filter(|c| c.error.is_some()).count();
    let catalog_error = if invalid == 0 {
        ctx.catalog.validate(&options).err().map(|e| e.to_string())
    } else {
        None
    };

    let report = ValidationReport {
        valid: invalid == 0 && catalog_error.is_none(),
        routes,
        catalog_error,
    };

    match ctx.config.output.format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => {
            for check in &report.routes {
                match &check.error {
                    None => writeln!(out, "{}: ok", check.route)?,
                    Some(error) => writeln!(out, "{}: {}", check.route, error)?,
                }
            }
            if let Some(error) = &report.catalog_error {
                writeln!(out, "catalog: {}", error)?;
            }
        }
    }

    if !report.valid {
        warn!(invalid_routes = invalid, "catalog failed validation");
        bail!("route catalog {} is invalid", ctx.config.catalog.path);
    }
    Ok(())
}
