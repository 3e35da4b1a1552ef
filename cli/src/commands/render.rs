use super::QueryError;
use anyhow::Result;
use routetree_config::OutputFormat;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

/// Writes a successful result as text or pretty JSON.
pub fn report<R: Serialize + Display>(
    format: OutputFormat,
    out: &mut impl Write,
    report: &R,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", report)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
    }
    Ok(())
}

/// Writes a user-facing query error. These are expected outcomes, not failures.
pub fn query_error(format: OutputFormat, out: &mut impl Write, err: &QueryError) -> Result<()> {
    debug!(error = %err, "query produced no result");
    match format {
        OutputFormat::Text => writeln!(out, "{}", err)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?,
    }
    Ok(())
}

pub fn outcome<R: Serialize + Display>(
    format: OutputFormat,
    out: &mut impl Write,
    outcome: Result<R, QueryError>,
) -> Result<()> {
    match outcome {
        Ok(r) => report(format, out, &r),
        Err(e) => query_error(format, out, &e),
    }
}
