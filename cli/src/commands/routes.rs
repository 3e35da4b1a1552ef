use super::QueryContext;
use anyhow::Result;
use routetree_config::OutputFormat;
use routetree_core::RouteNode;
use std::io::Write;

/// Lists every route with its stops in position order.
pub fn handle_routes(ctx: &QueryContext, out: &mut impl Write) -> Result<()> {
    if ctx.config.output.format == OutputFormat::Json {
        writeln!(out, "{}", serde_json::to_string_pretty(&ctx.catalog)?)?;
        return Ok(());
    }

    if ctx.catalog.routes.is_empty() {
        writeln!(out, "No routes found in {}", ctx.config.catalog.path)?;
        return Ok(());
    }

    for route in &ctx.catalog.routes {
        writeln!(out, "{} (#{}), {} stops", route.name, route.id, route.nodes.len())?;
        for node in &route.nodes {
            writeln!(out, "  {:>4}  {:<5} {}", format!("#{}", node.id), node.airport_code, placement(node))?;
        }
    }
    Ok(())
}

fn placement(node: &RouteNode) -> String {
    match (node.parent, node.side) {
        (None, _) => "root".to_string(),
        (Some(parent), Some(side)) => format!("{} of #{}, {} min", side, parent, node.duration),
        (Some(parent), None) => format!("child of #{}, {} min", parent, node.duration),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select::tests::sample_context;

    #[test]
    fn lists_routes_and_stops() {
        let ctx = sample_context();
        let mut out = Vec::new();
        handle_routes(&ctx, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("West Coast (#1), 4 stops"));
        assert!(text.contains("  #2  LAX   left of #1, 300 min"));
        assert!(text.contains("  #10  HNL   root"));
    }

    #[test]
    fn json_lists_catalog() {
        let mut ctx = sample_context();
        ctx.config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        handle_routes(&ctx, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["routes"].as_array().map(Vec::len), Some(2));
    }
}
