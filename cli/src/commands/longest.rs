use super::select::{NodeArgs, QueryError};
use super::{render, QueryContext};
use anyhow::Result;
use routetree_core::{longest_from, RouteNode};
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct LongestReport<'a> {
    pub route: &'a str,
    pub start: &'a RouteNode,
    /// Minutes from `start` to `end`
    pub distance: u64,
    pub end: &'a RouteNode,
}

impl fmt::Display for LongestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Farthest stop from {} in {}: {}, {} min",
            self.start, self.route, self.end, self.distance
        )
    }
}

pub fn longest_report<'a>(
    ctx: &'a QueryContext,
    args: &NodeArgs,
) -> Result<LongestReport<'a>, QueryError> {
    let (route, start) = ctx.select_node(args)?;
    let longest = longest_from(route, start.id)?;
    Ok(LongestReport {
        route: &route.name,
        start,
        distance: longest.distance,
        end: longest.node,
    })
}

pub fn handle_longest(ctx: &QueryContext, args: &NodeArgs, out: &mut impl Write) -> Result<()> {
    render::outcome(ctx.config.output.format, out, longest_report(ctx, args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::select::tests::sample_context;
    use routetree_config::OutputFormat;

    #[test]
    fn reports_farthest_stop() {
        let ctx = sample_context();
        let args = NodeArgs {
            node: None,
            route: Some("1".to_string()),
            airport: Some("jfk".to_string()),
        };
        let report = longest_report(&ctx, &args).unwrap();
        assert_eq!(report.distance, 420);
        assert_eq!(report.end.airport_code, "SEA");
    }

    #[test]
    fn json_output_carries_distance_and_stop() {
        let mut ctx = sample_context();
        ctx.config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        let args = NodeArgs {
            node: Some(10),
            ..Default::default()
        };
        handle_longest(&ctx, &args, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["distance"], 0);
        assert_eq!(value["end"]["airport_code"], "HNL");
        assert_eq!(value["route"], "Islands");
    }
}
