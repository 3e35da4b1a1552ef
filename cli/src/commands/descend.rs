use super::select::{NodeArgs, QueryError};
use super::{render, QueryContext};
use anyhow::Result;
use routetree_core::{descend, RouteNode, Side};
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct DescendReport<'a> {
    pub route: &'a str,
    pub side: Side,
    pub start: &'a RouteNode,
    pub end: &'a RouteNode,
}

impl fmt::Display for DescendReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.id == self.end.id {
            write!(f, "{} has no {} child in {}", self.start, self.side, self.route)
        } else {
            write!(
                f,
                "Last {} stop from {} in {}: {}",
                self.side, self.start, self.route, self.end
            )
        }
    }
}

pub fn descend_report<'a>(
    ctx: &'a QueryContext,
    args: &NodeArgs,
    side: Side,
) -> Result<DescendReport<'a>, QueryError> {
    let (route, start) = ctx.select_node(args)?;
    let end = descend(route, start.id, side)?;
    Ok(DescendReport {
        route: &route.name,
        side,
        start,
        end,
    })
}

pub fn handle_descend(
    ctx: &QueryContext,
    args: &NodeArgs,
    side: Side,
    out: &mut impl Write,
) -> Result<()> {
    render::outcome(ctx.config.output.format, out, descend_report(ctx, args, side))
}
