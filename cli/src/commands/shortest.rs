use super::select::{normalize_code, QueryError};
use super::{render, QueryContext};
use anyhow::Result;
use clap::Args;
use itertools::Itertools;
use routetree_core::{shortest_path, RouteNode};
use serde::Serialize;
use std::fmt;
use std::io::Write;

#[derive(Args, Debug, Clone)]
pub struct ShortestArgs {
    /// Route name or id
    #[arg(long)]
    pub route: String,

    /// Departure airport code
    #[arg(long)]
    pub from: String,

    /// Arrival airport code
    #[arg(long)]
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub minutes: u32,
}

#[derive(Debug, Serialize)]
pub struct ShortestReport<'a> {
    pub route: &'a str,
    /// Total minutes
    pub distance: u64,
    pub stops: Vec<&'a RouteNode>,
    pub legs: Vec<Leg<'a>>,
    #[serde(skip)]
    pub show_legs: bool,
}

impl fmt::Display for ShortestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, {} min",
            self.route,
            self.stops.iter().map(|n| n.airport_code.as_str()).join(" → "),
            self.distance
        )?;
        if self.show_legs {
            for leg in &self.legs {
                write!(f, "\n  {} → {}  {} min", leg.from, leg.to, leg.minutes)?;
            }
        }
        Ok(())
    }
}

pub fn shortest_report<'a>(
    ctx: &'a QueryContext,
    args: &ShortestArgs,
) -> Result<ShortestReport<'a>, QueryError> {
    let from = normalize_code(&args.from);
    let to = normalize_code(&args.to);
    if from.is_empty() || to.is_empty() {
        return Err(QueryError::MissingAirports);
    }

    let route = ctx.find_route(&args.route)?;
    let (Some(start), Some(end)) = (route.find_airport(&from), route.find_airport(&to)) else {
        return Err(QueryError::AirportsNotInRoute);
    };

    let path = shortest_path(route, start.id, end.id)?;
    let legs = path
        .legs()
        .map(|(a, b, minutes)| Leg {
            from: &a.airport_code,
            to: &b.airport_code,
            minutes,
        })
        .collect();

    Ok(ShortestReport {
        route: &route.name,
        distance: path.distance,
        stops: path.nodes,
        legs,
        show_legs: ctx.config.output.show_legs,
    })
}

pub fn handle_shortest(ctx: &QueryContext, args: &ShortestArgs, out: &mut impl Write) -> Result<()> {
    render::outcome(ctx.config.output.format, out, shortest_report(ctx, args))
}
