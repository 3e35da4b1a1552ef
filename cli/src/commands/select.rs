use super::QueryContext;
use clap::Args;
use routetree_core::{NodeId, Route, RouteError, RouteNode};
use thiserror::Error;

/// Picks a stop either by its id or by route and airport code.
#[derive(Args, Debug, Clone, Default)]
pub struct NodeArgs {
    /// Stop id
    #[arg(long, conflicts_with_all = ["route", "airport"], required_unless_present = "airport")]
    pub node: Option<u64>,

    /// Route name or id, used with --airport
    #[arg(long, requires = "airport")]
    pub route: Option<String>,

    /// Airport code within --route (case-insensitive)
    #[arg(long, requires = "route")]
    pub airport: Option<String>,
}

/// Query outcomes shown to the user in place of a result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("No stop with id {0}.")]
    UnknownNode(u64),

    #[error("Route '{0}' not found.")]
    UnknownRoute(String),

    #[error("Please select a stop.")]
    MissingNode,

    #[error("Please enter both airport codes.")]
    MissingAirports,

    #[error("Airport {airport} not found in {route}.")]
    AirportNotInRoute { airport: String, route: String },

    #[error("One or both airports not found in this route.")]
    AirportsNotInRoute,

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl QueryContext {
    pub fn find_route(&self, key: &str) -> Result<&Route, QueryError> {
        self.catalog
            .route(key)
            .ok_or_else(|| QueryError::UnknownRoute(key.trim().to_string()))
    }

    /// Resolves `args` to a stop and the route that owns it.
    pub fn select_node(&self, args: &NodeArgs) -> Result<(&Route, &RouteNode), QueryError> {
        match (args.node, args.route.as_deref(), args.airport.as_deref()) {
            (Some(id), _, _) => self
                .catalog
                .node(NodeId(id))
                .ok_or(QueryError::UnknownNode(id)),
            (None, Some(route), Some(airport)) => {
                let route = self.find_route(route)?;
                let node = route.find_airport(airport).ok_or_else(|| {
                    QueryError::AirportNotInRoute {
                        airport: normalize_code(airport),
                        route: route.name.clone(),
                    }
                })?;
                Ok((route, node))
            }
            _ => Err(QueryError::MissingNode),
        }
    }
}

/// Airport codes are compared trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
