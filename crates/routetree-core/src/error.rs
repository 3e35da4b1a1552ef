//! Error types for route queries, validation and catalog loading

use crate::models::{NodeId, Side};
use std::path::PathBuf;
use thiserror::Error;

/// Result type for route queries
pub type Result<T> = std::result::Result<T, RouteError>;

/// Ways a route's parent links can fail to form a proper binary tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("parent links form a cycle through node {node}")]
    Cycle { node: NodeId },

    #[error("node id {node} appears more than once")]
    DuplicateNodeId { node: NodeId },

    #[error("position {position} is shared by nodes {first} and {second}")]
    DuplicatePosition {
        position: u32,
        first: NodeId,
        second: NodeId,
    },

    #[error("node {node} references parent {parent}, which is not part of the route")]
    ForeignParent { node: NodeId, parent: NodeId },

    #[error("node {parent} has more than one {side} child ({first} and {second})")]
    DuplicateSide {
        parent: NodeId,
        side: Side,
        first: NodeId,
        second: NodeId,
    },

    #[error("node {node} is marked as a {side} child but has no parent")]
    SideWithoutParent { node: NodeId, side: Side },
}

/// Outcomes of a query that are reported to the caller rather than a result
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The node id does not belong to the route being queried
    #[error("node {0} is not part of this route")]
    UnknownNode(NodeId),

    /// Both stops exist but no chain of parent/child links connects them
    #[error("No path found between {from} and {to} in {route}.")]
    NoPath {
        from: String,
        to: String,
        route: String,
    },

    #[error("malformed route tree: {0}")]
    Structural(#[from] StructuralError),
}

/// Errors raised while reading or checking a route catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read route catalog: {path}\n{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown catalog format for file: {path}\nSupported formats: .yml, .yaml, .toml, .json")]
    UnknownFormat { path: PathBuf },

    #[error("Failed to parse route catalog{location}:\n{message}")]
    Parse { location: String, message: String },

    #[error("route name '{0}' is used more than once")]
    DuplicateRouteName(String),

    #[error("node id {node} is used by both '{first}' and '{second}'")]
    SharedNodeId {
        node: NodeId,
        first: String,
        second: String,
    },

    #[error("route '{route}' is invalid: {source}")]
    InvalidRoute {
        route: String,
        #[source]
        source: RouteError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_message_names_airports_and_route() {
        let err = RouteError::NoPath {
            from: "JFK".to_string(),
            to: "NRT".to_string(),
            route: "Pacific".to_string(),
        };
        assert_eq!(err.to_string(), "No path found between JFK and NRT in Pacific.");
    }

    #[test]
    fn structural_errors_convert() {
        let err: RouteError = StructuralError::Cycle { node: NodeId(4) }.into();
        assert!(err.to_string().contains("cycle through node 4"));
    }
}
