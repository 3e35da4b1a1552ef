use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a stop, unique across a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// Child slot a stop occupies under its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid side '{0}', expected 'left' or 'right'")]
pub struct ParseSideError(pub String);

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(ParseSideError(s.to_string())),
        }
    }
}

/// One stop of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    pub id: NodeId,
    pub airport_code: String,
    /// Display ordering within the route. Also the enumeration order for children.
    pub position: u32,
    /// Travel time from the parent stop, in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
}

impl RouteNode {
    pub fn root(id: u64, airport_code: impl Into<String>, position: u32) -> Self {
        Self {
            id: NodeId(id),
            airport_code: airport_code.into(),
            position,
            duration: 0,
            parent: None,
            side: None,
        }
    }

    pub fn child(
        id: u64,
        airport_code: impl Into<String>,
        position: u32,
        parent: u64,
        side: Option<Side>,
        duration: u32,
    ) -> Self {
        Self {
            id: NodeId(id),
            airport_code: airport_code.into(),
            position,
            duration,
            parent: Some(NodeId(parent)),
            side,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl fmt::Display for RouteNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.airport_code, self.id)
    }
}

/// A named tree of stops. Owns its nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<RouteNode>,
}

impl Route {
    /// Builds a route with its nodes in position order.
    pub fn new(id: u64, name: impl Into<String>, nodes: Vec<RouteNode>) -> Self {
        let mut route = Self {
            id,
            name: name.into(),
            nodes,
        };
        route.sort_nodes();
        route
    }

    /// Stable sort, so equal positions keep their input order.
    pub fn sort_nodes(&mut self) {
        self.nodes.sort_by_key(|n| n.position);
    }

    pub fn node(&self, id: NodeId) -> Option<&RouteNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn roots(&self) -> impl Iterator<Item = &RouteNode> {
        self.nodes.iter().filter(|n| n.is_root())
    }

    /// Case-insensitive airport lookup. Surrounding whitespace is ignored and
    /// the lowest position wins when a code occurs more than once.
    pub fn find_airport(&self, code: &str) -> Option<&RouteNode> {
        let needle = code.trim();
        if needle.is_empty() {
            return None;
        }
        self.nodes
            .iter()
            .filter(|n| n.airport_code.trim().eq_ignore_ascii_case(needle))
            .min_by_key(|n| n.position)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_parses_case_insensitively() {
        assert_eq!("Left".parse::<Side>().unwrap(), Side::Left);
        assert_eq!(" right ".parse::<Side>().unwrap(), Side::Right);
        assert!("up".parse::<Side>().is_err());
    }

    #[test]
    fn new_route_orders_nodes_by_position() {
        let route = Route::new(
            1,
            "Transatlantic",
            vec![
                RouteNode::child(2, "LHR", 2, 1, Some(Side::Left), 420),
                RouteNode::root(1, "JFK", 1),
            ],
        );
        let codes: Vec<_> = route.nodes.iter().map(|n| n.airport_code.as_str()).collect();
        assert_eq!(codes, vec!["JFK", "LHR"]);
    }

    #[test]
    fn find_airport_ignores_case_and_whitespace() {
        let route = Route::new(
            1,
            "West",
            vec![
                RouteNode::root(1, "JFK", 0),
                RouteNode::child(2, "lax", 1, 1, Some(Side::Left), 300),
            ],
        );
        assert_eq!(route.find_airport("  LAX ").map(|n| n.id), Some(NodeId(2)));
        assert!(route.find_airport("SEA").is_none());
        assert!(route.find_airport("   ").is_none());
    }

    #[test]
    fn find_airport_prefers_lowest_position() {
        let route = Route::new(
            1,
            "Loop",
            vec![
                RouteNode::root(1, "JFK", 5),
                RouteNode::child(2, "JFK", 2, 1, Some(Side::Right), 60),
            ],
        );
        assert_eq!(route.find_airport("jfk").map(|n| n.id), Some(NodeId(2)));
    }

    #[test]
    fn node_deserializes_without_optional_fields() {
        let node: RouteNode =
            serde_json::from_str(r#"{"id": 7, "airport_code": "SFO", "position": 3}"#).unwrap();
        assert_eq!(node.duration, 0);
        assert!(node.is_root());
        assert!(node.side.is_none());
    }
}
