//! Structural checks for routes
//!
//! The query algorithms tolerate most malformed data on their own; these
//! checks let a caller reject a route up front with a precise reason.

use crate::error::{Result, StructuralError};
use crate::models::{NodeId, Route, Side};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject parents with two children on one side, and side labels on roots.
    pub strict_sides: bool,
}

impl ValidationOptions {
    pub fn strict() -> Self {
        Self { strict_sides: true }
    }
}

impl Route {
    /// Returns the first structural problem found, if any.
    pub fn validate(&self, options: &ValidationOptions) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        let mut positions: HashMap<u32, NodeId> = HashMap::with_capacity(self.nodes.len());

        for node in &self.nodes {
            if !ids.insert(node.id) {
                return Err(StructuralError::DuplicateNodeId { node: node.id }.into());
            }
            if let Some(&first) = positions.get(&node.position) {
                return Err(StructuralError::DuplicatePosition {
                    position: node.position,
                    first,
                    second: node.id,
                }
                .into());
            }
            positions.insert(node.position, node.id);
        }

        let mut parent_of = HashMap::new();
        let mut side_owner: HashMap<(NodeId, Side), NodeId> = HashMap::new();

        for node in &self.nodes {
            match (node.parent, node.side) {
                (Some(parent), side) => {
                    if !ids.contains(&parent) {
                        return Err(StructuralError::ForeignParent {
                            node: node.id,
                            parent,
                        }
                        .into());
                    }
                    parent_of.insert(node.id, parent);

                    if let (true, Some(side)) = (options.strict_sides, side) {
                        if let Some(&first) = side_owner.get(&(parent, side)) {
                            return Err(StructuralError::DuplicateSide {
                                parent,
                                side,
                                first,
                                second: node.id,
                            }
                            .into());
                        }
                        side_owner.insert((parent, side), node.id);
                    }
                }
                (None, Some(side)) if options.strict_sides => {
                    return Err(StructuralError::SideWithoutParent {
                        node: node.id,
                        side,
                    }
                    .into());
                }
                (None, _) => {}
            }
        }

        check_acyclic(&self.nodes.iter().map(|n| n.id).collect::<Vec<_>>(), &parent_of)
    }
}

/// Walks each parent chain once; nodes already proven to reach a root are
/// not walked again.
fn check_acyclic(ids: &[NodeId], parent_of: &HashMap<NodeId, NodeId>) -> Result<()> {
    let mut settled: HashSet<NodeId> = HashSet::with_capacity(ids.len());

    for &id in ids {
        let mut chain = HashSet::new();
        let mut cursor = id;
        loop {
            if settled.contains(&cursor) {
                break;
            }
            if !chain.insert(cursor) {
                return Err(StructuralError::Cycle { node: cursor }.into());
            }
            match parent_of.get(&cursor) {
                Some(&parent) => cursor = parent,
                None => break,
            }
        }
        settled.extend(chain);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;
    use crate::models::RouteNode;

    fn structural(route: &Route, options: ValidationOptions) -> StructuralError {
        match route.validate(&options) {
            Err(RouteError::Structural(err)) => err,
            other => panic!("expected structural error, got {:?}", other),
        }
    }

    #[test]
    fn well_formed_route_passes_strict_checks() {
        let route = Route::new(
            1,
            "Ok",
            vec![
                RouteNode::root(1, "JFK", 0),
                RouteNode::child(2, "LAX", 1, 1, Some(Side::Left), 300),
                RouteNode::child(3, "MIA", 2, 1, Some(Side::Right), 180),
            ],
        );
        assert!(route.validate(&ValidationOptions::strict()).is_ok());
    }

    #[test]
    fn duplicate_position_is_rejected() {
        let route = Route::new(
            1,
            "Pos",
            vec![RouteNode::root(1, "JFK", 0), RouteNode::root(2, "LAX", 0)],
        );
        assert_eq!(
            structural(&route, ValidationOptions::default()),
            StructuralError::DuplicatePosition {
                position: 0,
                first: NodeId(1),
                second: NodeId(2)
            }
        );
    }

    #[test]
    fn foreign_parent_is_rejected() {
        let route = Route::new(
            1,
            "Foreign",
            vec![
                RouteNode::root(1, "JFK", 0),
                RouteNode::child(2, "LAX", 1, 8, Some(Side::Left), 300),
            ],
        );
        assert_eq!(
            structural(&route, ValidationOptions::default()),
            StructuralError::ForeignParent {
                node: NodeId(2),
                parent: NodeId(8)
            }
        );
    }

    #[test]
    fn cycle_is_rejected() {
        let route = Route::new(
            1,
            "Cycle",
            vec![
                RouteNode::root(1, "JFK", 0),
                RouteNode::child(2, "AAA", 1, 3, None, 10),
                RouteNode::child(3, "BBB", 2, 2, None, 10),
            ],
        );
        assert!(matches!(
            structural(&route, ValidationOptions::default()),
            StructuralError::Cycle { .. }
        ));
    }

    #[test]
    fn duplicate_side_only_rejected_in_strict_mode() {
        let route = Route::new(
            1,
            "Dup",
            vec![
                RouteNode::root(1, "JFK", 0),
                RouteNode::child(2, "LAX", 1, 1, Some(Side::Left), 300),
                RouteNode::child(3, "SFO", 2, 1, Some(Side::Left), 320),
            ],
        );
        assert!(route.validate(&ValidationOptions::default()).is_ok());
        assert_eq!(
            structural(&route, ValidationOptions::strict()),
            StructuralError::DuplicateSide {
                parent: NodeId(1),
                side: Side::Left,
                first: NodeId(2),
                second: NodeId(3)
            }
        );
    }

    #[test]
    fn side_on_root_only_rejected_in_strict_mode() {
        let mut root = RouteNode::root(1, "JFK", 0);
        root.side = Some(Side::Right);
        let route = Route::new(1, "Root", vec![root]);
        assert!(route.validate(&ValidationOptions::default()).is_ok());
        assert!(matches!(
            structural(&route, ValidationOptions::strict()),
            StructuralError::SideWithoutParent { .. }
        ));
    }
}
