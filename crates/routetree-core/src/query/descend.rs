use crate::error::{Result, RouteError, StructuralError};
use crate::graph::RouteGraph;
use crate::models::{NodeId, Route, RouteNode, Side};
use std::collections::HashSet;
use tracing::debug;

impl<'a> RouteGraph<'a> {
    /// Follows the child on `side` until a stop has none, returning that stop.
    /// A start node without such a child is returned unchanged.
    pub fn descend(&self, start: NodeId, side: Side) -> Result<&'a RouteNode> {
        let mut current = self.slot_of(start).ok_or(RouteError::UnknownNode(start))?;
        let mut seen = HashSet::from([current]);

        while let Some(child) = self.side_child_slot(current, side) {
            if !seen.insert(child) {
                return Err(StructuralError::Cycle {
                    node: self.route().nodes[child].id,
                }
                .into());
            }
            current = child;
        }

        let last = &self.route().nodes[current];
        debug!(start = %start, %side, end = %last.id, steps = seen.len() - 1, "descend finished");
        Ok(last)
    }
}

/// Deepest stop reached from `start` by always taking the `side` child.
pub fn descend(route: &Route, start: NodeId, side: Side) -> Result<&RouteNode> {
    RouteGraph::build(route).descend(start, side)
}
