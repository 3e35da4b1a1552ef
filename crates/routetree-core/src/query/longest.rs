use crate::error::{Result, RouteError, StructuralError};
use crate::graph::RouteGraph;
use crate::models::{NodeId, Route, RouteNode};
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

/// Farthest descendant of a stop by cumulative duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestPath<'a> {
    /// Minutes from the start stop to `node`.
    pub distance: u64,
    pub node: &'a RouteNode,
}

enum Visit {
    Enter(usize),
    Exit(usize),
}

impl<'a> RouteGraph<'a> {
    /// Maximum-duration descent below `start`.
    ///
    /// A leaf yields `(0, start)`. Among children, only a strictly greater
    /// total replaces the current best, so ties go to the child enumerated
    /// first. Walks the subtree post-order with an explicit stack; reaching a
    /// stop twice means the parent links loop and is reported as a
    /// structural error.
    pub fn longest_from(&self, start: NodeId) -> Result<LongestPath<'a>> {
        let root = self.slot_of(start).ok_or(RouteError::UnknownNode(start))?;
        let nodes = &self.route().nodes;

        // best[slot] = (distance below slot, slot of the farthest stop)
        let mut best: Vec<(u64, usize)> = (0..nodes.len()).map(|slot| (0, slot)).collect();
        let mut visited = HashSet::new();
        let mut stack = vec![Visit::Enter(root)];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(slot) => {
                    if !visited.insert(slot) {
                        return Err(StructuralError::Cycle {
                            node: nodes[slot].id,
                        }
                        .into());
                    }
                    stack.push(Visit::Exit(slot));
                    stack.extend(self.child_slots(slot).iter().rev().map(|&c| Visit::Enter(c)));
                }
                Visit::Exit(slot) => {
                    let mut best_distance = 0;
                    let mut best_slot = slot;
                    for &child in self.child_slots(slot) {
                        let (below, deepest) = best[child];
                        let total = u64::from(nodes[child].duration) + below;
                        if total > best_distance {
                            best_distance = total;
                            best_slot = deepest;
                        }
                    }
                    best[slot] = (best_distance, best_slot);
                }
            }
        }

        let (distance, deepest) = best[root];
        debug!(start = %start, distance, end = %nodes[deepest].id, visited = visited.len(), "longest path found");
        Ok(LongestPath {
            distance,
            node: &nodes[deepest],
        })
    }
}

/// Farthest stop below `start` and its distance in minutes.
pub fn longest_from(route: &Route, start: NodeId) -> Result<LongestPath<'_>> {
    RouteGraph::build(route).longest_from(start)
}
