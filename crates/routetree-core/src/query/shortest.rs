use crate::error::{Result, RouteError};
use crate::graph::RouteGraph;
use crate::models::{NodeId, Route, RouteNode};
use petgraph::graph::NodeIndex;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, trace};

/// Minimum-duration path between two stops of one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<'a> {
    /// Total minutes along `nodes`.
    pub distance: u64,
    /// Stops from start to end, both inclusive.
    pub nodes: Vec<&'a RouteNode>,
    /// Weight of the link taken between `nodes[i]` and `nodes[i + 1]`.
    pub leg_minutes: Vec<u32>,
}

impl<'a> ShortestPath<'a> {
    /// Consecutive stop pairs with the minutes between them.
    pub fn legs(&self) -> impl Iterator<Item = (&'a RouteNode, &'a RouteNode, u32)> + '_ {
        self.nodes
            .windows(2)
            .zip(&self.leg_minutes)
            .map(|(pair, &minutes)| (pair[0], pair[1], minutes))
    }
}

impl<'a> RouteGraph<'a> {
    /// Dijkstra over the undirected parent/child graph.
    ///
    /// The heap holds `(distance, node)` candidates without decrease-key;
    /// entries that are worse than the best distance already recorded are
    /// skipped when popped. The search stops once `end` leaves the heap.
    pub fn shortest_path(&self, start: NodeId, end: NodeId) -> Result<ShortestPath<'a>> {
        let source = self.index_of(start).ok_or(RouteError::UnknownNode(start))?;
        let target = self.index_of(end).ok_or(RouteError::UnknownNode(end))?;

        if source == target {
            return Ok(ShortestPath {
                distance: 0,
                nodes: vec![self.node_at(source)],
                leg_minutes: Vec::new(),
            });
        }

        let mut dist: HashMap<NodeIndex, u64> = HashMap::from([(source, 0)]);
        let mut prev: HashMap<NodeIndex, (NodeIndex, u32)> = HashMap::new();
        let mut heap = BinaryHeap::from([Reverse((0u64, source))]);

        while let Some(Reverse((d, current))) = heap.pop() {
            if current == target {
                break;
            }
            if dist.get(&current).is_some_and(|&known| d > known) {
                continue;
            }

            for (neighbor, weight) in self.neighbors(current) {
                let candidate = d + u64::from(weight);
                if dist.get(&neighbor).map_or(true, |&known| candidate < known) {
                    trace!(from = current.index(), to = neighbor.index(), candidate, "relaxed");
                    dist.insert(neighbor, candidate);
                    prev.insert(neighbor, (current, weight));
                    heap.push(Reverse((candidate, neighbor)));
                }
            }
        }

        let Some(&distance) = dist.get(&target) else {
            return Err(RouteError::NoPath {
                from: display_code(self.node_at(source)),
                to: display_code(self.node_at(target)),
                route: self.route().name.clone(),
            });
        };

        let mut path = vec![target];
        let mut leg_minutes = Vec::new();
        let mut cursor = target;
        while let Some(&(previous, weight)) = prev.get(&cursor) {
            path.push(previous);
            leg_minutes.push(weight);
            cursor = previous;
        }
        path.reverse();
        leg_minutes.reverse();

        debug!(start = %start, end = %end, distance, hops = path.len() - 1, "shortest path found");
        Ok(ShortestPath {
            distance,
            nodes: path.into_iter().map(|idx| self.node_at(idx)).collect(),
            leg_minutes,
        })
    }
}

fn display_code(node: &RouteNode) -> String {
    node.airport_code.trim().to_uppercase()
}

/// Minimum total duration between `start` and `end`, treating every
/// parent/child link as a two-way leg. The route graph is rebuilt per call.
pub fn shortest_path(route: &Route, start: NodeId, end: NodeId) -> Result<ShortestPath<'_>> {
    RouteGraph::build(route).shortest_path(start, end)
}
