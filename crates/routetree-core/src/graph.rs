use crate::models::{NodeId, Route, RouteNode, Side};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// First child recorded on each side of a parent, as slots into `Route::nodes`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SideSlots {
    pub left: Option<usize>,
    pub right: Option<usize>,
}

impl SideSlots {
    pub fn get(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn slot_mut(&mut self, side: Side) -> &mut Option<usize> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Read-only views over one route: an undirected graph weighted by child
/// duration, plus parent -> children indexes for the tree walks.
///
/// Graph node `i` is `route.nodes[i]`. Children are enumerated in the order
/// the route stores its nodes, which is position order for any route built
/// with `Route::new` or loaded from a catalog. When a parent has several
/// children on the same side the first one in that order is used.
pub struct RouteGraph<'a> {
    route: &'a Route,
    graph: UnGraph<usize, u32>,
    indices: HashMap<NodeId, NodeIndex>,
    children: Vec<Vec<usize>>,
    sides: Vec<SideSlots>,
}

impl<'a> RouteGraph<'a> {
    pub fn build(route: &'a Route) -> Self {
        let count = route.nodes.len();
        let mut graph = UnGraph::with_capacity(count, count);
        let mut indices: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(count);

        for (slot, node) in route.nodes.iter().enumerate() {
            let idx = graph.add_node(slot);
            if indices.contains_key(&node.id) {
                warn!(route = %route.name, node = %node.id, "duplicate node id, later record has no links");
                continue;
            }
            indices.insert(node.id, idx);
        }

        let mut children = vec![Vec::new(); count];
        let mut sides = vec![SideSlots::default(); count];

        for (slot, node) in route.nodes.iter().enumerate() {
            if indices.get(&node.id) != Some(&NodeIndex::new(slot)) {
                continue;
            }
            let Some(parent_id) = node.parent else {
                continue;
            };
            let Some(&parent_idx) = indices.get(&parent_id) else {
                warn!(
                    route = %route.name,
                    node = %node.id,
                    parent = %parent_id,
                    "parent is not part of the route, skipping link"
                );
                continue;
            };

            graph.add_edge(parent_idx, NodeIndex::new(slot), node.duration);

            let parent_slot = parent_idx.index();
            children[parent_slot].push(slot);

            if let Some(side) = node.side {
                let entry = sides[parent_slot].slot_mut(side);
                match *entry {
                    Some(first) => debug!(
                        parent = %parent_id,
                        %side,
                        kept = %route.nodes[first].id,
                        ignored = %node.id,
                        "duplicate side child"
                    ),
                    None => *entry = Some(slot),
                }
            }
        }

        debug!(
            route = %route.name,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built route graph"
        );

        Self {
            route,
            graph,
            indices,
            children,
            sides,
        }
    }

    pub fn route(&self) -> &'a Route {
        self.route
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, id: NodeId) -> Option<&'a RouteNode> {
        self.slot_of(id).map(|slot| &self.route.nodes[slot])
    }

    /// Children of `id` on either side, in enumeration order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &'a RouteNode> + '_ {
        let route = self.route;
        self.slot_of(id)
            .map(|slot| self.children[slot].as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&child| &route.nodes[child])
    }

    pub fn child_on(&self, id: NodeId, side: Side) -> Option<&'a RouteNode> {
        let slot = self.slot_of(id)?;
        self.side_child_slot(slot, side)
            .map(|child| &self.route.nodes[child])
    }

    /// Adjacency list keyed by node id: every parent/child link appears in
    /// both directions with the child's duration as weight.
    pub fn adjacency(&self) -> BTreeMap<NodeId, Vec<(NodeId, u32)>> {
        let mut adjacency = BTreeMap::new();
        for idx in self.graph.node_indices() {
            let node = self.node_at(idx);
            let neighbors = self
                .neighbors(idx)
                .map(|(other, weight)| (self.node_at(other).id, weight))
                .collect::<Vec<_>>();
            adjacency
                .entry(node.id)
                .or_insert_with(Vec::new)
                .extend(neighbors);
        }
        adjacency
    }

    pub(crate) fn slot_of(&self, id: NodeId) -> Option<usize> {
        self.indices.get(&id).map(|idx| idx.index())
    }

    pub(crate) fn index_of(&self, id: NodeId) -> Option<NodeIndex> {
        self.indices.get(&id).copied()
    }

    pub(crate) fn node_at(&self, idx: NodeIndex) -> &'a RouteNode {
        &self.route.nodes[self.graph[idx]]
    }

    pub(crate) fn child_slots(&self, slot: usize) -> &[usize] {
        &self.children[slot]
    }

    pub(crate) fn side_child_slot(&self, slot: usize, side: Side) -> Option<usize> {
        self.sides[slot].get(side)
    }

    pub(crate) fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = (NodeIndex, u32)> + '_ {
        self.graph.edges(idx).map(move |edge| {
            let other = if edge.source() == idx {
                edge.target()
            } else {
                edge.source()
            };
            (other, *edge.weight())
        })
    }
}
