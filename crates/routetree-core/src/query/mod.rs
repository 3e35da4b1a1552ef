//! The three route queries: directional descent, longest descent and
//! shortest path. Each free function rebuilds the route graph; hold a
//! [`RouteGraph`](crate::graph::RouteGraph) to run several queries against
//! one route.

pub mod descend;
pub mod longest;
pub mod shortest;

pub use descend::descend;
pub use longest::{longest_from, LongestPath};
pub use shortest::{shortest_path, ShortestPath};
