//! Flight routes as labeled binary trees of airport stops.
//!
//! A [`Route`] owns a flat list of [`RouteNode`] records; parent links, side
//! labels and durations make it a tree. Three read-only queries run over it:
//!
//! - [`descend`]: follow left (or right) children to the deepest stop
//! - [`longest_from`]: farthest descendant by cumulative duration
//! - [`shortest_path`]: minimum-duration path between two stops, using every
//!   parent/child link in both directions
//!
//! ```
//! use routetree_core::{descend, longest_from, shortest_path, NodeId, Route, RouteNode, Side};
//!
//! let route = Route::new(1, "West", vec![
//!     RouteNode::root(1, "JFK", 0),
//!     RouteNode::child(2, "LAX", 1, 1, Some(Side::Left), 300),
//!     RouteNode::child(3, "SEA", 2, 2, Some(Side::Left), 120),
//! ]);
//!
//! assert_eq!(descend(&route, NodeId(1), Side::Left)?.airport_code, "SEA");
//! assert_eq!(longest_from(&route, NodeId(1))?.distance, 420);
//! assert_eq!(shortest_path(&route, NodeId(1), NodeId(3))?.nodes.len(), 3);
//! # Ok::<(), routetree_core::RouteError>(())
//! ```

pub mod catalog;
pub mod error;
pub mod graph;
pub mod models;
pub mod query;
pub mod validate;

pub use catalog::{CatalogFormat, RouteCatalog};
pub use error::{CatalogError, Result, RouteError, StructuralError};
pub use graph::RouteGraph;
pub use models::{NodeId, ParseSideError, Route, RouteNode, Side};
pub use query::{descend, longest_from, shortest_path, LongestPath, ShortestPath};
pub use validate::ValidationOptions;
