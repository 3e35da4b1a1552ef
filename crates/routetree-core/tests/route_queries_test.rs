use routetree_core::{
    descend, longest_from, shortest_path, NodeId, Route, RouteCatalog, RouteError, RouteGraph,
    RouteNode, Side, ValidationOptions,
};
use std::io::Write;

fn west_coast() -> Route {
    Route::new(
        1,
        "West Coast",
        vec![
            RouteNode::root(1, "JFK", 0),
            RouteNode::child(2, "LAX", 1, 1, Some(Side::Left), 300),
            RouteNode::child(3, "SEA", 2, 2, Some(Side::Left), 120),
        ],
    )
}

/// JFK
/// ├─ left  ORD (120)
/// │   ├─ left  DEN (150)
/// │   │   └─ left SLC (75)
/// │   └─ right MSP (80)
/// └─ right ATL (130)
///     ├─ left  MIA (110)
///     └─ right DFW (140)
///         └─ right PHX (120)
fn network() -> Route {
    Route::new(
        2,
        "Network",
        vec![
            RouteNode::root(1, "JFK", 0),
            RouteNode::child(2, "ORD", 1, 1, Some(Side::Left), 120),
            RouteNode::child(3, "ATL", 2, 1, Some(Side::Right), 130),
            RouteNode::child(4, "DEN", 3, 2, Some(Side::Left), 150),
            RouteNode::child(5, "MSP", 4, 2, Some(Side::Right), 80),
            RouteNode::child(6, "MIA", 5, 3, Some(Side::Left), 110),
            RouteNode::child(7, "DFW", 6, 3, Some(Side::Right), 140),
            RouteNode::child(8, "SLC", 7, 4, Some(Side::Left), 75),
            RouteNode::child(9, "PHX", 8, 7, Some(Side::Right), 120),
        ],
    )
}

#[test]
fn west_coast_example() {
    let route = west_coast();

    assert_eq!(descend(&route, NodeId(1), Side::Left).unwrap().airport_code, "SEA");

    let longest = longest_from(&route, NodeId(1)).unwrap();
    assert_eq!(longest.distance, 420);
    assert_eq!(longest.node.airport_code, "SEA");

    let path = shortest_path(&route, NodeId(1), NodeId(3)).unwrap();
    assert_eq!(path.distance, 420);
    let codes: Vec<_> = path.nodes.iter().map(|n| n.airport_code.as_str()).collect();
    assert_eq!(codes, vec!["JFK", "LAX", "SEA"]);
}

#[test]
fn descend_is_a_fixed_point() {
    let route = network();
    let graph = RouteGraph::build(&route);
    for node in &route.nodes {
        for side in [Side::Left, Side::Right] {
            let end = graph.descend(node.id, side).unwrap();
            if graph.child_on(node.id, side).is_none() {
                assert_eq!(end.id, node.id);
            }
            assert!(graph.child_on(end.id, side).is_none());
            assert_eq!(graph.descend(end.id, side).unwrap().id, end.id);
        }
    }
    assert_eq!(graph.descend(NodeId(1), Side::Right).unwrap().airport_code, "PHX");
}

#[test]
fn longest_from_every_leaf_is_zero() {
    let route = network();
    let graph = RouteGraph::build(&route);
    for node in route.nodes.iter().filter(|n| graph.children(n.id).next().is_none()) {
        let longest = graph.longest_from(node.id).unwrap();
        assert_eq!((longest.distance, longest.node.id), (0, node.id));
    }
}

#[test]
fn longest_from_root_takes_heaviest_branch() {
    let route = network();
    let longest = longest_from(&route, NodeId(1)).unwrap();
    assert_eq!(longest.distance, 130 + 140 + 120);
    assert_eq!(longest.node.airport_code, "PHX");
}

#[test]
fn shortest_path_properties_hold_for_all_pairs() {
    let route = network();
    let graph = RouteGraph::build(&route);
    for a in &route.nodes {
        let own = graph.shortest_path(a.id, a.id).unwrap();
        assert_eq!(own.distance, 0);
        assert_eq!(own.nodes, vec![a]);

        for b in &route.nodes {
            let there = graph.shortest_path(a.id, b.id).unwrap();
            let back = graph.shortest_path(b.id, a.id).unwrap();
            assert_eq!(there.distance, back.distance);
            assert_eq!(there.nodes.first().map(|n| n.id), Some(a.id));
            assert_eq!(there.nodes.last().map(|n| n.id), Some(b.id));
            let leg_total: u64 = there.legs().map(|(_, _, minutes)| u64::from(minutes)).sum();
            assert_eq!(leg_total, there.distance);
        }
    }
}

#[test]
fn shortest_path_equals_tree_path() {
    let route = network();
    let path = shortest_path(&route, NodeId(8), NodeId(9)).unwrap();
    assert_eq!(path.distance, 75 + 150 + 120 + 130 + 140 + 120);
    let codes: Vec<_> = path.nodes.iter().map(|n| n.airport_code.as_str()).collect();
    assert_eq!(codes, vec!["SLC", "DEN", "ORD", "JFK", "ATL", "DFW", "PHX"]);
}

#[test]
fn separate_trees_have_no_path() {
    let route = Route::new(
        3,
        "Two Trees",
        vec![
            RouteNode::root(1, "JFK", 0),
            RouteNode::child(2, "BOS", 1, 1, Some(Side::Left), 60),
            RouteNode::root(3, "LHR", 2),
        ],
    );
    let err = shortest_path(&route, NodeId(2), NodeId(3)).unwrap_err();
    assert_eq!(err.to_string(), "No path found between BOS and LHR in Two Trees.");
    assert!(matches!(err, RouteError::NoPath { .. }));
}

#[test]
fn catalog_round_trip_through_a_file() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(
        file,
        r#"
routes:
  - id: 1
    name: West Coast
    nodes:
      - {{ id: 1, airport_code: JFK, position: 0 }}
      - {{ id: 2, airport_code: LAX, position: 1, duration: 300, parent: 1, side: left }}
      - {{ id: 3, airport_code: SEA, position: 2, duration: 120, parent: 2, side: left }}
"#
    )
    .unwrap();

    let catalog = RouteCatalog::load(file.path()).unwrap();
    catalog.validate(&ValidationOptions::strict()).unwrap();

    let route = catalog.route("West Coast").unwrap();
    assert_eq!(route, &west_coast());

    let start = route.find_airport("jfk").unwrap();
    let end = route.find_airport(" sea").unwrap();
    assert_eq!(shortest_path(route, start.id, end.id).unwrap().distance, 420);
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteCatalog::load(dir.path().join("absent.yml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read route catalog"));
}
