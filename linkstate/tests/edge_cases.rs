mod common;

use common::graphs::{topo, topo_quad, topo_split, StrNet};
use linkstate::engine::compute_from;
use linkstate::errors::{QueryError, TopologyError};
use linkstate::topology::Topology;
use linkstate::tracer::trace_to;

#[test]
fn duplicate_node_rejected() {
    let mut topology = topo_quad();
    let err = topology.add_node("A".to_string()).unwrap_err();
    assert!(matches!(err, TopologyError::DuplicateNode(n) if n == "A"));
    assert_eq!(topology.node_count(), 4);
}

#[test]
fn link_requires_known_endpoints() {
    let mut topology = topo(&["A", "B"], &[]);
    let err = topology
        .add_link(&"A".to_string(), &"Z".to_string(), 1)
        .unwrap_err();
    assert!(matches!(err, TopologyError::UnknownNode(n) if n == "Z"));
    assert_eq!(topology.link_count(), 0);
}

#[test]
fn negative_cost_rejected() {
    let mut topology = topo_quad();
    let err = topology
        .add_link(&"A".to_string(), &"D".to_string(), -1)
        .unwrap_err();
    assert!(matches!(err, TopologyError::InvalidCost(-1)));

    // the failed edit must not have touched the store
    assert_eq!(topology.link_count(), 4);
    assert_eq!(topology.link_cost(&"A".to_string(), &"D".to_string()), None);
}

#[test]
fn relinking_replaces_the_link() {
    let mut topology = topo_quad();
    topology
        .add_link(&"A".to_string(), &"C".to_string(), 1)
        .unwrap();

    // still a simple graph, and the new cost wins
    assert_eq!(topology.link_count(), 4);
    assert_eq!(
        topology.link_cost(&"A".to_string(), &"C".to_string()),
        Some(1)
    );
    let table = compute_from(&topology, &"A".to_string()).unwrap();
    assert_eq!(table.cost_to(&"C".to_string()), Some(1));
    assert_eq!(table.cost_to(&"D".to_string()), Some(2));
}

#[test]
fn remove_node_cascades() {
    let mut topology = topo_quad();
    topology.remove_node(&"C".to_string()).unwrap();

    assert_eq!(topology.node_count(), 3);
    // every link that touched C is gone, only A-B survives
    assert_eq!(topology.link_count(), 1);
    for link in topology.links() {
        assert_ne!(link.a, "C");
        assert_ne!(link.b, "C");
    }

    let err = topology.neighbors(&"C".to_string()).unwrap_err();
    assert!(matches!(err, TopologyError::UnknownNode(n) if n == "C"));
}

#[test]
fn remove_missing_link_fails() {
    let mut topology = topo_quad();
    let err = topology
        .remove_link(&"B".to_string(), &"D".to_string())
        .unwrap_err();
    assert!(matches!(err, TopologyError::UnknownLink(a, b) if a == "B" && b == "D"));
    assert_eq!(topology.link_count(), 4);
}

#[test]
fn disconnected_component_is_unreachable() {
    let topology = topo_split();
    let table = compute_from(&topology, &"A".to_string()).unwrap();

    assert_eq!(table.len(), 2);
    assert!(table.entry(&"C".to_string()).is_none());

    let err = trace_to(&table, &"C".to_string()).unwrap_err();
    assert!(matches!(err, QueryError::Unreachable(n) if n == "C"));
}

#[test]
fn isolated_source_routes_only_itself() {
    let topology = topo(&["A", "B"], &[]);
    let table = compute_from(&topology, &"A".to_string()).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.cost_to(&"A".to_string()), Some(0));
}

#[test]
fn unknown_source_rejected() {
    let topology: Topology<StrNet> = Topology::new();
    let err = compute_from(&topology, &"A".to_string()).unwrap_err();
    assert!(matches!(err, QueryError::UnknownNode(n) if n == "A"));
}

#[test]
fn zero_cost_links_are_valid() {
    let topology = topo(&["A", "B", "C"], &[("A", "B", 0), ("B", "C", 0)]);
    let table = compute_from(&topology, &"A".to_string()).unwrap();
    assert_eq!(table.cost_to(&"C".to_string()), Some(0));

    let path = trace_to(&table, &"C".to_string()).unwrap();
    assert_eq!(path.hops().join(" "), "A B C");
}
