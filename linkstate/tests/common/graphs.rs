use linkstate::framework::{Cost, NetworkSystem};
use linkstate::topology::Topology;

pub struct StrNet;
impl NetworkSystem for StrNet {
    type NodeId = String;
}

pub fn topo(nodes: &[&str], links: &[(&str, &str, Cost)]) -> Topology<StrNet> {
    let mut topology = Topology::new();
    for id in nodes {
        topology.add_node(id.to_string()).unwrap();
    }
    for (a, b, cost) in links {
        topology
            .add_link(&a.to_string(), &b.to_string(), *cost)
            .unwrap();
    }
    topology
}

/// The direct A-C edge is a decoy: A-B-C costs 3, beating A-C at 4.
pub fn topo_quad() -> Topology<StrNet> {
    topo(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 4), ("C", "D", 1)],
    )
}

pub fn topo_weighted() -> Topology<StrNet> {
    topo(
        &["1", "2", "3", "4", "5"],
        &[
            ("1", "2", 2),
            ("1", "3", 1),
            ("2", "3", 4),
            ("2", "4", 5),
            ("3", "4", 100),
            ("3", "5", 8),
            ("4", "5", 1),
        ],
    )
}

pub fn topo_split() -> Topology<StrNet> {
    topo(&["A", "B", "C", "D"], &[("A", "B", 1), ("C", "D", 1)])
}

/// Optimal cost by exhaustive simple-path enumeration; ground truth for
/// graphs small enough to enumerate.
pub fn brute_force_cost(topology: &Topology<StrNet>, from: &str, to: &str) -> Option<Cost> {
    let mut best = None;
    let mut visited = vec![from.to_string()];
    walk(topology, &from.to_string(), &to.to_string(), &mut visited, 0, &mut best);
    best
}

fn walk(
    topology: &Topology<StrNet>,
    cur: &String,
    to: &String,
    visited: &mut Vec<String>,
    cost: Cost,
    best: &mut Option<Cost>,
) {
    if cur == to {
        if best.map_or(true, |b| cost < b) {
            *best = Some(cost);
        }
        return;
    }
    for (peer, link_cost) in topology.neighbors(cur).unwrap() {
        if !visited.contains(&peer) {
            visited.push(peer.clone());
            walk(topology, &peer, to, visited, cost + link_cost, best);
            visited.pop();
        }
    }
}
