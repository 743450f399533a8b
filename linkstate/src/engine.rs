use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::concepts::table::{RoutingTable, TableEntry};
use crate::errors::QueryError;
use crate::framework::{Cost, NetworkSystem};
use crate::topology::Topology;
use crate::util::sum_cost;

/// Computes single-source shortest paths over the current topology
/// snapshot.
///
/// Dijkstra's algorithm over the adjacency map, with a binary heap keyed
/// by `(tentative cost, node id)`: equal costs pop the smaller identifier
/// first, so the resulting table is identical across runs on an unmutated
/// topology. Requires non-negative link costs, which the topology store
/// guarantees at insertion.
///
/// The returned table covers exactly the nodes reachable from `source`;
/// an unreachable node is absent, not an error. O((V + E) log V).
pub fn compute_from<T: NetworkSystem>(
    topology: &Topology<T>,
    source: &T::NodeId,
) -> Result<RoutingTable<T>, QueryError<T>> {
    if !topology.contains(source) {
        return Err(QueryError::UnknownNode(source.clone()));
    }

    let mut entries: BTreeMap<T::NodeId, TableEntry<T>> = BTreeMap::new();
    let mut heap: BinaryHeap<Reverse<(Cost, T::NodeId)>> = BinaryHeap::new();

    entries.insert(
        source.clone(),
        TableEntry {
            predecessor: source.clone(),
            cost: 0,
        },
    );
    heap.push(Reverse((0, source.clone())));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // a node is pushed again whenever its tentative cost improves;
        // anything but the current cost is a stale heap entry
        match entries.get(&node) {
            Some(entry) if entry.cost == cost => {}
            _ => continue,
        }

        if let Some(peers) = topology.peers(&node) {
            for (peer, link_cost) in peers {
                let candidate = sum_cost(cost, *link_cost);
                let improved = match entries.get(peer) {
                    Some(entry) => candidate < entry.cost,
                    None => true,
                };
                if improved {
                    entries.insert(
                        peer.clone(),
                        TableEntry {
                            predecessor: node.clone(),
                            cost: candidate,
                        },
                    );
                    heap.push(Reverse((candidate, peer.clone())));
                }
            }
        }
    }

    Ok(RoutingTable {
        source: source.clone(),
        entries,
    })
}
