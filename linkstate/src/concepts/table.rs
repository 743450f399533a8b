use std::collections::BTreeMap;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::framework::{Cost, NetworkSystem};

/// One row of a routing table: how a node is best reached from the
/// table's source.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[serde(bound = "")]
pub struct TableEntry<T: NetworkSystem + ?Sized> {
    /// The hop preceding this node on the shortest path. The source is
    /// its own predecessor.
    pub predecessor: T::NodeId,
    /// Cumulative cost from the source.
    pub cost: Cost,
}

/// Per-source shortest-path result over one topology snapshot.
///
/// Derived data: recompute after any topology mutation, never reuse
/// across one. Nodes unreachable from the source are simply absent.
#[serde_as]
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[serde(bound = "")]
pub struct RoutingTable<T: NetworkSystem + ?Sized> {
    pub source: T::NodeId,
    #[serde_as(as = "Vec<(_, _)>")]
    pub entries: BTreeMap<T::NodeId, TableEntry<T>>,
}

impl<T: NetworkSystem> RoutingTable<T> {
    pub fn entry(&self, node: &T::NodeId) -> Option<&TableEntry<T>> {
        self.entries.get(node)
    }

    /// Cumulative cost to reach `node`, if it is reachable at all.
    pub fn cost_to(&self, node: &T::NodeId) -> Option<Cost> {
        self.entries.get(node).map(|entry| entry.cost)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
