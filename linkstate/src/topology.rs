use std::collections::BTreeMap;

use educe::Educe;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::concepts::link::Link;
use crate::errors::TopologyError;
use crate::framework::{Cost, NetworkSystem};

/// The current graph of nodes and weighted links.
///
/// Owns all node and link state; everything derived from it (routing
/// tables, paths) is computed on demand and owned by the caller.
/// Adjacency is stored symmetrically as key lookups into the node map,
/// never as mutual references. Ordered maps keep neighbor iteration
/// deterministic.
#[serde_as]
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[serde(bound = "")]
pub struct Topology<T: NetworkSystem + ?Sized> {
    #[serde_as(as = "Vec<(_, Vec<(_, _)>)>")]
    adjacency: BTreeMap<T::NodeId, BTreeMap<T::NodeId, Cost>>,
}

impl<T: NetworkSystem + ?Sized> Default for Topology<T> {
    fn default() -> Self {
        Topology {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<T: NetworkSystem> Topology<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Inserts a node with no links.
    pub fn add_node(&mut self, id: T::NodeId) -> Result<(), TopologyError<T>> {
        if self.adjacency.contains_key(&id) {
            return Err(TopologyError::DuplicateNode(id));
        }
        self.adjacency.insert(id, BTreeMap::new());
        Ok(())
    }

    /// Removes a node and every link touching it, so no dangling
    /// adjacency entry survives the node.
    pub fn remove_node(&mut self, id: &T::NodeId) -> Result<(), TopologyError<T>> {
        if self.adjacency.remove(id).is_none() {
            return Err(TopologyError::UnknownNode(id.clone()));
        }
        for peers in self.adjacency.values_mut() {
            peers.remove(id);
        }
        Ok(())
    }

    /// Inserts an undirected link between two present nodes.
    ///
    /// The topology is a simple graph: linking an already-linked pair
    /// replaces the previous cost.
    pub fn add_link(
        &mut self,
        a: &T::NodeId,
        b: &T::NodeId,
        cost: Cost,
    ) -> Result<(), TopologyError<T>> {
        if !self.adjacency.contains_key(a) {
            return Err(TopologyError::UnknownNode(a.clone()));
        }
        if !self.adjacency.contains_key(b) {
            return Err(TopologyError::UnknownNode(b.clone()));
        }
        if cost < 0 {
            return Err(TopologyError::InvalidCost(cost));
        }
        if let Some(peers) = self.adjacency.get_mut(a) {
            peers.insert(b.clone(), cost);
        }
        if let Some(peers) = self.adjacency.get_mut(b) {
            peers.insert(a.clone(), cost);
        }
        Ok(())
    }

    pub fn remove_link(&mut self, a: &T::NodeId, b: &T::NodeId) -> Result<(), TopologyError<T>> {
        let present = self
            .adjacency
            .get(a)
            .map_or(false, |peers| peers.contains_key(b));
        if !present {
            return Err(TopologyError::UnknownLink(a.clone(), b.clone()));
        }
        if let Some(peers) = self.adjacency.get_mut(a) {
            peers.remove(b);
        }
        if let Some(peers) = self.adjacency.get_mut(b) {
            peers.remove(a);
        }
        Ok(())
    }

    /// The `(neighbor, cost)` pairs adjacent to `id`, ordered by
    /// neighbor identifier.
    pub fn neighbors(&self, id: &T::NodeId) -> Result<Vec<(T::NodeId, Cost)>, TopologyError<T>> {
        match self.adjacency.get(id) {
            Some(peers) => Ok(peers
                .iter()
                .map(|(peer, cost)| (peer.clone(), *cost))
                .collect()),
            None => Err(TopologyError::UnknownNode(id.clone())),
        }
    }

    /// Direct adjacency for the engine; avoids cloning per relaxation.
    pub(crate) fn peers(&self, id: &T::NodeId) -> Option<&BTreeMap<T::NodeId, Cost>> {
        self.adjacency.get(id)
    }

    pub fn contains(&self, id: &T::NodeId) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn link_count(&self) -> usize {
        // each pair appears in both endpoint maps, so count it only from
        // the smaller endpoint; a self-link appears once
        self.adjacency
            .iter()
            .map(|(id, peers)| peers.keys().filter(|peer| *peer >= id).count())
            .sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &T::NodeId> {
        self.adjacency.keys()
    }

    /// Every link as an unordered pair, ordered by endpoints.
    pub fn links(&self) -> Vec<Link<T>> {
        let mut out = Vec::new();
        for (id, peers) in &self.adjacency {
            for (peer, cost) in peers {
                if peer >= id {
                    out.push(Link {
                        a: id.clone(),
                        b: peer.clone(),
                        cost: *cost,
                    });
                }
            }
        }
        out
    }

    /// Cost of the link between `a` and `b`, if one exists.
    pub fn link_cost(&self, a: &T::NodeId, b: &T::NodeId) -> Option<Cost> {
        self.adjacency.get(a).and_then(|peers| peers.get(b)).copied()
    }
}
