use educe::Educe;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::concepts::path::Path;
use crate::concepts::table::RoutingTable;
use crate::engine;
use crate::errors::{QueryError, TopologyError};
use crate::framework::{Cost, NetworkSystem};
use crate::topology::Topology;
use crate::tracer;

/// A topology edit, applied through [`Simulation::edit`].
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub enum EditCommand<T: NetworkSystem + ?Sized> {
    AddNode(T::NodeId),
    RemoveNode(T::NodeId),
    AddLink(T::NodeId, T::NodeId, Cost),
    RemoveLink(T::NodeId, T::NodeId),
}

/// Sequences topology edits and path queries over one owned topology.
///
/// Every query runs the engine fresh against the current topology, so a
/// mutation can never leak into a stale routing table; for the small
/// graphs this simulates, recomputation is cheaper than cache
/// invalidation. Queries take `&self` and edits take `&mut self`, which
/// is exactly the exclusive-write/shared-read discipline the borrow
/// checker enforces for free: independent simulations can run side by
/// side, and shared references may serve parallel queries.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()))]
#[serde(bound = "")]
pub struct Simulation<T: NetworkSystem + ?Sized> {
    topology: Topology<T>,
}

impl<T: NetworkSystem + ?Sized> Default for Simulation<T> {
    fn default() -> Self {
        Simulation {
            topology: Default::default(),
        }
    }
}

impl<T: NetworkSystem> Simulation<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_topology(topology: Topology<T>) -> Self {
        Simulation { topology }
    }

    pub fn topology(&self) -> &Topology<T> {
        &self.topology
    }

    /// Applies one topology edit, forwarding the store's outcome. A
    /// failed edit leaves the topology untouched.
    pub fn edit(&mut self, command: EditCommand<T>) -> Result<(), TopologyError<T>> {
        match command {
            EditCommand::AddNode(id) => self.topology.add_node(id),
            EditCommand::RemoveNode(id) => self.topology.remove_node(&id),
            EditCommand::AddLink(a, b, cost) => self.topology.add_link(&a, &b, cost),
            EditCommand::RemoveLink(a, b) => self.topology.remove_link(&a, &b),
        }
    }

    /// Shortest path from `source` to `destination` over the current
    /// topology: computes a fresh routing table, then traces the hop
    /// sequence. Fails without partial output.
    pub fn query(
        &self,
        source: &T::NodeId,
        destination: &T::NodeId,
    ) -> Result<Path<T>, QueryError<T>> {
        if !self.topology.contains(destination) {
            return Err(QueryError::UnknownNode(destination.clone()));
        }
        let table = engine::compute_from(&self.topology, source)?;
        debug!(
            "computed {} routes from {}",
            table.len(),
            json!(source)
        );
        tracer::trace_to(&table, destination)
    }

    /// Full routing table from `source`, for display.
    pub fn table(&self, source: &T::NodeId) -> Result<RoutingTable<T>, QueryError<T>> {
        engine::compute_from(&self.topology, source)
    }

    /// Neighbor listing passthrough for display.
    pub fn neighbors(&self, id: &T::NodeId) -> Result<Vec<(T::NodeId, Cost)>, TopologyError<T>> {
        self.topology.neighbors(id)
    }
}
