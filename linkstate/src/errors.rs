use educe::Educe;
use thiserror::Error;

use crate::framework::{Cost, NetworkSystem};

/// Failures of topology edits. All of these are local and recoverable:
/// the failed operation leaves the topology unchanged.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug, Clone)]
pub enum TopologyError<T: NetworkSystem + ?Sized> {
    #[error("node {0} is already present")]
    DuplicateNode(T::NodeId),
    #[error("node {0} is not part of the topology")]
    UnknownNode(T::NodeId),
    #[error("no link between {0} and {1}")]
    UnknownLink(T::NodeId, T::NodeId),
    /// Shortest paths are undefined for negative weights, so the store
    /// rejects them up front.
    #[error("invalid link cost {0}")]
    InvalidCost(Cost),
}

/// Failures of a path query. `UnknownNode` and `Unreachable` are ordinary
/// outcomes to report back to the caller; `CorruptTable` means the engine
/// produced a table whose predecessor chain does not reach its source,
/// which is a bug, not user error.
#[derive(Error)]
#[derive(Educe)]
#[educe(Debug, Clone)]
pub enum QueryError<T: NetworkSystem + ?Sized> {
    #[error("node {0} is not part of the topology")]
    UnknownNode(T::NodeId),
    #[error("no route to {0}")]
    Unreachable(T::NodeId),
    #[error("predecessor chain for {0} does not terminate at the source")]
    CorruptTable(T::NodeId),
}
