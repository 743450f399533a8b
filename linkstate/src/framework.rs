use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Cost of a link or of a cumulative path, a latency/bandwidth proxy.
///
/// Costs are accepted as signed integers so that the topology store can
/// reject negative weights at the API boundary instead of making them
/// unrepresentable; every cost it actually stores is non-negative.
pub type Cost = i64;

pub trait NetworkSystem {
    /// Identifier of a node on the simulated network, MUST be unique
    /// within a topology. `Ord` is required: the engine breaks cost ties
    /// by comparing identifiers, which keeps its output deterministic.
    type NodeId: Ord + PartialOrd + Display + Debug + NetData + NetKey;
}

pub trait NetData: Clone + Serialize + DeserializeOwned + Sized {}
pub trait NetKey: Eq + PartialEq + Hash {}
impl<T: Eq + PartialEq + Hash> NetKey for T {}
impl<T: Clone + Serialize + DeserializeOwned + Sized> NetData for T {}
