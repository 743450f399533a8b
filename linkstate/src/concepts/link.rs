use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::framework::{Cost, NetworkSystem};

/// A weighted connection between two nodes.
///
/// The pair is unordered: `a` and `b` carry no direction, and the
/// topology holds at most one link per pair.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[serde(bound = "")]
pub struct Link<T: NetworkSystem + ?Sized> {
    pub a: T::NodeId,
    pub b: T::NodeId,
    /// Latency/bandwidth proxy, always >= 0.
    pub cost: Cost,
}
