use std::fmt::{Display, Formatter};

use educe::Educe;
use serde::{Deserialize, Serialize};

use crate::framework::{Cost, NetworkSystem};

/// An ordered hop sequence from a source to a destination, plus the total
/// cost of walking it.
///
/// Produced by the tracer from a routing table; immutable once returned.
/// The hop list is never empty, a path from a node to itself is just
/// `[node]` at cost 0.
#[derive(Educe, Serialize, Deserialize)]
#[educe(Clone(bound()), Debug(bound()), PartialEq(bound()), Eq)]
#[serde(bound = "")]
pub struct Path<T: NetworkSystem + ?Sized> {
    hops: Vec<T::NodeId>,
    total_cost: Cost,
}

impl<T: NetworkSystem> Path<T> {
    /// `hops` must be non-empty and ordered source first.
    pub(crate) fn new(hops: Vec<T::NodeId>, total_cost: Cost) -> Self {
        Path { hops, total_cost }
    }

    pub fn hops(&self) -> &[T::NodeId] {
        &self.hops
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    pub fn source(&self) -> &T::NodeId {
        &self.hops[0]
    }

    pub fn destination(&self) -> &T::NodeId {
        &self.hops[self.hops.len() - 1]
    }

    /// Number of links walked, one less than the number of hops.
    pub fn link_count(&self) -> usize {
        self.hops.len() - 1
    }
}

impl<T: NetworkSystem> Display for Path<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{hop}")?;
        }
        write!(f, " (cost {})", self.total_cost)
    }
}
