/*!
`linkstate` is an I/O-free link-state routing simulator core.

A [`topology::Topology`] owns the set of nodes and weighted links of a
virtual network. The [`engine`] computes single-source shortest paths over
it, the [`tracer`] turns a routing table into an ordered hop sequence, and
a [`controller::Simulation`] sequences edits and queries over one owned
topology. The crate is generic over the node identifier type through
[`framework::NetworkSystem`].

```
use linkstate::controller::{EditCommand, Simulation};
use linkstate::framework::NetworkSystem;

struct Net;
impl NetworkSystem for Net {
    type NodeId = String;
}

let mut sim = Simulation::<Net>::new();
for id in ["A", "B", "C"] {
    sim.edit(EditCommand::AddNode(id.to_string())).unwrap();
}
sim.edit(EditCommand::AddLink("A".into(), "B".into(), 1)).unwrap();
sim.edit(EditCommand::AddLink("B".into(), "C".into(), 2)).unwrap();

let path = sim.query(&"A".to_string(), &"C".to_string()).unwrap();
assert_eq!(path.total_cost(), 3);
```
*/

pub mod concepts;
pub mod controller;
pub mod engine;
pub mod errors;
pub mod framework;
pub mod topology;
pub mod tracer;
pub mod util;
