use log::error;
use serde_json::json;

use crate::concepts::path::Path;
use crate::concepts::table::RoutingTable;
use crate::errors::QueryError;
use crate::framework::NetworkSystem;

/// Reconstructs the hop sequence from the table's source to
/// `destination`.
///
/// Walks predecessor entries from the destination back to the root (the
/// entry that is its own predecessor at cost 0), then reverses the walk.
/// The total cost of the returned path is the destination's cumulative
/// cost in the table.
///
/// A walk that leaves the table, exceeds the table size, or reaches a
/// root other than the table's source means the engine produced a cyclic
/// or detached predecessor chain; that is surfaced as
/// [`QueryError::CorruptTable`], never silently recovered.
pub fn trace_to<T: NetworkSystem>(
    table: &RoutingTable<T>,
    destination: &T::NodeId,
) -> Result<Path<T>, QueryError<T>> {
    let total_cost = match table.entries.get(destination) {
        Some(entry) => entry.cost,
        None => return Err(QueryError::Unreachable(destination.clone())),
    };

    let mut hops = vec![destination.clone()];
    let mut cursor = destination.clone();
    // bounded by the table size: a longer walk can only mean a cycle
    for _ in 0..table.entries.len() {
        let entry = match table.entries.get(&cursor) {
            Some(entry) => entry,
            None => {
                error!(
                    "routing table from {} has no entry for predecessor {}",
                    json!(table.source),
                    json!(cursor)
                );
                return Err(QueryError::CorruptTable(destination.clone()));
            }
        };
        if entry.predecessor == cursor {
            if entry.cost != 0 || cursor != table.source {
                error!(
                    "routing table from {} roots at {} with cost {}",
                    json!(table.source),
                    json!(cursor),
                    entry.cost
                );
                return Err(QueryError::CorruptTable(destination.clone()));
            }
            hops.reverse();
            return Ok(Path::new(hops, total_cost));
        }
        cursor = entry.predecessor.clone();
        hops.push(cursor.clone());
    }

    error!(
        "predecessor walk from {} exceeded {} table entries",
        json!(destination),
        table.entries.len()
    );
    Err(QueryError::CorruptTable(destination.clone()))
}
