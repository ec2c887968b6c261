//! Inbound-reference inversion over the whole record set.

use std::collections::HashMap;

use crate::store::RecordAccessor;
use crate::types::{EntityId, RankError, RankResult};

/// Invert every record's outbound references into id → referencing sources.
///
/// Every entity gets an entry, so lookups never miss. A reference to an id
/// that is not in the record set aborts the computation with a
/// data-integrity error naming both sides; nothing is silently dropped.
pub fn inbound_references(
    store: &impl RecordAccessor,
) -> RankResult<HashMap<EntityId, Vec<EntityId>>> {
    let ids = store.entity_ids();
    let mut inbound: HashMap<EntityId, Vec<EntityId>> =
        ids.iter().map(|id| (id.clone(), Vec::new())).collect();

    for source in &ids {
        for target in store.outbound_references(source) {
            match inbound.get_mut(&target) {
                Some(sources) => sources.push(source.clone()),
                None => {
                    return Err(RankError::DanglingReference {
                        source: source.clone(),
                        target,
                    })
                }
            }
        }
    }

    Ok(inbound)
}
