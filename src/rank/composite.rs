//! Composite scoring — drop the worst dimension, sum the rest, order densely.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{Dimension, EntityId, Signals};

use super::dimension::competition_ranks;

/// One entity's full ranking record within a scope.
#[derive(Debug, Clone, Serialize)]
pub struct RankEntry {
    /// The entity.
    pub id: EntityId,
    /// The raw signals the ranks derive from.
    pub signals: Signals,
    /// Competition rank along the jobs dimension.
    pub jobs_rank: usize,
    /// Competition rank along the users dimension.
    pub users_rank: usize,
    /// Competition rank along the facts dimension.
    pub facts_rank: usize,
    /// Competition rank along the inbound-links dimension.
    pub inbound_links_rank: usize,
    /// Sum of the three best dimension ranks.
    pub total_rank: usize,
    /// Final dense position in the scope's ordering.
    pub index: usize,
}

impl RankEntry {
    /// The competition rank along one dimension.
    pub fn dimension_rank(&self, dimension: Dimension) -> usize {
        match dimension {
            Dimension::Jobs => self.jobs_rank,
            Dimension::Users => self.users_rank,
            Dimension::Facts => self.facts_rank,
            Dimension::InboundLinks => self.inbound_links_rank,
        }
    }
}

/// Sum of the three lowest of the four dimension ranks. Dropping the single
/// worst dimension keeps one badly estimated or data-sparse signal from
/// anchoring an otherwise strong entity to the bottom.
pub fn composite_rank(dimension_ranks: [usize; 4]) -> usize {
    let mut sorted = dimension_ranks;
    sorted.sort_unstable();
    sorted[0] + sorted[1] + sorted[2]
}

/// Rank one scope: four competition rankings, composite totals, then a
/// stable sort by total. `entities` must be in enumeration order; that order
/// is the tie-break for equal totals. Returned entries carry their dense
/// 0-based index and come back sorted by it.
pub fn build_entries(entities: &[(EntityId, Signals)]) -> Vec<RankEntry> {
    let jobs = ranks_for(entities, Dimension::Jobs);
    let users = ranks_for(entities, Dimension::Users);
    let facts = ranks_for(entities, Dimension::Facts);
    let inbound = ranks_for(entities, Dimension::InboundLinks);

    let mut entries: Vec<RankEntry> = entities
        .iter()
        .map(|(id, signals)| {
            let jobs_rank = jobs[id];
            let users_rank = users[id];
            let facts_rank = facts[id];
            let inbound_links_rank = inbound[id];
            RankEntry {
                id: id.clone(),
                signals: *signals,
                jobs_rank,
                users_rank,
                facts_rank,
                inbound_links_rank,
                total_rank: composite_rank([jobs_rank, users_rank, facts_rank, inbound_links_rank]),
                index: 0,
            }
        })
        .collect();

    entries.sort_by_key(|entry| entry.total_rank);
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.index = index;
    }
    entries
}

fn ranks_for(entities: &[(EntityId, Signals)], dimension: Dimension) -> HashMap<EntityId, usize> {
    let values: Vec<(EntityId, u64)> = entities
        .iter()
        .map(|(id, signals)| (id.clone(), signals.get(dimension)))
        .collect();
    competition_ranks(&values)
}
