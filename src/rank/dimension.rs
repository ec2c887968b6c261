//! Competition ranking of one signal dimension.

use std::collections::HashMap;

use crate::types::EntityId;

/// Rank one signal across a scope: the highest value gets rank 0, ties share
/// the better rank, and the next distinct value jumps to its sorted position,
/// leaving a gap the size of the tie group minus one.
///
/// An empty input yields an empty mapping; a single entity gets rank 0.
pub fn competition_ranks(values: &[(EntityId, u64)]) -> HashMap<EntityId, usize> {
    let mut sorted: Vec<&(EntityId, u64)> = values.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let mut ranks = HashMap::with_capacity(sorted.len());
    let mut last_value = match sorted.first() {
        Some((_, value)) => *value,
        None => return ranks,
    };
    let mut last_rank = 0;

    for (position, (id, value)) in sorted.iter().enumerate() {
        if *value != last_value {
            last_value = *value;
            last_rank = position;
        }
        ranks.insert(id.clone(), last_rank);
    }

    ranks
}
