//! One full ranking pass — both scopes computed from the record set.

use crate::index::RankIndex;
use crate::rank::build_entries;
use crate::signal::{inbound_references, SignalExtractor};
use crate::store::RecordAccessor;
use crate::types::{now_micros, EntityId, RankResult, Scope, Signals};

/// The rankings derived from one record set: an ordering per scope.
pub struct Rankings {
    /// Ordering over every entity.
    pub global: RankIndex,
    /// Ordering over language entities only.
    pub language: RankIndex,
    /// When this pass completed, as Unix epoch microseconds.
    pub built_at: u64,
}

impl Rankings {
    /// The index for a scope.
    pub fn index(&self, scope: Scope) -> &RankIndex {
        match scope {
            Scope::Global => &self.global,
            Scope::Language => &self.language,
        }
    }
}

/// Compute both orderings from scratch.
///
/// Signals are extracted once per entity, in enumeration order; each scope
/// then gets its own competition ranks, composite totals, and dense indices.
/// Fails without producing any ordering if a record holds a cross-reference
/// to a missing entity.
pub fn compute_rankings(
    store: &impl RecordAccessor,
    extractor: &SignalExtractor,
) -> RankResult<Rankings> {
    let started = now_micros();
    let ids = store.entity_ids();
    let inbound = inbound_references(store)?;

    let signals: Vec<(EntityId, Signals)> = ids
        .iter()
        .map(|id| {
            let inbound_count = inbound.get(id).map(Vec::len).unwrap_or(0);
            (id.clone(), extractor.extract(store, id, inbound_count))
        })
        .collect();

    let language: Vec<(EntityId, Signals)> = signals
        .iter()
        .filter(|(id, _)| store.is_in_scope(id, Scope::Language))
        .cloned()
        .collect();

    let rankings = Rankings {
        global: RankIndex::new(build_entries(&signals)),
        language: RankIndex::new(build_entries(&language)),
        built_at: now_micros(),
    };

    log::info!(
        "Ranked {} entities ({} languages) in {} us",
        rankings.global.len(),
        rankings.language.len(),
        rankings.built_at - started
    );

    Ok(rankings)
}
