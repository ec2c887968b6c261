//! The ranking engine — a populate-once cache over a loaded record set.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::rank::RankEntry;
use crate::signal::SignalExtractor;
use crate::store::RecordAccessor;
use crate::types::{EntityId, RankError, RankResult, Scope, Signals};

use super::rankings::{compute_rankings, Rankings};

/// Why an entity ranks where it does: the four dimension ranks, the
/// composite total, and the raw signals behind them.
#[derive(Debug, Clone, Serialize)]
pub struct RankExplanation {
    /// The entity.
    pub id: EntityId,
    /// The scope these ranks are relative to.
    pub scope: Scope,
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
    /// The raw signals the ranks derive from.
    pub signals: Signals,
}

impl RankExplanation {
    fn from_entry(entry: &RankEntry, scope: Scope) -> Self {
        Self {
            id: entry.id.clone(),
            scope,
            jobs_rank: entry.jobs_rank,
            users_rank: entry.users_rank,
            facts_rank: entry.facts_rank,
            inbound_links_rank: entry.inbound_links_rank,
            total_rank: entry.total_rank,
            signals: entry.signals,
        }
    }
}

impl fmt::Display for RankExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TotalRank: {} Jobs: {} Users: {} Facts: {} Links: {}",
            self.total_rank,
            self.jobs_rank,
            self.users_rank,
            self.facts_rank,
            self.inbound_links_rank
        )
    }
}

/// Owns a record set and memoizes the rankings derived from it.
///
/// The first query computes both orderings under a lock, so concurrent
/// readers never observe duplicate or divergent passes; afterwards every
/// query shares the same immutable `Rankings`. There is no partial
/// invalidation: any store mutation discards the whole cache, since the
/// composite score couples every entity to every other entity in its scope.
pub struct RankingEngine<S: RecordAccessor> {
    store: S,
    extractor: SignalExtractor,
    cache: Mutex<Option<Arc<Rankings>>>,
}

impl<S: RecordAccessor> RankingEngine<S> {
    /// Create an engine over a record set with the default weight table.
    pub fn new(store: S) -> Self {
        Self::with_extractor(store, SignalExtractor::new())
    }

    /// Create an engine with a custom signal extractor.
    pub fn with_extractor(store: S, extractor: SignalExtractor) -> Self {
        Self {
            store,
            extractor,
            cache: Mutex::new(None),
        }
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying store. The cache is discarded first,
    /// so no ordering computed before the mutation can be observed after it.
    pub fn store_mut(&mut self) -> &mut S {
        self.invalidate();
        &mut self.store
    }

    /// Replace the whole record set.
    pub fn reload(&mut self, store: S) {
        self.store = store;
        self.invalidate();
    }

    /// Discard the cached rankings; the next query recomputes from scratch.
    pub fn invalidate(&self) {
        let mut cache = self.lock_cache();
        if cache.take().is_some() {
            log::debug!("Ranking cache invalidated");
        }
    }

    /// The rankings for the current record set, computing them on first use.
    pub fn rankings(&self) -> RankResult<Arc<Rankings>> {
        let mut cache = self.lock_cache();
        if let Some(rankings) = cache.as_ref() {
            return Ok(Arc::clone(rankings));
        }
        let rankings = Arc::new(compute_rankings(&self.store, &self.extractor)?);
        *cache = Some(Arc::clone(&rankings));
        Ok(rankings)
    }

    /// An entity's dense position within a scope's ordering.
    ///
    /// Unknown ids fail with `EntityNotFound`; ids outside the scope fail
    /// with `NotInScope`.
    pub fn rank(&self, id: &str, scope: Scope) -> RankResult<usize> {
        let rankings = self.rankings()?;
        self.scoped_entry(&rankings, id, scope)
            .map(|entry| entry.index)
    }

    /// The entity at a position in a scope's ordering, with circular
    /// navigation: positions below zero resolve to the last entity,
    /// positions past the end to the first.
    pub fn entity_at_rank(&self, position: i64, scope: Scope) -> RankResult<EntityId> {
        let rankings = self.rankings()?;
        rankings
            .index(scope)
            .entry_at(position)
            .map(|entry| entry.id.clone())
            .ok_or(RankError::EmptyScope(scope))
    }

    /// An entity's global standing as a fraction in [0, 1): 0.0 is the top.
    pub fn percentile(&self, id: &str) -> RankResult<f64> {
        let rankings = self.rankings()?;
        if rankings.global.is_empty() {
            return Err(RankError::EmptyScope(Scope::Global));
        }
        let index = self.rank(id, Scope::Global)?;
        Ok(index as f64 / rankings.global.len() as f64)
    }

    /// The full rank breakdown for an entity within a scope.
    pub fn explain(&self, id: &str, scope: Scope) -> RankResult<RankExplanation> {
        let rankings = self.rankings()?;
        self.scoped_entry(&rankings, id, scope)
            .map(|entry| RankExplanation::from_entry(entry, scope))
    }

    /// The previously ranked entity (better by one position), wrapping to
    /// the bottom from the top.
    pub fn previous_ranked(&self, id: &str, scope: Scope) -> RankResult<EntityId> {
        let index = self.rank(id, scope)? as i64;
        self.entity_at_rank(index - 1, scope)
    }

    /// The next ranked entity (worse by one position), wrapping to the top
    /// from the bottom.
    pub fn next_ranked(&self, id: &str, scope: Scope) -> RankResult<EntityId> {
        let index = self.rank(id, scope)? as i64;
        self.entity_at_rank(index + 1, scope)
    }

    /// The best-ranked entries of a scope, top first.
    pub fn top_ranked(&self, scope: Scope, count: usize) -> RankResult<Vec<RankEntry>> {
        let rankings = self.rankings()?;
        Ok(rankings
            .index(scope)
            .entries()
            .iter()
            .take(count)
            .cloned()
            .collect())
    }

    fn scoped_entry<'a>(
        &self,
        rankings: &'a Rankings,
        id: &str,
        scope: Scope,
    ) -> RankResult<&'a RankEntry> {
        match rankings.index(scope).entry(id) {
            Some(entry) => Ok(entry),
            None if rankings.global.index_of(id).is_some() => Err(RankError::NotInScope {
                id: id.to_string(),
                scope,
            }),
            None => Err(RankError::EntityNotFound(id.to_string())),
        }
    }

    fn lock_cache(&self) -> MutexGuard<'_, Option<Arc<Rankings>>> {
        // A poisoned lock can only hold a fully written Option; recover it.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
