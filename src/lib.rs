//! Rankbase — multi-signal ranking and index engine for sparse entity records.
//!
//! Aggregates noisy per-entity signals (estimated users, estimated job
//! openings, recorded facts, inbound cross-references) into per-dimension
//! competition ranks, combines them into an outlier-tolerant composite
//! ordering, and serves bidirectional rank lookups over the full record set
//! and the language-only subset.

pub mod engine;
pub mod index;
pub mod rank;
pub mod signal;
pub mod store;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{compute_rankings, RankExplanation, RankingEngine, Rankings};
pub use index::RankIndex;
pub use rank::{build_entries, competition_ranks, composite_rank, RankEntry};
pub use signal::{
    inbound_references, latest_series_value, FieldWeight, SignalExtractor, SignalWeights,
};
pub use store::{RecordAccessor, RecordStore, StoreBuilder};
pub use types::{
    now_micros, Dimension, EntityId, EntityRecord, EntityRecordBuilder, FieldNode, FieldValue,
    RankError, RankResult, Scope, Signals,
};
