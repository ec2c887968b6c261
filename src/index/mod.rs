//! Index structures for rank lookup in both directions.

pub mod rank_index;

pub use rank_index::RankIndex;
