//! High-level operations — the ranking pass and the caching engine.

pub mod cache;
pub mod rankings;

pub use cache::{RankExplanation, RankingEngine};
pub use rankings::{compute_rankings, Rankings};
