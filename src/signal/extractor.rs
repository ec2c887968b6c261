//! Signal extraction — sparse record fields become the four ranking signals.

use std::collections::BTreeMap;

use crate::store::RecordAccessor;
use crate::types::{FieldValue, Signals};

use super::weights::{FieldWeight, SignalWeights};

/// The value at the numerically largest year key of a raw series mapping.
///
/// Keys that do not parse as integers are excluded from the max computation;
/// if none parse, or the series is empty, the result is 0. Values coerce
/// leniently and read 0 when non-numeric.
pub fn latest_series_value(series: &BTreeMap<String, FieldValue>) -> i64 {
    series
        .iter()
        .filter_map(|(key, value)| key.trim().parse::<i64>().ok().map(|year| (year, value)))
        .max_by_key(|(year, _)| *year)
        .and_then(|(_, value)| value.as_i64())
        .unwrap_or(0)
}

/// Computes per-entity ranking signals from record fields.
pub struct SignalExtractor {
    weights: SignalWeights,
}

impl SignalExtractor {
    /// Create an extractor with the default weight table.
    pub fn new() -> Self {
        Self {
            weights: SignalWeights::default(),
        }
    }

    /// Create an extractor with a custom weight table.
    pub fn with_weights(weights: SignalWeights) -> Self {
        Self { weights }
    }

    /// The active weight table.
    pub fn weights(&self) -> &SignalWeights {
        &self.weights
    }

    /// Latest value of a time-series field on an entity.
    pub fn latest(&self, store: &impl RecordAccessor, id: &str, path: &str) -> i64 {
        latest_series_value(&store.time_series(id, path))
    }

    /// Estimated user count for an entity: latest time-series values plus
    /// direct numeric fields plus the custom per-field weights, summed and
    /// rounded. Absent fields contribute 0.
    pub fn estimate_users(&self, store: &impl RecordAccessor, id: &str) -> u64 {
        let mut total = 0.0_f64;

        for path in &self.weights.user_series_fields {
            total += self.latest(store, id, path) as f64;
        }

        for path in &self.weights.user_direct_fields {
            total += store
                .scalar(id, path)
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
        }

        for (path, weight) in &self.weights.user_custom_fields {
            let value = match store.scalar(id, path) {
                Some(value) => value,
                None => continue,
            };
            total += match weight {
                FieldWeight::Flat(amount) => *amount as f64,
                FieldWeight::Scaled(factor) => value.as_f64().unwrap_or(0.0) * factor,
            };
        }

        total.round().max(0.0) as u64
    }

    /// Estimated job openings: a fixed fraction of the latest skill count
    /// plus the latest job-board posting count.
    pub fn estimate_jobs(&self, store: &impl RecordAccessor, id: &str) -> u64 {
        let skill = self.latest(store, id, &self.weights.job_skill_field) as f64;
        let postings = self.latest(store, id, &self.weights.job_board_field);
        let estimate = (skill * self.weights.job_skill_ratio).round() as i64 + postings;
        estimate.max(0) as u64
    }

    /// Assemble all four signals for an entity. The inbound count comes from
    /// the caller, which has inverted the whole record set's references.
    pub fn extract(&self, store: &impl RecordAccessor, id: &str, inbound_links: usize) -> Signals {
        Signals {
            jobs: self.estimate_jobs(store, id),
            users: self.estimate_users(store, id),
            facts: store.fact_count(id) as u64,
            inbound_links: inbound_links as u64,
        }
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}
