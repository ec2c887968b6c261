//! Fluent API for building populated RecordStore instances.

use crate::types::{EntityRecord, RankResult};

use super::RecordStore;

/// Fluent builder for constructing a `RecordStore`.
pub struct StoreBuilder {
    records: Vec<EntityRecord>,
}

impl StoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a finished record.
    pub fn record(mut self, record: EntityRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Add a minimal record with just an id (classifies as a language).
    pub fn language(self, id: &str) -> Self {
        self.record(EntityRecord::new(id))
    }

    /// Build the final store. Fails on duplicate ids.
    pub fn build(self) -> RankResult<RecordStore> {
        let mut store = RecordStore::new();
        for record in self.records {
            store.insert(record)?;
        }
        Ok(store)
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
