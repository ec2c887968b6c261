//! In-memory record store — the reference `RecordAccessor` implementation.

use std::collections::{BTreeMap, HashMap};

use crate::types::{EntityId, EntityRecord, FieldValue, RankError, RankResult, Scope};

use super::RecordAccessor;

/// Insertion-ordered, in-memory collection of entity records.
pub struct RecordStore {
    /// All records, in insertion order. This order is the ranking tie-break.
    records: Vec<EntityRecord>,
    /// Id -> slot in `records`.
    by_id: HashMap<EntityId, usize>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a record. Ids are unique; duplicates are rejected.
    pub fn insert(&mut self, record: EntityRecord) -> RankResult<()> {
        if self.by_id.contains_key(record.id()) {
            return Err(RankError::DuplicateEntity(record.id().to_string()));
        }
        self.by_id.insert(record.id().to_string(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Remove a record by id. Later records keep their relative order.
    pub fn remove(&mut self, id: &str) -> RankResult<EntityRecord> {
        let slot = self
            .by_id
            .remove(id)
            .ok_or_else(|| RankError::EntityNotFound(id.to_string()))?;
        let removed = self.records.remove(slot);
        for (i, record) in self.records.iter().enumerate().skip(slot) {
            self.by_id.insert(record.id().to_string(), i);
        }
        Ok(removed)
    }

    /// Get a record by id (immutable).
    pub fn get(&self, id: &str) -> Option<&EntityRecord> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    /// Get a record by id (mutable).
    pub fn get_mut(&mut self, id: &str) -> Option<&mut EntityRecord> {
        let slot = *self.by_id.get(id)?;
        Some(&mut self.records[slot])
    }

    /// All records, in enumeration order.
    pub fn records(&self) -> &[EntityRecord] {
        &self.records
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordAccessor for RecordStore {
    fn entity_ids(&self) -> Vec<EntityId> {
        self.records.iter().map(|r| r.id().to_string()).collect()
    }

    fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    fn is_in_scope(&self, id: &str, scope: Scope) -> bool {
        match scope {
            Scope::Global => self.contains(id),
            Scope::Language => self.get(id).map(EntityRecord::is_language).unwrap_or(false),
        }
    }

    fn scalar(&self, id: &str, path: &str) -> Option<FieldValue> {
        self.get(id)?.scalar(path).cloned()
    }

    fn time_series(&self, id: &str, path: &str) -> BTreeMap<String, FieldValue> {
        let mut series = BTreeMap::new();
        if let Some(node) = self.get(id).and_then(|record| record.field(path)) {
            for (key, child) in &node.children {
                if let Some(value) = &child.value {
                    series.insert(key.clone(), value.clone());
                }
            }
        }
        series
    }

    fn fact_count(&self, id: &str) -> usize {
        self.get(id).map(EntityRecord::fact_count).unwrap_or(0)
    }

    fn outbound_references(&self, id: &str) -> Vec<EntityId> {
        self.get(id)
            .map(|record| record.references().to_vec())
            .unwrap_or_default()
    }
}
