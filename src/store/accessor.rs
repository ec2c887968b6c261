//! The record-accessor capability contract consumed by the ranking engine.

use std::collections::BTreeMap;

use crate::types::{EntityId, FieldValue, Scope};

/// Read-only capability interface over a loaded record set.
///
/// The ranking engine reads records exclusively through this trait, so
/// different record back-ends can supply entities without the engine
/// depending on their concrete shape.
pub trait RecordAccessor {
    /// All entity ids, in stable enumeration order. This order is the
    /// tie-break for entities with equal composite rank, so it must not
    /// change between calls on an unchanged record set.
    fn entity_ids(&self) -> Vec<EntityId>;

    /// Whether an entity with this id exists.
    fn contains(&self, id: &str) -> bool;

    /// Whether the entity belongs to the given scope.
    fn is_in_scope(&self, id: &str, scope: Scope) -> bool;

    /// Read one optional scalar field by space-separated path.
    fn scalar(&self, id: &str, path: &str) -> Option<FieldValue>;

    /// Read a time-series field as a raw key → value mapping. Keys are
    /// uninterpreted strings; the signal extractor decides which parse as
    /// years. Absent fields yield an empty mapping.
    fn time_series(&self, id: &str, path: &str) -> BTreeMap<String, FieldValue>;

    /// The number of recorded facts for this entity.
    fn fact_count(&self, id: &str) -> usize;

    /// The entity ids this record declares cross-references to.
    fn outbound_references(&self, id: &str) -> Vec<EntityId>;
}
