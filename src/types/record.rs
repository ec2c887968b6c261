//! Entity records — sparse field trees with classification and fact counting.

use std::collections::BTreeMap;

use serde::Serialize;

use super::EntityId;

/// Entity types that are NOT languages. Any other type, including records
/// with no type at all, classifies as a language.
const NON_LANGUAGE_TYPES: &[&str] = &[
    "vm",
    "linter",
    "library",
    "webApi",
    "characterEncoding",
    "cloud",
    "editor",
    "filesystem",
    "feature",
    "packageManager",
    "os",
    "application",
    "framework",
    "standard",
    "hashFunction",
    "compiler",
    "decompiler",
    "binaryExecutable",
    "binaryDataFormat",
    "equation",
    "interpreter",
    "computingMachine",
    "dataStructure",
];

/// A scalar field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Coerce to an integer. Floats round, text parses; failures read as absent.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Float(v) => Some(v.round() as i64),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Coerce to a float. Text parses; failures read as absent.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// One node in an entity's field tree: an optional scalar value plus named
/// children. Runtime-computed nodes are flagged non-serializable so they do
/// not inflate the fact count.
#[derive(Debug, Clone, Serialize)]
pub struct FieldNode {
    /// The node's own scalar value, if any.
    pub value: Option<FieldValue>,
    /// Child nodes by name.
    pub children: BTreeMap<String, FieldNode>,
    /// Whether this node counts as part of the record's knowledge.
    pub serializable: bool,
}

impl FieldNode {
    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&FieldNode> {
        self.children.get(name)
    }

    /// Count of serializable nodes in this subtree. The flag is per node, so
    /// a non-serializable node's children still count.
    pub fn fact_count(&self) -> usize {
        let own = usize::from(self.serializable);
        own + self.children.values().map(FieldNode::fact_count).sum::<usize>()
    }
}

impl Default for FieldNode {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
            serializable: true,
        }
    }
}

/// One record in the ranked collection: an opaque id plus a sparse field tree
/// and explicit cross-references to other entities.
///
/// The ranking engine never reads a record directly; it goes through the
/// `RecordAccessor` contract, which this type backs.
#[derive(Debug, Clone, Serialize)]
pub struct EntityRecord {
    id: EntityId,
    title: Option<String>,
    entity_type: Option<String>,
    fields: BTreeMap<String, FieldNode>,
    references: Vec<EntityId>,
}

impl EntityRecord {
    /// Create an empty record.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            entity_type: None,
            fields: BTreeMap::new(),
            references: Vec::new(),
        }
    }

    /// Start a fluent builder.
    pub fn builder(id: impl Into<EntityId>) -> EntityRecordBuilder {
        EntityRecordBuilder::new(id)
    }

    /// The record's unique, immutable id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The display title, falling back to the id.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.id)
    }

    /// The record's declared type, if any.
    pub fn entity_type(&self) -> Option<&str> {
        self.entity_type.as_deref()
    }

    /// Look up a field node by space-separated path.
    pub fn field(&self, path: &str) -> Option<&FieldNode> {
        let mut segments = path.split_whitespace();
        let mut node = self.fields.get(segments.next()?)?;
        for segment in segments {
            node = node.child(segment)?;
        }
        Some(node)
    }

    /// The scalar value at a path, if the node exists and holds one.
    pub fn scalar(&self, path: &str) -> Option<&FieldValue> {
        self.field(path)?.value.as_ref()
    }

    /// Set the scalar value at a path, creating intermediate nodes.
    pub fn set_value(&mut self, path: &str, value: FieldValue) {
        let mut segments = path.split_whitespace();
        let first = match segments.next() {
            Some(segment) => segment,
            None => return,
        };
        let mut node = self.fields.entry(first.to_string()).or_default();
        for segment in segments {
            node = node.children.entry(segment.to_string()).or_default();
        }
        node.value = Some(value);
    }

    /// Flag the node at a path as runtime-computed. No-op for missing paths.
    pub fn mark_computed(&mut self, path: &str) {
        let mut segments = path.split_whitespace();
        let first = match segments.next() {
            Some(segment) => segment,
            None => return,
        };
        let mut node = match self.fields.get_mut(first) {
            Some(node) => node,
            None => return,
        };
        for segment in segments {
            node = match node.children.get_mut(segment) {
                Some(child) => child,
                None => return,
            };
        }
        node.serializable = false;
    }

    /// Declare an outbound cross-reference to another entity.
    pub fn add_reference(&mut self, target: impl Into<EntityId>) {
        self.references.push(target.into());
    }

    /// Outbound cross-references, in declaration order.
    pub fn references(&self) -> &[EntityId] {
        &self.references
    }

    /// Root-level fields.
    pub fn fields(&self) -> &BTreeMap<String, FieldNode> {
        &self.fields
    }

    /// The size of this record's knowledge: serializable nodes across the
    /// whole field tree, plus one per outbound reference.
    pub fn fact_count(&self) -> usize {
        let tree: usize = self.fields.values().map(FieldNode::fact_count).sum();
        tree + self.references.len()
    }

    /// Classify via the non-language deny list. Records with no type are
    /// languages.
    pub fn is_language(&self) -> bool {
        match self.entity_type.as_deref() {
            Some(entity_type) => !NON_LANGUAGE_TYPES.contains(&entity_type),
            None => true,
        }
    }
}

/// Fluent builder for an `EntityRecord`.
pub struct EntityRecordBuilder {
    record: EntityRecord,
}

impl EntityRecordBuilder {
    /// Start a record with the given id.
    pub fn new(id: impl Into<EntityId>) -> Self {
        Self {
            record: EntityRecord::new(id),
        }
    }

    /// Set the display title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = Some(title.into());
        self
    }

    /// Set the entity type used for scope classification.
    pub fn entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.record.entity_type = Some(entity_type.into());
        self
    }

    /// Set an integer field.
    pub fn int(mut self, path: &str, value: i64) -> Self {
        self.record.set_value(path, FieldValue::Int(value));
        self
    }

    /// Set a float field.
    pub fn float(mut self, path: &str, value: f64) -> Self {
        self.record.set_value(path, FieldValue::Float(value));
        self
    }

    /// Set a text field.
    pub fn text(mut self, path: &str, value: impl Into<String>) -> Self {
        self.record.set_value(path, FieldValue::Text(value.into()));
        self
    }

    /// Add a year-keyed time-series field.
    pub fn series<I>(mut self, path: &str, points: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        for (year, value) in points {
            self.record
                .set_value(&format!("{} {}", path, year), FieldValue::Int(value));
        }
        self
    }

    /// Flag the node at a path as runtime-computed.
    pub fn computed(mut self, path: &str) -> Self {
        self.record.mark_computed(path);
        self
    }

    /// Declare an outbound cross-reference to another entity.
    pub fn link(mut self, target: impl Into<EntityId>) -> Self {
        self.record.add_reference(target);
        self
    }

    /// Finish the record.
    pub fn build(self) -> EntityRecord {
        self.record
    }
}
