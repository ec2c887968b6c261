//! Record, field-tree, and store tests.

use rankbase::store::{RecordAccessor, RecordStore, StoreBuilder};
use rankbase::types::{EntityRecord, FieldValue, RankError, Scope};

// ==================== Field Tree Tests ====================

#[test]
fn test_scalar_path_lookup() {
    let record = EntityRecord::builder("python")
        .int("githubRepo stars", 52_000)
        .text("githubRepo", "https://github.com/python/cpython")
        .build();

    assert_eq!(
        record.scalar("githubRepo stars"),
        Some(&FieldValue::Int(52_000))
    );
    assert_eq!(
        record.scalar("githubRepo"),
        Some(&FieldValue::Text(
            "https://github.com/python/cpython".to_string()
        ))
    );
    assert!(record.scalar("githubRepo watchers").is_none());
    assert!(record.scalar("gitlabRepo").is_none());
}

#[test]
fn test_title_falls_back_to_id() {
    let titled = EntityRecord::builder("cpp").title("C++").build();
    assert_eq!(titled.title(), "C++");

    let untitled = EntityRecord::new("forth");
    assert_eq!(untitled.title(), "forth");
}

#[test]
fn test_field_value_coercions() {
    assert_eq!(FieldValue::Int(7).as_i64(), Some(7));
    assert_eq!(FieldValue::Float(2.5).as_i64(), Some(3));
    assert_eq!(FieldValue::Text(" 42 ".into()).as_i64(), Some(42));
    assert_eq!(FieldValue::Text("n/a".into()).as_i64(), None);
    assert_eq!(FieldValue::Text("3.5".into()).as_f64(), Some(3.5));
    assert_eq!(FieldValue::Int(3).as_f64(), Some(3.0));
}

#[test]
fn test_fact_count_counts_nested_nodes() {
    let record = EntityRecord::builder("go")
        .int("appeared", 2009)
        .int("githubRepo stars", 120_000)
        .series("linkedInSkill", [(2020, 50), (2021, 80)])
        .link("c")
        .build();

    // appeared, githubRepo + stars, linkedInSkill + two years, one reference
    assert_eq!(record.fact_count(), 7);
}

#[test]
fn test_fact_count_skips_computed_nodes() {
    let record = EntityRecord::builder("go")
        .int("appeared", 2009)
        .int("rank", 3)
        .computed("rank")
        .build();

    assert_eq!(record.fact_count(), 1);
}

// ==================== Classification Tests ====================

#[test]
fn test_language_classification_deny_list() {
    let pl = EntityRecord::builder("python").entity_type("pl").build();
    let vm = EntityRecord::builder("jvm").entity_type("vm").build();
    let library = EntityRecord::builder("lodash").entity_type("library").build();

    assert!(pl.is_language());
    assert!(!vm.is_language());
    assert!(!library.is_language());
}

#[test]
fn test_untyped_record_classifies_as_language() {
    let untyped = EntityRecord::new("mystery");
    assert!(untyped.is_language());
}

// ==================== Record Store Tests ====================

#[test]
fn test_insert_and_get() {
    let mut store = RecordStore::new();
    store.insert(EntityRecord::new("python")).unwrap();
    store.insert(EntityRecord::new("c")).unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.get("python").is_some());
    assert!(store.get("rust").is_none());
    assert_eq!(store.entity_ids(), vec!["python".to_string(), "c".to_string()]);
}

#[test]
fn test_duplicate_id_rejected() {
    let mut store = RecordStore::new();
    store.insert(EntityRecord::new("python")).unwrap();

    let result = store.insert(EntityRecord::new("python"));
    match result.unwrap_err() {
        RankError::DuplicateEntity(id) => assert_eq!(id, "python"),
        e => panic!("Expected DuplicateEntity error, got {:?}", e),
    }
}

#[test]
fn test_remove_preserves_order() {
    let mut store = StoreBuilder::new()
        .language("a")
        .language("b")
        .language("c")
        .build()
        .unwrap();

    let removed = store.remove("b").unwrap();
    assert_eq!(removed.id(), "b");
    assert_eq!(store.entity_ids(), vec!["a".to_string(), "c".to_string()]);
    assert!(store.get("c").is_some());

    match store.remove("b").unwrap_err() {
        RankError::EntityNotFound(id) => assert_eq!(id, "b"),
        e => panic!("Expected EntityNotFound error, got {:?}", e),
    }
}

#[test]
fn test_scope_membership() {
    let store = StoreBuilder::new()
        .record(EntityRecord::builder("python").entity_type("pl").build())
        .record(EntityRecord::builder("jvm").entity_type("vm").build())
        .build()
        .unwrap();

    assert!(store.is_in_scope("python", Scope::Global));
    assert!(store.is_in_scope("python", Scope::Language));
    assert!(store.is_in_scope("jvm", Scope::Global));
    assert!(!store.is_in_scope("jvm", Scope::Language));
    assert!(!store.is_in_scope("ghost", Scope::Global));
    assert!(!store.is_in_scope("ghost", Scope::Language));
}

#[test]
fn test_time_series_accessor_returns_raw_keys() {
    let store = StoreBuilder::new()
        .record(
            EntityRecord::builder("x")
                .series("linkedInSkill", [(2019, 5), (2021, 12)])
                .int("linkedInSkill someday", 99)
                .build(),
        )
        .build()
        .unwrap();

    let series = store.time_series("x", "linkedInSkill");
    assert_eq!(series.len(), 3);
    assert_eq!(series.get("2021"), Some(&FieldValue::Int(12)));
    assert_eq!(series.get("someday"), Some(&FieldValue::Int(99)));

    assert!(store.time_series("x", "subreddit memberCount").is_empty());
}

#[test]
fn test_accessor_on_missing_entity() {
    let store = RecordStore::new();
    assert!(!store.contains("ghost"));
    assert!(store.scalar("ghost", "website").is_none());
    assert!(store.time_series("ghost", "linkedInSkill").is_empty());
    assert_eq!(store.fact_count("ghost"), 0);
    assert!(store.outbound_references("ghost").is_empty());
}

#[test]
fn test_outbound_references() {
    let store = StoreBuilder::new()
        .record(EntityRecord::builder("python").link("c").link("abc").build())
        .build()
        .unwrap();

    assert_eq!(
        store.outbound_references("python"),
        vec!["c".to_string(), "abc".to_string()]
    );
}
