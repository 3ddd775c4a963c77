use crate::schema::SchemaCache;
use crate::schema::SchemaError;
use crate::test;
use std::sync::Arc;

#[test]
fn repeated_lookups_share_one_schema() {
    let cache = SchemaCache::new();
    let path = test::fixture_path("greeting.graphql");

    let first = cache.get_or_load(&path).expect("fixture loads");
    let second = cache.get_or_load(&path).expect("fixture loads");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.len(), 1);
}

#[test]
fn failed_loads_are_not_cached() {
    let cache = SchemaCache::new();
    let err = cache.get_or_load(test::fixture_path("invalid.graphql"))
        .expect_err("schema is invalid");
    assert!(matches!(err, SchemaError::Invalid { .. }));
    assert!(cache.is_empty());
}

#[test]
fn invalidate_forces_a_reload() {
    let cache = SchemaCache::new();
    let path = test::fixture_path("library.graphql");

    let first = cache.get_or_load(&path).expect("fixture loads");
    assert!(cache.invalidate(&path));
    assert!(!cache.invalidate(&path));

    let second = cache.get_or_load(&path).expect("fixture loads");
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(first, second);

    cache.clear();
    assert!(cache.is_empty());
}
