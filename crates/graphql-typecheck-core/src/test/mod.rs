//! Shared fixtures for unit tests across the crate.

use crate::schema::load_schema_str;
use crate::schema::Schema;
use std::path::PathBuf;

pub(crate) const GREETING_SCHEMA: &str = include_str!("fixtures/greeting.graphql");
pub(crate) const LIBRARY_SCHEMA: &str = include_str!("fixtures/library.graphql");

pub(crate) fn fixture_path(file_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("test")
        .join("fixtures")
        .join(file_name)
}

pub(crate) fn greeting_schema() -> Schema {
    load_schema_str(GREETING_SCHEMA, None).expect("greeting fixture is a valid schema")
}

pub(crate) fn library_schema() -> Schema {
    load_schema_str(LIBRARY_SCHEMA, None).expect("library fixture is a valid schema")
}

pub(crate) const INVALID_SCHEMA: &str = include_str!("fixtures/invalid.graphql");

/// The greeting fixture built as though it had been read from `path`, so
/// that definition locations match a schema loaded from disk.
pub(crate) fn greeting_schema_at(path: &std::path::Path) -> Schema {
    load_schema_str(GREETING_SCHEMA, Some(path)).expect("greeting fixture is a valid schema")
}
