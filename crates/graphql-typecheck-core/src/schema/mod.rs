#[allow(clippy::module_inception)]
mod schema;
mod schema_builder;
mod schema_cache;
mod schema_loader;
mod type_validation_error;

pub use schema::Schema;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use schema_cache::SchemaCache;
pub use schema_loader::load_schema;
pub use schema_loader::load_schema_str;
pub use schema_loader::SchemaError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
