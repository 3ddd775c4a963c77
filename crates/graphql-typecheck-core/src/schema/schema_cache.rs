use crate::schema::load_schema;
use crate::schema::schema_loader::absolute_path;
use crate::schema::Schema;
use crate::schema::SchemaError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// A read-through cache of built [`Schema`]s keyed by absolute file path.
///
/// The cache is owned by its caller and may be shared across threads. Loads
/// happen outside the lock, so two threads missing on the same path at once
/// may both build it; the first to finish wins. Failed loads are not cached.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<PathBuf, Arc<Schema>>>,
}
impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&self) {
        self.schemas.write().clear();
    }

    pub fn get_or_load(&self, path: impl AsRef<Path>) -> Result<Arc<Schema>, SchemaError> {
        let path = absolute_path(path.as_ref());
        if let Some(schema) = self.schemas.read().get(path.as_path()) {
            log::trace!("schema cache hit for `{}`", path.display());
            return Ok(Arc::clone(schema));
        }

        let schema = Arc::new(load_schema(path.as_path())?);
        let mut schemas = self.schemas.write();
        Ok(Arc::clone(schemas.entry(path).or_insert(schema)))
    }

    /// Drop the cached schema for `path` so the next lookup reloads it.
    /// Returns whether anything was cached.
    pub fn invalidate(&self, path: impl AsRef<Path>) -> bool {
        let path = absolute_path(path.as_ref());
        self.schemas.write().remove(path.as_path()).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }
}
