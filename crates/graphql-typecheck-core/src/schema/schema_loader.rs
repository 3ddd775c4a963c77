use crate::file_reader;
use crate::file_reader::ReadFileError;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read the SDL file at `path` and build a [`Schema`] from it.
///
/// Errors report `path` resolved to an absolute path (without touching the
/// filesystem, so a missing file still gets an absolute path).
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema, SchemaError> {
    let path = absolute_path(path.as_ref());
    log::debug!("loading schema from `{}`", path.display());

    let content = file_reader::read_utf8_file(path.as_path()).map_err(|cause| {
        SchemaError::Unreadable {
            path: path.to_owned(),
            cause,
        }
    })?;

    load_schema_str(content.as_str(), Some(path.as_path())).map_err(|cause| {
        SchemaError::Invalid {
            path: path.to_owned(),
            cause,
        }
    })
}

/// Build a [`Schema`] from in-memory SDL text. `path`, when given, is only
/// used to annotate definition locations.
pub fn load_schema_str(
    content: &str,
    path: Option<&Path>,
) -> Result<Schema, SchemaBuildError> {
    SchemaBuilder::new()
        .load_str(path, content)?
        .build()
}

pub(crate) fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema file is missing, is not a regular file, can not be read,
    /// or is not UTF-8.
    #[error("Cannot read GraphQL schema file at '{}': {cause}", path.display())]
    Unreadable {
        path: PathBuf,
        cause: ReadFileError,
    },

    /// The schema text failed to parse or violates a construction rule.
    #[error("Invalid GraphQL schema at '{}': {cause}", path.display())]
    Invalid {
        path: PathBuf,
        cause: SchemaBuildError,
    },
}
impl SchemaError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Unreadable { path, .. } | Self::Invalid { path, .. } => path.as_path(),
        }
    }
}
