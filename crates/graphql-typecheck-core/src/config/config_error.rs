use crate::file_reader::ReadFileError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file at '{}': {cause}", path.display())]
    Unreadable {
        path: PathBuf,
        cause: ReadFileError,
    },

    /// The file is not valid JSON or does not have the expected shape.
    /// `json_path` points at the offending value (e.g.
    /// `gqlOperations[1].schemaFilePath`).
    #[error("Malformed configuration at `{json_path}`: {message}")]
    Malformed {
        json_path: String,
        message: String,
    },

    #[error("Invalid configuration entry `gqlOperations[{index}]`: {reason}")]
    InvalidEntry {
        index: usize,
        reason: &'static str,
    },
}
