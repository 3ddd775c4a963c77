use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a UTF-8 text file (a schema or a query document) from disk.
pub fn read_utf8_file(file_path: impl AsRef<Path>) -> Result<String, ReadFileError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadFileError::NotAFile(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path).map_err(|err| ReadFileError::Io {
        file_path: file_path.to_path_buf(),
        err,
    })?;

    String::from_utf8(bytes).map_err(|err| ReadFileError::NotUtf8 {
        file_path: file_path.to_path_buf(),
        err,
    })
}

#[derive(Debug, Error)]
pub enum ReadFileError {
    #[error("{err}")]
    Io {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("No such file (or the path is a directory)")]
    NotAFile(PathBuf),

    #[error("File content is not valid UTF-8: {err}")]
    NotUtf8 {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },
}
impl ReadFileError {
    pub fn file_path(&self) -> &Path {
        match self {
            Self::Io { file_path, .. }
                | Self::NotAFile(file_path)
                | Self::NotUtf8 { file_path, .. } => file_path.as_path(),
        }
    }
}
