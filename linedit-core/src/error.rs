//! Error types for file operations.

use thiserror::Error;

/// Errors that can occur while operating on the target file.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File already exists: {0}")]
    AlreadyExists(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;
