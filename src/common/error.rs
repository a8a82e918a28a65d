//! Error types for the flow harness
//!
//! The only fatal condition is an unreadable test-case file: the run aborts
//! before any test executes. Everything else (malformed blocks, failing
//! subprocesses) is handled locally and never surfaces here.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the flow harness
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read test cases from '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a file read error for the given path
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
