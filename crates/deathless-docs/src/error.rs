//! Error types for document generation.

use thiserror::Error;

/// Errors that can occur when generating or writing documents.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Game data error.
    #[error("{0}")]
    Data(#[from] deathless_data::Error),
}

/// Result type for document generation.
pub type Result<T> = std::result::Result<T, Error>;
