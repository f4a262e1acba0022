//! Error types for XML loading and field access.

use thiserror::Error;

/// Errors that can occur when loading XML or reading fields from it.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// XML parsing error.
    #[error("XML error: {0}")]
    Xml(String),

    /// A path expression could not be parsed.
    #[error("invalid path expression: {0:?}")]
    InvalidPath(String),

    /// A field that must be numeric held something else.
    #[error("expected integer at {path:?}, got {value:?}")]
    InvalidInteger { path: String, value: String },

    /// A required attribute is absent.
    #[error("<{tag}> is missing required attribute {attribute:?}")]
    MissingAttribute { tag: String, attribute: String },
}

/// Result type for XML operations.
pub type Result<T> = std::result::Result<T, Error>;
