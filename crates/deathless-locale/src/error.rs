//! Error types for locale loading.

use thiserror::Error;

/// Errors that can occur when loading a locale table.
#[derive(Debug, Error)]
pub enum Error {
    /// The locale document could not be read or parsed.
    #[error("{0}")]
    Xml(#[from] deathless_xml::Error),
}

/// Result type for locale operations.
pub type Result<T> = std::result::Result<T, Error>;
