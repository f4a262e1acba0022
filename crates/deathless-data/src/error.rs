//! Error types for loading game data.

use thiserror::Error;

/// Errors that can occur when loading or interpreting game data.
#[derive(Debug, Error)]
pub enum Error {
    /// The config document could not be read or parsed.
    #[error("{0}")]
    Xml(#[from] deathless_xml::Error),

    /// A field of a specific element was malformed.
    #[error("malformed <{tag} key={key:?}>: {source}")]
    Element {
        tag: String,
        key: String,
        #[source]
        source: Box<Error>,
    },

    /// A card type ordinal this version does not know about.
    #[error("card {key:?} has unknown card type {value} (expected 1-5)")]
    UnknownCardType { key: String, value: i32 },

    /// JSON export error.
    #[cfg(feature = "json-export")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for game data operations.
pub type Result<T> = std::result::Result<T, Error>;
