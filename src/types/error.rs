//! Error types for the movie catalog library.

use thiserror::Error;

/// All errors that can occur in the movie catalog library.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset root is not a JSON array.
    #[error("Dataset root must be a JSON array")]
    NotAnArray,

    /// A record is missing a field or has a field of the wrong type.
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    /// A record carries a non-positive identifier.
    #[error("Invalid movie ID {id} at index {index}: IDs must be positive")]
    InvalidId { index: usize, id: i64 },

    /// A movie ID argument that is not an integer.
    #[error("Invalid movie ID format: {0:?} (use numbers only)")]
    InvalidIdFormat(String),

    /// Movie not found by ID.
    #[error("Movie ID {0} not found")]
    MovieNotFound(i64),

    /// A search request with no usable criterion.
    #[error("At least one of name, id or genre is required")]
    InvalidSearch,

    /// Malformed configuration file.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
