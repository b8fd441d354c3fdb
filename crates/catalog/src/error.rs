//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or saving the movie document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The persisted document does not exist yet
    #[error("Movie document not found: {path}")]
    Missing { path: String },

    /// I/O error occurred while reading or writing the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document exists but is not valid structured data
    #[error("Malformed movie document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
