//! Error types for catalog loading.

use std::path::PathBuf;

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching a font catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request could not be sent or its body could not be read.
    #[error("Failed to fetch catalog from '{url}': {source}")]
    Http { url: String, source: reqwest::Error },

    /// Server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: reqwest::StatusCode },

    /// Failed to read a local catalog file.
    #[error("Failed to read catalog file '{path}': {source}")]
    Io { path: PathBuf, source: std::io::Error },

    /// Body looked like JSON but did not match a known catalog shape.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
