//! Error types for catalog lookups and collection files

use thiserror::Error;

/// Maximum number of body bytes kept in a decode error
pub const SNIPPET_LEN: usize = 200;

/// Faults raised by the catalog client. Nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidRequest(String),
    /// Search URL could not be built from the encoded query
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),
    /// Network failure or HTTP error status, as reported by reqwest
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// Body matched neither `{"data": [...]}` nor a bare array
    #[error("Decode error: {reason} (body starts with: {snippet})")]
    Decode { reason: String, snippet: String },
    /// Search produced no card with a usable price
    #[error("No price available for: {query}")]
    NoPriceAvailable { query: String },
}

impl CatalogError {
    /// Build a decode error from the last failed attempt and the raw body
    pub fn decode(reason: impl ToString, body: &[u8]) -> Self {
        let end = body.len().min(SNIPPET_LEN);
        CatalogError::Decode {
            reason: reason.to_string(),
            snippet: String::from_utf8_lossy(&body[..end]).into_owned(),
        }
    }
}

/// Errors from reading or writing a collection file
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid collection file: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
