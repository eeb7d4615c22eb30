//! Error types for the record store and its backends.

use thiserror::Error;

/// Rejected form input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0:?} is not a valid YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Failure talking to the backing store
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {url} returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    #[error("unreadable response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("database directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Error returned by record store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not reach the backend: {0}")]
    Communication(#[from] BackendError),
}
