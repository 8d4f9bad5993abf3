//! Ticket query error types.

use crate::error::ErrorKind;
use crate::stations::StationError;

/// Errors from an availability query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Resolving a station name failed
    #[error(transparent)]
    Station(#[from] StationError),

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Nothing bookable matched the query
    #[error("no matching train service found")]
    NoService,
}

impl QueryError {
    /// Coarse category for the top-level handler.
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::Station(e) => e.kind(),
            QueryError::Http(_) | QueryError::Api { .. } | QueryError::Json { .. } => {
                ErrorKind::RemoteUnavailable
            }
            QueryError::NoService => ErrorKind::EmptyResult,
        }
    }
}
