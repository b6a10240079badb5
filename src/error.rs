//! Error types for Skald client operations.
//!
//! | Kind | Raised when | Recovery |
//! |------|-------------|----------|
//! | `InvalidIdType` | bad `id_type`, before any request is built | fatal to the call |
//! | `Api` | the service answered with a non-success status | fatal to the call |
//! | `Http` | the transport failed (connect, timeout, read) | passed through unchanged |
//! | `Json` | a success body was not the expected JSON | passed through unchanged |
//! | `Config` | client configuration is incomplete | fatal at construction |
//!
//! Malformed frames inside a stream never surface here; the frame decoder
//! drops them.

use thiserror::Error;

use crate::traits::HttpError;

/// Error type for Skald client operations.
#[derive(Debug, Error)]
pub enum SkaldError {
    /// `id_type` was neither `memo_uuid` nor `reference_id`.
    #[error("Invalid id_type: {0}")]
    InvalidIdType(String),

    /// Non-success HTTP status. `message` is the raw response body.
    #[error("Skald API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport failure
    #[error(transparent)]
    Http(HttpError),

    /// Response body could not be deserialized
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SkaldError {
    /// HTTP status for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            SkaldError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpError> for SkaldError {
    /// A streaming call reports its non-success status through the transport;
    /// it is the same API error a buffered call would produce.
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ServerError { status, message } => SkaldError::Api { status, message },
            other => SkaldError::Http(other),
        }
    }
}

/// Result type alias for Skald client operations.
pub type SkaldResult<T> = Result<T, SkaldError>;
