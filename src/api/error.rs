//! API Client Error Types
//!
//! Every failure the client can observe while talking to the backend. The
//! page-level fallback methods on [`ApiClient`](super::ApiClient) swallow
//! these; the explicit methods return them.

use thiserror::Error;

/// Errors that can occur when communicating with the academy backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body could not be decoded into the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),

    /// The configured backend origin is not a usable http(s) URL
    #[error("Invalid backend URL: {0}")]
    InvalidBaseUrl(String),
}

impl ClientError {
    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the backend could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

/// Result type for API client operations
pub type ClientResult<T> = Result<T, ClientError>;
