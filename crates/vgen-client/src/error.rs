//! Backend client error types.

use thiserror::Error;

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Backend returned {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Invalid response body: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BackendError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn rejected(msg: impl Into<String>) -> Self {
        Self::Rejected(msg.into())
    }
}
