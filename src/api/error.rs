//! Backend Error Types
//!
//! Every way a backend call can fail. The user never sees these kinds
//! separately; they are kept for logging and tests.

use thiserror::Error;

/// Errors from talking to the plant backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout...
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Backend answered `success: false`
    #[error("Backend rejected request: {0}")]
    Rejected(String),

    /// Body was not the expected JSON
    #[error("Parse error: {0}")]
    Decode(String),

    /// Request could not be built
    #[error("Request build error: {0}")]
    Request(String),
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Request(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
