//! Errors raised at the HTTP boundary

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a failure status or `success: false`
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON shape
    #[error("failed to parse response: {0}")]
    Parse(String),

    #[error("invalid API url: {0}")]
    InvalidUrl(String),

    #[error("invalid record id: {0:?}")]
    InvalidId(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
