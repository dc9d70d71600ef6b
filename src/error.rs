//! Errors raised while talking to the storefront backend.

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Failure of a single backend API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent, or the response body could not be decoded.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("{method} {path} failed with status {status}")]
    Status {
        method: Method,
        path: String,
        status: StatusCode,
    },
}

impl ApiError {
    /// Status code of the failed response, if the backend answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport(error) => error.status(),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
