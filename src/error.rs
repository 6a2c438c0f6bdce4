//! Error type shared by every Twitter/X API operation.
//!
//! Transport failures, unexpected status codes and malformed response bodies
//! all surface as a [`TweetError`] so the interactive session can report the
//! failure and keep running.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TweetError>;

#[derive(Error, Debug)]
pub enum TweetError {
    /// Network, connection or timeout failure while talking to the API.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The signed request could not be built or sent.
    #[error("signed request failed: {0}")]
    Signed(#[from] reqwest_oauth1::Error),

    /// The API answered with a status code the operation does not accept.
    #[error("Twitter API error for operation '{operation}' ({status}): {detail}")]
    Status {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    /// The response body is not valid JSON.
    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response body is JSON but lacks a required field.
    #[error("response body is missing the `{0}` field")]
    MissingField(&'static str),

    /// The configured API base or a path segment produced an invalid URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The tweet identifier cannot be used as a path segment.
    #[error("invalid tweet ID: {0:?}")]
    InvalidId(String),
}

impl TweetError {
    /// Returns `true` when the API rejected the caller's credentials.
    ///
    /// Missing or wrong keys are never detected locally; they show up here as
    /// a 401 or 403 from the remote service.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, TweetError::Status { status, .. } if *status == 401 || *status == 403)
    }

    /// Returns `true` when no response was received from the API.
    pub fn is_transport(&self) -> bool {
        matches!(self, TweetError::Transport(_) | TweetError::Signed(_))
    }

    /// Returns the HTTP status attached to the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            TweetError::Status { status, .. } => Some(*status),
            TweetError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
