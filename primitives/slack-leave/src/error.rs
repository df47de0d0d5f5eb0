//! Error types for slack-leave.

use reqwest::StatusCode;

/// Configuration errors, detected before any channel is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("slack token file not found")]
    TokenFileNotFound,

    #[error("exclude channels file not found")]
    ExcludeFileNotFound,

    #[error("invalid userID: {0}")]
    InvalidUserId(String),

    #[error("invalid token")]
    InvalidToken,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by the Slack Web API client.
#[derive(Debug, thiserror::Error)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("slack server error: {0}")]
    Status(StatusCode),

    /// The `error` field of an `ok: false` response, verbatim.
    #[error("{0}")]
    Api(String),
}

/// Errors returned by [`crate::leave::run`].
///
/// Both variants are transparent so the underlying message reaches the
/// caller unchanged.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Slack(#[from] SlackError),

    #[error(transparent)]
    Exclusions(#[from] std::io::Error),
}
