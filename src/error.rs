//! Error types for gh-orgadmin

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while resolving credentials or talking to GitHub
#[derive(Debug, Error)]
pub enum Error {
    /// Password/token combination is invalid
    #[error("{0}")]
    Credentials(String),

    /// The API client could not be constructed
    #[error("GitHub client unavailable: {0}")]
    ClientUnavailable(String),

    /// Credentials were rejected by GitHub
    #[error("Failed to connect to GitHub: {message}\n{hint}")]
    Auth {
        /// Underlying cause reported by the API
        message: String,
        /// What the user should check
        hint: String,
    },

    /// A GitHub API call failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// Failed to serialize an output record
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write to the output sink
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an authentication error from the underlying cause
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            hint: "Please check username and password or token".to_string(),
        }
    }
}

// octocrab errors are flattened to their message so the captured
// backtrace never reaches the user
impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(octocrab_message(&err))
    }
}

/// Short description of an octocrab error
///
/// API errors yield GitHub's own `message`; transport errors yield their
/// source chain. The top-level `Display` is avoided because several
/// variants append a full backtrace.
pub fn octocrab_message(err: &octocrab::Error) -> String {
    if let octocrab::Error::GitHub { source, .. } = err {
        return source.message.clone();
    }

    let mut parts = Vec::new();
    let mut cause = std::error::Error::source(err);
    while let Some(e) = cause {
        let text = e.to_string();
        if !parts.contains(&text) {
            parts.push(text);
        }
        cause = e.source();
    }

    if parts.is_empty() {
        err.to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string()
    } else {
        parts.join(": ")
    }
}
