//! Authentication for GitHub
//!
//! Supports basic auth (username + password) and personal access tokens.

mod github;

pub use github::{resolve_github_auth, GitHubAuthConfig};

use std::fmt;

/// GitHub credentials
///
/// Exactly one credential mode is ever present; the enum makes holding both
/// a password and a token unrepresentable.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password (HTTP basic auth)
    Basic {
        /// Account login
        username: String,
        /// Account password
        password: String,
    },
    /// Personal access token
    Token(String),
}

impl Credentials {
    /// Short name of the credential mode, safe to log
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "password",
            Self::Token(_) => "token",
        }
    }
}

// Secrets never reach logs or error output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"********")
                .finish(),
            Self::Token(_) => f.debug_tuple("Token").field(&"********").finish(),
        }
    }
}
