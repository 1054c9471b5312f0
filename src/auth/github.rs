//! GitHub credential resolution

use crate::auth::Credentials;
use crate::error::{Error, Result};

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Resolved credentials
    pub credentials: Credentials,
}

/// Resolve credentials from flag values
///
/// Exactly one of `password` and `token` must be given. Nothing here
/// touches the network, so bad combinations are rejected before a client
/// is ever built.
pub fn resolve_github_auth(
    user: &str,
    password: Option<String>,
    token: Option<String>,
) -> Result<GitHubAuthConfig> {
    // Presence, not content, decides exclusivity
    if password.is_some() && token.is_some() {
        return Err(Error::Credentials(
            "parameters are mutually exclusive: password|token".to_string(),
        ));
    }

    let password = password.filter(|p| !p.is_empty());
    let token = token.filter(|t| !t.trim().is_empty());

    let credentials = match (password, token) {
        (Some(password), _) => {
            if user.is_empty() {
                return Err(Error::Credentials(
                    "a username is required for password authentication".to_string(),
                ));
            }
            Credentials::Basic {
                username: user.to_string(),
                password,
            }
        }
        (None, Some(token)) => Credentials::Token(token),
        (None, None) => {
            return Err(Error::Credentials(
                "one of the following is required: password, token".to_string(),
            ));
        }
    };

    Ok(GitHubAuthConfig { credentials })
}
