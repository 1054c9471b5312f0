//! Platform service factory
//!
//! Creates the organization service from resolved credentials.

use crate::auth::GitHubAuthConfig;
use crate::error::Result;
use crate::platform::{GitHubService, OrgService};
use tracing::debug;

/// Work out the API root from the host and explicit URL options
///
/// An explicit URL wins. A host other than github.com maps to the
/// GitHub Enterprise REST root.
pub fn api_base_uri(host: Option<&str>, api_url: Option<&str>) -> Option<String> {
    if let Some(url) = api_url.filter(|u| !u.is_empty()) {
        return Some(url.trim_end_matches('/').to_string());
    }

    host.map(|h| h.trim().trim_end_matches('/'))
        .filter(|h| !h.is_empty() && *h != "github.com")
        .map(|h| format!("https://{h}/api/v3"))
}

/// Create an organization service
///
/// Only builds the client; no request is sent until the dispatcher calls
/// [`OrgService::authenticate`].
pub fn create_org_service(
    auth: &GitHubAuthConfig,
    base_uri: Option<&str>,
) -> Result<Box<dyn OrgService>> {
    debug!(
        mode = auth.credentials.kind(),
        base_uri = base_uri.unwrap_or("https://api.github.com"),
        "creating GitHub client"
    );
    Ok(Box::new(GitHubService::new(&auth.credentials, base_uri)?))
}
