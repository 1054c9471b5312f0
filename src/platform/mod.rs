//! Platform services for organization queries
//!
//! Provides the read-only interface the dispatcher runs against.

mod factory;
mod github;

pub use factory::{api_base_uri, create_org_service};
pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Member, Team, TeamSummary};
use async_trait::async_trait;

/// Organization service trait
///
/// This trait abstracts the GitHub API so dispatch logic can be exercised
/// against an in-memory implementation.
#[async_trait]
pub trait OrgService: Send + Sync {
    /// Validate the credentials and return the authenticated login
    async fn authenticate(&self) -> Result<String>;

    /// List all members of an organization
    async fn list_members(&self, org: &str) -> Result<Vec<Member>>;

    /// List all teams of an organization
    async fn list_teams(&self, org: &str) -> Result<Vec<TeamSummary>>;

    /// Fetch the full record for a team
    async fn get_team(&self, org: &str, slug: &str) -> Result<Team>;
}
