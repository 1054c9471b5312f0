//! GitHub organization service implementation

use crate::auth::Credentials;
use crate::error::{octocrab_message, Error, Result};
use crate::platform::OrgService;
use crate::types::{Member, Team, TeamSummary};
use async_trait::async_trait;
use octocrab::{Octocrab, Page};
use serde::Serialize;
use tracing::debug;
use urlencoding::encode;

/// Largest page size the GitHub API accepts
const PER_PAGE: u8 = 100;

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
}

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
}

impl GitHubService {
    /// Create a new GitHub service
    ///
    /// `base_uri` overrides the API root (GitHub Enterprise or a test
    /// server); `None` talks to api.github.com.
    pub fn new(credentials: &Credentials, base_uri: Option<&str>) -> Result<Self> {
        let mut builder = match credentials {
            Credentials::Basic { username, password } => {
                Octocrab::builder().basic_auth(username.clone(), password.clone())
            }
            Credentials::Token(token) => Octocrab::builder().personal_token(token.clone()),
        };

        if let Some(uri) = base_uri {
            builder = builder
                .base_uri(uri)
                .map_err(|e| Error::ClientUnavailable(format!("invalid API URL {uri}: {e}")))?;
        }

        let client = builder
            .build()
            .map_err(|e| Error::ClientUnavailable(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch every page of a list endpoint
    async fn get_all<T>(&self, route: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let params = PageParams { per_page: PER_PAGE };
        let first: Page<T> = self.client.get(route, Some(&params)).await?;
        let items = self.client.all_pages(first).await?;
        debug!(route, count = items.len(), "fetched collection");
        Ok(items)
    }
}

#[async_trait]
impl OrgService for GitHubService {
    async fn authenticate(&self) -> Result<String> {
        let user: Member = self
            .client
            .get("/user", None::<&()>)
            .await
            .map_err(|e| Error::auth(octocrab_message(&e)))?;

        Ok(user.login)
    }

    async fn list_members(&self, org: &str) -> Result<Vec<Member>> {
        self.get_all(&format!("/orgs/{}/members", encode(org))).await
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<TeamSummary>> {
        self.get_all(&format!("/orgs/{}/teams", encode(org))).await
    }

    async fn get_team(&self, org: &str, slug: &str) -> Result<Team> {
        let route = format!("/orgs/{}/teams/{}", encode(org), encode(slug));
        let team: Team = self.client.get(&route, None::<&()>).await?;
        Ok(team)
    }
}
