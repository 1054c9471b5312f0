//! Mock organization service for testing
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use gh_orgadmin::error::{Error, Result};
use gh_orgadmin::platform::OrgService;
use gh_orgadmin::types::{Member, Team, TeamSummary};
use std::sync::Mutex;

/// In-memory organization service
///
/// Features:
/// - Configurable members and teams for a single organization
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockOrgService {
    login: String,
    org: String,
    members: Vec<Member>,
    teams: Vec<Team>,
    // Call tracking
    authenticate_calls: Mutex<usize>,
    list_members_calls: Mutex<Vec<String>>,
    list_teams_calls: Mutex<Vec<String>>,
    get_team_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_authenticate: Mutex<Option<String>>,
    error_on_get_team: Mutex<Option<String>>,
}

impl MockOrgService {
    /// Create an empty organization `org` visible to `login`
    pub fn new(login: &str, org: &str) -> Self {
        Self {
            login: login.to_string(),
            org: org.to_string(),
            members: Vec::new(),
            teams: Vec::new(),
            authenticate_calls: Mutex::new(0),
            list_members_calls: Mutex::new(Vec::new()),
            list_teams_calls: Mutex::new(Vec::new()),
            get_team_calls: Mutex::new(Vec::new()),
            error_on_authenticate: Mutex::new(None),
            error_on_get_team: Mutex::new(None),
        }
    }

    /// Set the member collection
    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// Set the team collection
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    // === Error injection methods ===

    /// Make `authenticate` return an auth error
    pub fn fail_authenticate(&self, msg: &str) {
        *self.error_on_authenticate.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `get_team` return an API error
    pub fn fail_get_team(&self, msg: &str) {
        *self.error_on_get_team.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification methods ===

    /// Number of `authenticate` calls
    pub fn authenticate_count(&self) -> usize {
        *self.authenticate_calls.lock().unwrap()
    }

    /// Orgs passed to `list_members`
    pub fn get_list_members_calls(&self) -> Vec<String> {
        self.list_members_calls.lock().unwrap().clone()
    }

    /// Orgs passed to `list_teams`
    pub fn get_list_teams_calls(&self) -> Vec<String> {
        self.list_teams_calls.lock().unwrap().clone()
    }

    /// Slugs passed to `get_team`
    pub fn get_team_calls(&self) -> Vec<String> {
        self.get_team_calls.lock().unwrap().clone()
    }

    fn check_org(&self, org: &str) -> Result<()> {
        if org == self.org {
            Ok(())
        } else {
            Err(Error::GitHubApi(format!("Not Found: {org}")))
        }
    }
}

#[async_trait]
impl OrgService for MockOrgService {
    async fn authenticate(&self) -> Result<String> {
        *self.authenticate_calls.lock().unwrap() += 1;

        if let Some(msg) = self.error_on_authenticate.lock().unwrap().as_ref() {
            return Err(Error::auth(msg));
        }

        Ok(self.login.clone())
    }

    async fn list_members(&self, org: &str) -> Result<Vec<Member>> {
        self.list_members_calls.lock().unwrap().push(org.to_string());
        self.check_org(org)?;
        Ok(self.members.clone())
    }

    async fn list_teams(&self, org: &str) -> Result<Vec<TeamSummary>> {
        self.list_teams_calls.lock().unwrap().push(org.to_string());
        self.check_org(org)?;
        Ok(self
            .teams
            .iter()
            .map(|t| TeamSummary {
                id: t.id,
                slug: t.slug.clone(),
                name: t.name.clone(),
                description: t.description.clone(),
            })
            .collect())
    }

    async fn get_team(&self, org: &str, slug: &str) -> Result<Team> {
        self.get_team_calls.lock().unwrap().push(slug.to_string());
        self.check_org(org)?;

        if let Some(msg) = self.error_on_get_team.lock().unwrap().as_ref() {
            return Err(Error::GitHubApi(msg.clone()));
        }

        self.teams
            .iter()
            .find(|t| t.slug == slug)
            .cloned()
            .ok_or_else(|| Error::GitHubApi(format!("Not Found: team {slug}")))
    }
}
