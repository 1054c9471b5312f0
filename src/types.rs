//! Core types for gh-orgadmin

use serde::{Deserialize, Serialize};
use std::fmt;

/// An organization member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// GitHub login
    pub login: String,
}

/// A team entry as returned by the team listing
///
/// The listing omits member counts and parent information, so every summary
/// has to be resolved into a [`Team`] before it can be filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Numeric team ID
    pub id: u64,
    /// URL-safe team slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Team description
    #[serde(default)]
    pub description: Option<String>,
}

/// Reference to a parent team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentTeam {
    /// Parent team slug
    pub slug: String,
}

/// Full team record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Numeric team ID
    pub id: u64,
    /// URL-safe team slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Team description
    #[serde(default)]
    pub description: Option<String>,
    /// Number of direct members
    #[serde(default)]
    pub members_count: u64,
    /// Parent team, if nested
    #[serde(default)]
    pub parent: Option<ParentTeam>,
}

impl Team {
    /// Slug of the parent team, if any
    pub fn parent_slug(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.slug.as_str())
    }
}

/// Which query to run against the organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgAction {
    /// List organization members
    ListMembers,
    /// List organization teams
    ListTeams,
}

impl fmt::Display for OrgAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListMembers => write!(f, "org_list_users"),
            Self::ListTeams => write!(f, "org_list_teams"),
        }
    }
}

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text, one result per line
    #[default]
    Text,
    /// JSON Lines, one object per result
    Json,
}

/// Query configuration
#[derive(Debug, Clone)]
pub struct OrgConfig {
    /// Organization login
    pub org: String,
    /// Only list teams nested directly under this parent slug
    pub parent_team: Option<String>,
    /// Action to perform
    pub action: OrgAction,
    /// Output format
    pub format: OutputFormat,
}

impl OrgConfig {
    /// Create a text-output config with no parent filter
    pub fn new(org: impl Into<String>, action: OrgAction) -> Self {
        Self {
            org: org.into(),
            parent_team: None,
            action,
            format: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_deserializes_without_parent() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "id": 7,
            "slug": "core",
            "name": "Core",
            "description": null,
            "members_count": 3,
            "parent": null,
            "privacy": "closed"
        }))
        .unwrap();

        assert_eq!(team.parent_slug(), None);
        assert_eq!(team.description, None);
        assert_eq!(team.members_count, 3);
    }

    #[test]
    fn test_team_parent_slug() {
        let team: Team = serde_json::from_value(serde_json::json!({
            "id": 8,
            "slug": "infra",
            "name": "Infra",
            "description": "Platform infra",
            "members_count": 4,
            "parent": { "id": 1, "slug": "engineering", "name": "Engineering" }
        }))
        .unwrap();

        assert_eq!(team.parent_slug(), Some("engineering"));
    }

    #[test]
    fn test_action_display_matches_flag_values() {
        assert_eq!(OrgAction::ListMembers.to_string(), "org_list_users");
        assert_eq!(OrgAction::ListTeams.to_string(), "org_list_teams");
    }
}
