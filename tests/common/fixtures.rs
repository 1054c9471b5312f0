//! Test data factories for gh-orgadmin types
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use gh_orgadmin::types::{Member, OrgAction, OrgConfig, OutputFormat, ParentTeam, Team};

/// Create a member with the given login
pub fn make_member(login: &str) -> Member {
    Member {
        login: login.to_string(),
    }
}

/// Create members from a list of logins
pub fn make_members(logins: &[&str]) -> Vec<Member> {
    logins.iter().map(|l| make_member(l)).collect()
}

/// Create a top-level team
pub fn make_team(id: u64, slug: &str) -> Team {
    Team {
        id,
        slug: slug.to_string(),
        name: format!("Team {slug}"),
        description: Some(format!("The {slug} team")),
        members_count: id * 2,
        parent: None,
    }
}

/// Create a team nested under `parent`
pub fn make_child_team(id: u64, slug: &str, parent: &str) -> Team {
    Team {
        parent: Some(ParentTeam {
            slug: parent.to_string(),
        }),
        ..make_team(id, slug)
    }
}

/// Config for listing members of `org`
pub fn members_config(org: &str) -> OrgConfig {
    OrgConfig::new(org, OrgAction::ListMembers)
}

/// Config for listing teams of `org`, optionally filtered by parent
pub fn teams_config(org: &str, parent: Option<&str>) -> OrgConfig {
    OrgConfig {
        parent_team: parent.map(String::from),
        ..OrgConfig::new(org, OrgAction::ListTeams)
    }
}

/// Same config with JSON output
pub fn as_json(config: OrgConfig) -> OrgConfig {
    OrgConfig {
        format: OutputFormat::Json,
        ..config
    }
}
