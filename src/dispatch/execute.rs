//! Action dispatch
//!
//! Authenticates, runs the configured query and writes one line per result.

use crate::dispatch::output::{write_member, write_team};
use crate::dispatch::{Phase, ProgressCallback};
use crate::error::Result;
use crate::platform::OrgService;
use crate::types::{OrgAction, OrgConfig, Team};
use std::io::Write;
use tracing::{debug, info};

/// Outcome of a dispatch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    /// Login the credentials belong to
    pub login: String,
    /// Number of result lines written
    pub written: usize,
}

/// Whether a resolved team passes the parent-team filter
///
/// With no filter every team passes. With a filter only teams whose parent
/// slug equals it pass; top-level teams never do.
pub fn matches_parent(team: &Team, parent_filter: Option<&str>) -> bool {
    parent_filter.is_none_or(|wanted| team.parent_slug() == Some(wanted))
}

/// Keep the teams that pass [`matches_parent`], preserving order
pub fn filter_teams(teams: Vec<Team>, parent_filter: Option<&str>) -> Vec<Team> {
    teams
        .into_iter()
        .filter(|t| matches_parent(t, parent_filter))
        .collect()
}

/// Run the configured action
///
/// Nothing is written to `out` until authentication has succeeded. Any
/// failure after that propagates to the caller as-is.
pub async fn run_action(
    service: &dyn OrgService,
    config: &OrgConfig,
    progress: &dyn ProgressCallback,
    out: &mut impl Write,
) -> Result<DispatchResult> {
    progress.on_phase(Phase::Authenticating).await;
    let login = service.authenticate().await?;
    info!(%login, "authenticated");
    progress.on_authenticated(&login).await;

    let written = match config.action {
        OrgAction::ListMembers => list_members(service, config, progress, out).await?,
        OrgAction::ListTeams => list_teams(service, config, progress, out).await?,
    };

    out.flush()?;
    progress.on_phase(Phase::Complete).await;

    Ok(DispatchResult { login, written })
}

async fn list_members(
    service: &dyn OrgService,
    config: &OrgConfig,
    progress: &dyn ProgressCallback,
    out: &mut impl Write,
) -> Result<usize> {
    progress.on_phase(Phase::FetchingMembers).await;
    let members = service.list_members(&config.org).await?;
    debug!(org = %config.org, count = members.len(), "members fetched");

    progress.on_phase(Phase::Writing).await;
    for member in &members {
        write_member(out, member, config.format)?;
    }

    Ok(members.len())
}

async fn list_teams(
    service: &dyn OrgService,
    config: &OrgConfig,
    progress: &dyn ProgressCallback,
    out: &mut impl Write,
) -> Result<usize> {
    progress.on_phase(Phase::FetchingTeams).await;
    let summaries = service.list_teams(&config.org).await?;
    debug!(org = %config.org, count = summaries.len(), "teams fetched");

    // The listing has no parent or member count, so each team needs its
    // detail record even when no filter is set.
    progress.on_phase(Phase::ResolvingTeams).await;
    let total = summaries.len();
    let mut teams = Vec::with_capacity(total);
    for (i, summary) in summaries.iter().enumerate() {
        let team = service.get_team(&config.org, &summary.slug).await?;
        progress.on_team_resolved(&team, i + 1, total).await;
        teams.push(team);
    }

    let parent = config.parent_team.as_deref();
    let teams = filter_teams(teams, parent);
    if let Some(parent) = parent {
        debug!(parent, kept = teams.len(), total, "applied parent filter");
    }

    progress.on_phase(Phase::Writing).await;
    for team in &teams {
        write_team(out, team, config.format)?;
    }

    Ok(teams.len())
}
