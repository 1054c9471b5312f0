//! Progress callback trait for interface-agnostic updates
//!
//! Results go to the output sink; everything else a user might want to see
//! while a query runs goes through this trait.

use crate::types::Team;
use async_trait::async_trait;
use std::fmt;

/// Dispatch phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Validating credentials
    Authenticating,
    /// Fetching the member collection
    FetchingMembers,
    /// Fetching the team collection
    FetchingTeams,
    /// Resolving per-team detail records
    ResolvingTeams,
    /// Writing results
    Writing,
    /// Dispatch complete
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Authenticating => "Authenticating",
            Self::FetchingMembers => "Fetching members",
            Self::FetchingTeams => "Fetching teams",
            Self::ResolvingTeams => "Resolving teams",
            Self::Writing => "Writing results",
            Self::Complete => "Done",
        };
        write!(f, "{text}")
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during dispatch.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once credentials have been accepted
    async fn on_authenticated(&self, login: &str);

    /// Called after each team detail record is fetched (1-based index)
    async fn on_team_resolved(&self, team: &Team, index: usize, total: usize);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_authenticated(&self, _login: &str) {}
    async fn on_team_resolved(&self, _team: &Team, _index: usize, _total: usize) {}
    async fn on_message(&self, _message: &str) {}
}
