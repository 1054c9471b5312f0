//! Authentication and action dispatch
//!
//! A single linear flow:
//! 1. Authenticate - confirm the credentials against the API
//! 2. Query - fetch members, or teams plus their detail records
//! 3. Output - write one line per result

mod execute;
mod output;
mod progress;

pub use execute::{filter_teams, matches_parent, run_action, DispatchResult};
pub use output::{format_team_line, write_member, write_team};
pub use progress::{NoopProgress, Phase, ProgressCallback};
