//! CLI commands
//!
//! Command implementations for the `gh-orgadmin` binary.

mod progress;
mod query;
pub mod style;

pub use query::{run_query, QueryOptions};
