//! gh-orgadmin - GitHub organization admin queries
//!
//! Library for listing the members and teams of a GitHub organization.
//! The binary in `main.rs` is a thin CLI over [`dispatch::run_action`].

pub mod auth;
pub mod dispatch;
pub mod error;
pub mod platform;
pub mod types;
