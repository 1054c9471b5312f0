//! CLI progress callback with a stderr spinner

use crate::cli::style::{check, spinner_style, Stylize};
use anstream::eprintln;
use async_trait::async_trait;
use gh_orgadmin::dispatch::{Phase, ProgressCallback};
use gh_orgadmin::types::Team;
use indicatif::ProgressBar;
use std::time::Duration;

/// CLI progress callback
///
/// Draws a spinner on stderr while requests are in flight and clears it
/// before any result line reaches stdout. The spinner hides itself when
/// stderr is not a terminal.
pub struct CliProgress {
    spinner: ProgressBar,
    /// Print status lines (login, completion) in addition to the spinner
    pub verbose: bool,
}

impl CliProgress {
    /// Create progress output for one query run
    pub fn new(verbose: bool) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(80));
        Self { spinner, verbose }
    }

    fn status(&self, line: &str) {
        if self.verbose {
            self.spinner.suspend(|| eprintln!("{line}"));
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Writing => self.spinner.finish_and_clear(),
            Phase::Complete => {
                self.spinner.finish_and_clear();
                self.status(&format!("{} {}", check(), phase.success()));
            }
            _ => self.spinner.set_message(format!("{phase}...")),
        }
    }

    async fn on_authenticated(&self, login: &str) {
        self.status(&format!("{} Authenticated as {}", check(), login.accent()));
    }

    async fn on_team_resolved(&self, team: &Team, index: usize, total: usize) {
        self.spinner.set_message(format!(
            "Resolving teams {} {}",
            format!("({index}/{total})").muted(),
            team.slug.accent()
        ));
    }

    async fn on_message(&self, message: &str) {
        self.status(&message.muted().to_string());
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        // Clear a spinner left running by an early error return
        if !self.spinner.is_finished() {
            self.spinner.finish_and_clear();
        }
    }
}
