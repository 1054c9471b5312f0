//! Query command - authenticate and list organization members or teams

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use gh_orgadmin::auth::resolve_github_auth;
use gh_orgadmin::dispatch::{run_action, ProgressCallback};
use gh_orgadmin::error::Result;
use gh_orgadmin::platform::create_org_service;
use gh_orgadmin::types::OrgConfig;
use std::io::{self, BufWriter};

/// Flag values for a single query run
pub struct QueryOptions {
    /// Account login
    pub user: String,
    /// Password, mutually exclusive with `token`
    pub password: Option<String>,
    /// Personal access token, mutually exclusive with `password`
    pub token: Option<String>,
    /// Organization and action to run
    pub config: OrgConfig,
    /// API root override
    pub base_uri: Option<String>,
    /// Show status lines on stderr
    pub verbose: bool,
}

/// Run a query and write results to stdout
pub async fn run_query(options: QueryOptions) -> Result<()> {
    // Credentials and client are settled before any request goes out
    let auth = resolve_github_auth(&options.user, options.password, options.token)?;
    let service = create_org_service(&auth, options.base_uri.as_deref())?;

    let progress = CliProgress::new(options.verbose);
    progress
        .on_message(&format!(
            "Running {} for {}",
            options.config.action,
            options.config.org.accent()
        ))
        .await;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_action(service.as_ref(), &options.config, &progress, &mut out).await?;

    Ok(())
}
