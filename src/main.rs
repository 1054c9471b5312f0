//! gh-orgadmin - GitHub organization admin queries
//!
//! CLI binary for listing the members and teams of a GitHub organization.

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use gh_orgadmin::platform::api_base_uri;
use gh_orgadmin::types::{OrgAction, OrgConfig, OutputFormat};
use std::env;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::style::Stylize;

#[derive(Parser)]
#[command(name = "gh-orgadmin")]
#[command(about = "List GitHub organization members and teams")]
#[command(version)]
struct Cli {
    /// The GitHub account to authenticate as
    #[arg(long)]
    user: String,

    /// Password for the account
    #[arg(long, conflicts_with = "token")]
    password: Option<String>,

    /// Personal access token
    #[arg(long)]
    token: Option<String>,

    /// Organization to query
    #[arg(long)]
    org: String,

    /// Only list teams whose parent team has this slug
    #[arg(long = "parentteam", visible_alias = "parent-team")]
    parent_team: Option<String>,

    /// Action to perform
    #[arg(long, value_enum)]
    action: ActionArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputArg::Text)]
    output: OutputArg,

    /// GitHub Enterprise hostname
    #[arg(long, env = "GH_HOST")]
    host: Option<String>,

    /// Explicit API base URL (overrides --host)
    #[arg(long)]
    api_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActionArg {
    /// List organization members
    #[value(name = "org_list_users")]
    OrgListUsers,
    /// List organization teams
    #[value(name = "org_list_teams")]
    OrgListTeams,
}

impl From<ActionArg> for OrgAction {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::OrgListUsers => Self::ListMembers,
            ActionArg::OrgListTeams => Self::ListTeams,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputArg {
    /// One plain-text result per line
    Text,
    /// One JSON object per line
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Text => Self::Text,
            OutputArg::Json => Self::Json,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    debug!("Tracing initialized with level: {}", level);
}

async fn run(cli: Cli) -> Result<()> {
    let host = cli.host.or_else(|| env::var("GITHUB_HOST").ok());
    let base_uri = api_base_uri(host.as_deref(), cli.api_url.as_deref());

    let config = OrgConfig {
        org: cli.org,
        parent_team: cli.parent_team,
        action: cli.action.into(),
        format: cli.output.into(),
    };

    cli::run_query(cli::QueryOptions {
        user: cli.user,
        password: cli.password,
        token: cli.token,
        config,
        base_uri,
        verbose: cli.verbose > 0,
    })
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            anstream::eprintln!("{}: {e}", "error".error());
            ExitCode::FAILURE
        }
    }
}
