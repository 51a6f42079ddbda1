//! Command-line interface

mod context;
mod run;

pub use context::CommandContext;
pub use run::run_update;

use clap::Parser;
use std::path::PathBuf;
use update_issues::tracker::DEFAULT_API_URL;

/// Maintain GitHub issues: reopen, archive, stale-close, ping and milestone upkeep
#[derive(Parser)]
#[command(name = "update-issues", version, about)]
pub struct Cli {
    /// Repository to maintain, as owner/name
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repo: String,

    /// GitHub token with issues write access
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// REST API base URL (for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// TOML policy file overriding thresholds and bot texts
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log what would change without touching any issue
    #[arg(long)]
    pub dry_run: bool,

    /// Log every API call
    #[arg(short, long)]
    pub verbose: bool,
}
