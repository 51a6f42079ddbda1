//! Shared command context
//!
//! Turns parsed CLI arguments into a ready tracker and policy.

use super::Cli;
use update_issues::config::Policy;
use update_issues::error::Result;
use update_issues::tracker::{DryRunTracker, GitHubTracker, IssueTracker};
use update_issues::types::RepoConfig;

/// Everything a run needs
///
/// The tracker is boxed so dry runs and live runs share one code path.
pub struct CommandContext {
    /// Tracker service (wrapped for dry runs)
    pub tracker: Box<dyn IssueTracker>,
    /// Rule thresholds and texts
    pub policy: Policy,
}

impl CommandContext {
    /// Create a new command context
    ///
    /// - Load the policy file (or defaults)
    /// - Parse the repository slug
    /// - Create the GitHub tracker, wrapping it for dry runs
    pub fn new(cli: &Cli) -> Result<Self> {
        let policy = Policy::load_or_default(cli.config.as_deref())?;
        let repo = RepoConfig::parse(&cli.repo)?;

        let github = GitHubTracker::new(&cli.token, repo, &cli.api_url)?;
        let tracker: Box<dyn IssueTracker> = if cli.dry_run {
            Box::new(DryRunTracker::new(github))
        } else {
            Box::new(github)
        };

        Ok(Self { tracker, policy })
    }
}
