//! Issue tracker services
//!
//! The rule engine only talks to the tracker through [`IssueTracker`], so the
//! same rules run against GitHub, a dry-run wrapper, or a test fake.

mod dry_run;
mod github;

pub use dry_run::DryRunTracker;
pub use github::{DEFAULT_API_URL, GitHubTracker};

use crate::error::Result;
use crate::types::{Comment, Issue, Milestone, RepoConfig};
use async_trait::async_trait;

/// Tracker operations used by the issue policy runner
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// List open milestones
    async fn list_milestones(&self) -> Result<Vec<Milestone>>;

    /// List all issues, open and closed, excluding pull requests
    async fn list_issues(&self) -> Result<Vec<Issue>>;

    /// List comments on an issue, newest first
    ///
    /// This is the expensive call; rules only make it after their cheaper
    /// label and state checks pass.
    async fn list_comments(&self, issue_number: u64) -> Result<Vec<Comment>>;

    /// Days since `label` was last applied to the issue (0 if never)
    async fn label_age_in_days(&self, issue_number: u64, label: &str) -> Result<i64>;

    /// Add a label to an issue
    async fn add_label(&self, issue_number: u64, label: &str) -> Result<()>;

    /// Remove a label from an issue
    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<()>;

    /// Lock an issue's conversation
    async fn lock(&self, issue_number: u64) -> Result<()>;

    /// Unlock an issue's conversation
    async fn unlock(&self, issue_number: u64) -> Result<()>;

    /// Close an issue
    async fn close(&self, issue_number: u64) -> Result<()>;

    /// Reopen an issue
    async fn reopen(&self, issue_number: u64) -> Result<()>;

    /// Assign a milestone to an issue
    async fn set_milestone(&self, issue_number: u64, milestone: &Milestone) -> Result<()>;

    /// Clear an issue's milestone
    async fn remove_milestone(&self, issue_number: u64) -> Result<()>;

    /// Post a comment on an issue
    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()>;

    /// Get the repository this tracker operates on
    fn config(&self) -> &RepoConfig;
}
