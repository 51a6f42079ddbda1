//! Dry-run tracker: real reads, logged-only writes

use crate::error::Result;
use crate::tracker::IssueTracker;
use crate::types::{Comment, Issue, Milestone, RepoConfig};
use async_trait::async_trait;
use tracing::info;

/// Wraps another tracker, forwarding reads and logging mutations instead of
/// performing them
pub struct DryRunTracker<T> {
    inner: T,
}

impl<T: IssueTracker> DryRunTracker<T> {
    /// Wrap `inner`
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// The wrapped tracker
    pub const fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: IssueTracker> IssueTracker for DryRunTracker<T> {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        self.inner.list_milestones().await
    }

    async fn list_issues(&self) -> Result<Vec<Issue>> {
        self.inner.list_issues().await
    }

    async fn list_comments(&self, issue_number: u64) -> Result<Vec<Comment>> {
        self.inner.list_comments(issue_number).await
    }

    async fn label_age_in_days(&self, issue_number: u64, label: &str) -> Result<i64> {
        self.inner.label_age_in_days(issue_number, label).await
    }

    async fn add_label(&self, issue_number: u64, label: &str) -> Result<()> {
        info!(issue = issue_number, label, "[dry run] would add label");
        Ok(())
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<()> {
        info!(issue = issue_number, label, "[dry run] would remove label");
        Ok(())
    }

    async fn lock(&self, issue_number: u64) -> Result<()> {
        info!(issue = issue_number, "[dry run] would lock");
        Ok(())
    }

    async fn unlock(&self, issue_number: u64) -> Result<()> {
        info!(issue = issue_number, "[dry run] would unlock");
        Ok(())
    }

    async fn close(&self, issue_number: u64) -> Result<()> {
        info!(issue = issue_number, "[dry run] would close");
        Ok(())
    }

    async fn reopen(&self, issue_number: u64) -> Result<()> {
        info!(issue = issue_number, "[dry run] would reopen");
        Ok(())
    }

    async fn set_milestone(&self, issue_number: u64, milestone: &Milestone) -> Result<()> {
        info!(issue = issue_number, milestone = %milestone, "[dry run] would set milestone");
        Ok(())
    }

    async fn remove_milestone(&self, issue_number: u64) -> Result<()> {
        info!(issue = issue_number, "[dry run] would remove milestone");
        Ok(())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        info!(issue = issue_number, body, "[dry run] would post comment");
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        self.inner.config()
    }
}
