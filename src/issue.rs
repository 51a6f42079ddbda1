//! Per-issue operations that keep the local snapshot in step with the tracker
//!
//! Every mutator awaits the tracker call first and only then updates the
//! in-memory [`Issue`], so a failed call leaves the snapshot untouched and
//! later rules in the same pass see exactly the effects that landed.

use crate::error::Result;
use crate::labels::Label;
use crate::tracker::IssueTracker;
use crate::types::{Comment, Issue, Milestone};
use std::ops::Deref;

/// An issue bound to the tracker it lives in
pub struct IssueHandle<'a> {
    issue: &'a mut Issue,
    tracker: &'a dyn IssueTracker,
}

impl<'a> IssueHandle<'a> {
    /// Bind `issue` to `tracker`
    pub fn new(issue: &'a mut Issue, tracker: &'a dyn IssueTracker) -> Self {
        Self { issue, tracker }
    }

    /// Comments, newest first, fetched on first use
    pub async fn load_comments(&mut self) -> Result<&[Comment]> {
        if self.issue.comments.is_none() {
            let comments = self.tracker.list_comments(self.issue.number).await?;
            self.issue.comments = Some(comments);
        }
        Ok(self.issue.comments.as_deref().unwrap_or_default())
    }

    /// Days since `label` was applied
    pub async fn label_age_in_days(&mut self, label: Label) -> Result<i64> {
        if let Some(age) = self.issue.label_ages.get(&label) {
            return Ok(*age);
        }
        let age = self
            .tracker
            .label_age_in_days(self.issue.number, label.as_str())
            .await?;
        self.issue.label_ages.insert(label, age);
        Ok(age)
    }

    /// Add a label
    pub async fn add_label(&mut self, label: Label) -> Result<()> {
        self.tracker
            .add_label(self.issue.number, label.as_str())
            .await?;
        if !self.issue.has_label(label) {
            self.issue.labels.push(label.as_str().to_string());
        }
        self.issue.label_ages.insert(label, 0);
        Ok(())
    }

    /// Remove a label
    pub async fn remove_label(&mut self, label: Label) -> Result<()> {
        self.tracker
            .remove_label(self.issue.number, label.as_str())
            .await?;
        self.issue.labels.retain(|l| l != label.as_str());
        self.issue.label_ages.remove(&label);
        Ok(())
    }

    /// Lock the conversation
    pub async fn lock(&mut self) -> Result<()> {
        self.tracker.lock(self.issue.number).await?;
        self.issue.locked = true;
        Ok(())
    }

    /// Unlock the conversation
    pub async fn unlock(&mut self) -> Result<()> {
        self.tracker.unlock(self.issue.number).await?;
        self.issue.locked = false;
        Ok(())
    }

    /// Close the issue
    pub async fn close(&mut self) -> Result<()> {
        self.tracker.close(self.issue.number).await?;
        self.issue.closed = true;
        self.issue.closed_days = 0;
        Ok(())
    }

    /// Reopen the issue
    pub async fn reopen(&mut self) -> Result<()> {
        self.tracker.reopen(self.issue.number).await?;
        self.issue.closed = false;
        self.issue.closed_days = 0;
        Ok(())
    }

    /// Assign a milestone
    pub async fn set_milestone(&mut self, milestone: &Milestone) -> Result<()> {
        self.tracker
            .set_milestone(self.issue.number, milestone)
            .await?;
        self.issue.milestone = Some(milestone.clone());
        Ok(())
    }

    /// Clear the milestone
    pub async fn remove_milestone(&mut self) -> Result<()> {
        self.tracker.remove_milestone(self.issue.number).await?;
        self.issue.milestone = None;
        Ok(())
    }

    /// Post a comment
    pub async fn post_comment(&mut self, body: &str) -> Result<()> {
        self.tracker.create_comment(self.issue.number, body).await?;
        // Cached comments no longer include the newest one
        self.issue.comments = None;
        Ok(())
    }
}

impl Deref for IssueHandle<'_> {
    type Target = Issue;

    fn deref(&self) -> &Issue {
        self.issue
    }
}
