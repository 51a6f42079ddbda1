//! Fake issue tracker for testing
//!
//! These are test utilities - not all may be used by every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use update_issues::error::{Error, Result};
use update_issues::labels::Label;
use update_issues::tracker::IssueTracker;
use update_issues::types::{Comment, Issue, Milestone, RepoConfig};

/// One recorded tracker call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    ListComments(u64),
    LabelAge { issue: u64, label: String },
    AddLabel { issue: u64, label: String },
    RemoveLabel { issue: u64, label: String },
    Lock(u64),
    Unlock(u64),
    Close(u64),
    Reopen(u64),
    SetMilestone { issue: u64, title: String },
    RemoveMilestone(u64),
    CreateComment { issue: u64, body: String },
}

impl TrackerCall {
    /// Whether this call changes anything on the tracker
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::ListComments(_) | Self::LabelAge { .. })
    }

    pub fn add_label(issue: u64, label: Label) -> Self {
        Self::AddLabel {
            issue,
            label: label.as_str().to_string(),
        }
    }

    pub fn remove_label(issue: u64, label: Label) -> Self {
        Self::RemoveLabel {
            issue,
            label: label.as_str().to_string(),
        }
    }

    pub fn set_milestone(issue: u64, title: &str) -> Self {
        Self::SetMilestone {
            issue,
            title: title.to_string(),
        }
    }

    pub fn create_comment(issue: u64, body: &str) -> Self {
        Self::CreateComment {
            issue,
            body: body.to_string(),
        }
    }
}

/// Fake tracker that records every call
///
/// Reads return whatever was configured (no comments and a label age of 0
/// by default). Mutations are only recorded; keeping the issue snapshot up
/// to date is the job of `IssueHandle`, which is what the tests exercise.
///
/// Features:
/// - Explicit issue number sequence
/// - Call tracking for verification
/// - Configurable comments and label ages per issue
/// - Error injection for failure path testing
pub struct FakeTracker {
    config: RepoConfig,
    next_issue_number: AtomicU64,
    milestones: Mutex<Vec<Milestone>>,
    issues: Mutex<Vec<Issue>>,
    comments: Mutex<HashMap<u64, Vec<Comment>>>,
    label_ages: Mutex<HashMap<(u64, String), i64>>,
    // Call tracking
    calls: Mutex<Vec<TrackerCall>>,
    // Error injection
    error_on_list_milestones: Mutex<Option<String>>,
    error_on_list_comments: Mutex<Option<String>>,
    error_on_lock: Mutex<Option<String>>,
    error_on_close: Mutex<Option<Error>>,
}

impl FakeTracker {
    /// Create a fake whose issue numbers start at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a fake whose issue numbers start at `first_issue_number`
    pub fn starting_at(first_issue_number: u64) -> Self {
        Self {
            config: RepoConfig {
                owner: "test".to_string(),
                repo: "repo".to_string(),
            },
            next_issue_number: AtomicU64::new(first_issue_number),
            milestones: Mutex::new(Vec::new()),
            issues: Mutex::new(Vec::new()),
            comments: Mutex::new(HashMap::new()),
            label_ages: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            error_on_list_milestones: Mutex::new(None),
            error_on_list_comments: Mutex::new(None),
            error_on_lock: Mutex::new(None),
            error_on_close: Mutex::new(None),
        }
    }

    /// Start building an open issue with the next number in the sequence
    pub fn issue(&self) -> IssueBuilder {
        let number = self.next_issue_number.fetch_add(1, Ordering::SeqCst);
        IssueBuilder {
            issue: Issue::new(number, "SomeUser"),
        }
    }

    // === Response setup ===

    pub fn set_milestones(&self, milestones: Vec<Milestone>) {
        *self.milestones.lock().unwrap() = milestones;
    }

    pub fn add_issue(&self, issue: Issue) {
        self.issues.lock().unwrap().push(issue);
    }

    /// Comments for an issue, newest first
    pub fn set_comments(&self, issue_number: u64, comments: Vec<Comment>) {
        self.comments.lock().unwrap().insert(issue_number, comments);
    }

    pub fn set_label_age(&self, issue_number: u64, label: Label, days: i64) {
        self.label_ages
            .lock()
            .unwrap()
            .insert((issue_number, label.as_str().to_string()), days);
    }

    // === Error injection methods ===

    pub fn fail_list_milestones(&self, msg: &str) {
        *self.error_on_list_milestones.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_list_comments(&self, msg: &str) {
        *self.error_on_list_comments.lock().unwrap() = Some(msg.to_string());
    }

    pub fn fail_lock(&self, msg: &str) {
        *self.error_on_lock.lock().unwrap() = Some(msg.to_string());
    }

    /// Fail the next close with `error`, keeping its source chain
    pub fn fail_next_close_with(&self, error: Error) {
        *self.error_on_close.lock().unwrap() = Some(error);
    }

    // === Call verification methods ===

    pub fn calls(&self) -> Vec<TrackerCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Only the calls that change tracker state
    pub fn mutations(&self) -> Vec<TrackerCall> {
        self.calls()
            .into_iter()
            .filter(TrackerCall::is_mutation)
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn assert_called(&self, call: &TrackerCall) {
        let calls = self.calls();
        assert!(calls.contains(call), "Expected {call:?} but got: {calls:?}");
    }

    pub fn assert_not_called(&self, call: &TrackerCall) {
        let calls = self.calls();
        assert!(
            !calls.contains(call),
            "Expected {call:?} NOT to be called but it was: {calls:?}"
        );
    }

    pub fn assert_no_mutations(&self) {
        let mutations = self.mutations();
        assert!(
            mutations.is_empty(),
            "Expected no mutations but got: {mutations:?}"
        );
    }

    fn record(&self, call: TrackerCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(slot: &Mutex<Option<String>>) -> Result<()> {
        match slot.lock().unwrap().as_ref() {
            Some(msg) => Err(Error::Tracker(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        Self::injected(&self.error_on_list_milestones)?;
        Ok(self.milestones.lock().unwrap().clone())
    }

    async fn list_issues(&self) -> Result<Vec<Issue>> {
        Ok(self.issues.lock().unwrap().clone())
    }

    async fn list_comments(&self, issue_number: u64) -> Result<Vec<Comment>> {
        self.record(TrackerCall::ListComments(issue_number));
        Self::injected(&self.error_on_list_comments)?;
        let comments = self.comments.lock().unwrap();
        Ok(comments.get(&issue_number).cloned().unwrap_or_default())
    }

    async fn label_age_in_days(&self, issue_number: u64, label: &str) -> Result<i64> {
        self.record(TrackerCall::LabelAge {
            issue: issue_number,
            label: label.to_string(),
        });
        let ages = self.label_ages.lock().unwrap();
        Ok(ages
            .get(&(issue_number, label.to_string()))
            .copied()
            .unwrap_or(0))
    }

    async fn add_label(&self, issue_number: u64, label: &str) -> Result<()> {
        self.record(TrackerCall::AddLabel {
            issue: issue_number,
            label: label.to_string(),
        });
        Ok(())
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<()> {
        self.record(TrackerCall::RemoveLabel {
            issue: issue_number,
            label: label.to_string(),
        });
        Ok(())
    }

    async fn lock(&self, issue_number: u64) -> Result<()> {
        self.record(TrackerCall::Lock(issue_number));
        Self::injected(&self.error_on_lock)
    }

    async fn unlock(&self, issue_number: u64) -> Result<()> {
        self.record(TrackerCall::Unlock(issue_number));
        Ok(())
    }

    async fn close(&self, issue_number: u64) -> Result<()> {
        self.record(TrackerCall::Close(issue_number));
        match self.error_on_close.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn reopen(&self, issue_number: u64) -> Result<()> {
        self.record(TrackerCall::Reopen(issue_number));
        Ok(())
    }

    async fn set_milestone(&self, issue_number: u64, milestone: &Milestone) -> Result<()> {
        self.record(TrackerCall::SetMilestone {
            issue: issue_number,
            title: milestone.title.clone(),
        });
        Ok(())
    }

    async fn remove_milestone(&self, issue_number: u64) -> Result<()> {
        self.record(TrackerCall::RemoveMilestone(issue_number));
        Ok(())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        self.record(TrackerCall::CreateComment {
            issue: issue_number,
            body: body.to_string(),
        });
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}

/// Builder for test issues
pub struct IssueBuilder {
    issue: Issue,
}

impl IssueBuilder {
    pub fn author(mut self, author: &str) -> Self {
        self.issue.author = author.to_string();
        self
    }

    /// Mark the issue closed `days` ago
    pub fn closed(mut self, days: i64) -> Self {
        self.issue.closed = true;
        self.issue.closed_days = days;
        self
    }

    pub fn locked(mut self) -> Self {
        self.issue.locked = true;
        self
    }

    pub fn label(mut self, label: Label) -> Self {
        self.issue.labels.push(label.as_str().to_string());
        self
    }

    pub fn raw_label(mut self, label: &str) -> Self {
        self.issue.labels.push(label.to_string());
        self
    }

    pub fn milestone(mut self, milestone: &Milestone) -> Self {
        self.issue.milestone = Some(milestone.clone());
        self
    }

    pub fn build(self) -> Issue {
        self.issue
    }
}
