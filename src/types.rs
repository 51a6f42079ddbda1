//! Core types for update-issues

use crate::labels::Label;
use crate::milestones::Version;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

/// An issue as fetched from the tracker, plus a local cache of the effects
/// applied to it during this run
#[derive(Debug, Clone)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Login of the user who opened the issue
    pub author: String,
    /// Whether the issue is closed
    pub closed: bool,
    /// Whether the issue is locked
    pub locked: bool,
    /// Days since the issue was closed (0 while open)
    pub closed_days: i64,
    /// Label names currently on the issue
    pub labels: Vec<String>,
    /// Current milestone, if any
    pub milestone: Option<Milestone>,
    /// Comments, newest first. `None` until loaded.
    pub comments: Option<Vec<Comment>>,
    /// Label ages already known this run, keyed by label
    pub label_ages: HashMap<Label, i64>,
}

impl Issue {
    /// Create an open, unlocked, unlabeled issue
    pub fn new(number: u64, author: impl Into<String>) -> Self {
        Self {
            number,
            author: author.into(),
            closed: false,
            locked: false,
            closed_days: 0,
            labels: Vec::new(),
            milestone: None,
            comments: None,
            label_ages: HashMap::new(),
        }
    }

    /// Check whether the issue carries a label
    pub fn has_label(&self, label: Label) -> bool {
        self.labels.iter().any(|l| l == label.as_str())
    }

    /// Check whether the issue carries any of the given labels
    pub fn has_any_label(&self, labels: &[Label]) -> bool {
        labels.iter().any(|label| self.has_label(*label))
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "issue #{}", self.number)
    }
}

/// A comment on an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Login of the comment author
    pub author: String,
    /// Comment body text
    pub body: String,
    /// Days since the comment was posted
    pub age_in_days: i64,
    /// Whether the author is a member of the project team
    pub from_team: bool,
}

/// A repository milestone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone number (used to assign it)
    pub number: u64,
    /// Milestone title
    pub title: String,
    /// Version parsed from the title, if it is a version milestone
    pub version: Option<Version>,
    /// Whether the milestone is closed
    pub closed: bool,
}

impl Milestone {
    /// Create a milestone, parsing its version from the title
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            number,
            version: Version::parse(&title),
            title,
            closed: false,
        }
    }

    /// Whether this is the catch-all backlog milestone
    pub fn is_backlog(&self) -> bool {
        self.title.eq_ignore_ascii_case("backlog")
    }
}

impl std::fmt::Display for Milestone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// How a comment author is associated with the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorAssociation {
    /// Author is a collaborator on the repository
    Collaborator,
    /// Author has previously committed to the repository
    Contributor,
    /// Author's first contribution to any repository on GitHub
    FirstTimer,
    /// Author's first contribution to this repository
    FirstTimeContributor,
    /// Author is a placeholder for an unclaimed user
    Mannequin,
    /// Author is a member of the organization owning the repository
    Member,
    /// Author has no association with the repository
    None,
    /// Author owns the repository
    Owner,
}

impl AuthorAssociation {
    /// Whether this association counts as the project team
    pub const fn is_team(self) -> bool {
        matches!(self, Self::Owner | Self::Member | Self::Collaborator)
    }
}

/// Repository coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl RepoConfig {
    /// Parse an `owner/name` slug, as found in `GITHUB_REPOSITORY`
    pub fn parse(slug: &str) -> crate::error::Result<Self> {
        match slug.trim().split_once('/') {
            Some((owner, repo))
                if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(crate::error::Error::Config(format!(
                "repository must look like owner/name, got {slug:?}"
            ))),
        }
    }
}

impl std::fmt::Display for RepoConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Whole days elapsed between `since` and `now`, never negative
pub fn age_in_days(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_days().max(0)
}
