//! Shared test fixtures

#![allow(dead_code)]

mod fake_tracker;

pub use fake_tracker::{FakeTracker, IssueBuilder, TrackerCall};

use update_issues::config::Policy;
use update_issues::rules::RuleContext;
use update_issues::runner::{RunReport, process_issues};
use update_issues::types::{Comment, Issue, Milestone};

/// The "next version" milestone used across tests
pub fn next_milestone() -> Milestone {
    Milestone::new(10, "v4.3")
}

/// The backlog milestone used across tests
pub fn backlog() -> Milestone {
    Milestone::new(1, "Backlog")
}

/// Default policy (stock thresholds and texts)
pub fn policy() -> Policy {
    Policy::default()
}

/// A comment from someone outside the team
pub fn comment(author: &str, body: &str, age_in_days: i64) -> Comment {
    Comment {
        author: author.to_string(),
        body: body.to_string(),
        age_in_days,
        from_team: false,
    }
}

/// A comment from a team member
pub fn team_comment(author: &str, body: &str, age_in_days: i64) -> Comment {
    Comment {
        from_team: true,
        ..comment(author, body, age_in_days)
    }
}

/// Run the full rule list over `issues` with the stock milestones and policy
pub async fn process(tracker: &FakeTracker, issues: &mut [Issue]) -> RunReport {
    let next = next_milestone();
    let backlog = backlog();
    let policy = policy();
    let ctx = RuleContext {
        next_milestone: &next,
        backlog: &backlog,
        policy: &policy,
    };
    process_issues(issues, tracker, &ctx).await
}
