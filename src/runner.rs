//! Issue policy runner
//!
//! Two tiers of failure:
//! 1. Setup (listing, milestone selection) - returned as `Err`, fatal
//! 2. Per-rule failures - logged, recorded in the [`RunReport`], and the
//!    batch carries on

use crate::config::Policy;
use crate::error::Result;
use crate::issue::IssueHandle;
use crate::labels::Label;
use crate::milestones::select_milestones;
use crate::rules::{Rule, RuleContext};
use crate::tracker::IssueTracker;
use crate::types::Issue;
use tracing::{debug, error, info};

/// A rule that failed on one issue
#[derive(Debug, Clone)]
pub struct RuleFailure {
    /// Issue number
    pub issue: u64,
    /// Rule that failed
    pub rule: Rule,
    /// Error message, including every underlying cause
    pub message: String,
}

/// Outcome of a batch pass
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Issues the rules ran on
    pub processed: usize,
    /// Issues skipped because of the ignore flag
    pub ignored: usize,
    /// Every rule failure, in the order they happened
    pub failures: Vec<RuleFailure>,
}

impl RunReport {
    /// True when no rule failed
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run every rule, in order, against every issue not flagged to be ignored
///
/// Issues are updated in place as rules act on them, so a second pass over
/// the same slice sees the effects of the first.
pub async fn process_issues(
    issues: &mut [Issue],
    tracker: &dyn IssueTracker,
    ctx: &RuleContext<'_>,
) -> RunReport {
    let mut report = RunReport::default();

    for issue in issues.iter_mut() {
        if issue.has_label(Label::FlagBotIgnore) {
            info!(issue = issue.number, "Ignoring issue");
            report.ignored += 1;
            continue;
        }

        info!(issue = issue.number, "Processing issue");
        report.processed += 1;

        let mut handle = IssueHandle::new(issue, tracker);
        for rule in Rule::ALL {
            if let Err(e) = rule.apply(&mut handle, ctx).await {
                let message = e.chain_message();
                error!(
                    issue = handle.number,
                    rule = %rule,
                    error = %message,
                    "Failed to process issue #{} in rule {rule}",
                    handle.number
                );
                report.failures.push(RuleFailure {
                    issue: handle.number,
                    rule,
                    message,
                });
            }
        }
    }

    report
}

/// Fetch milestones and issues, then process every issue
///
/// Fails without touching any issue if there is no backlog milestone.
pub async fn run(tracker: &dyn IssueTracker, policy: &Policy) -> Result<RunReport> {
    let milestones = tracker.list_milestones().await?;
    let mut issues = tracker.list_issues().await?;
    debug!(
        milestones = milestones.len(),
        issues = issues.len(),
        repo = %tracker.config(),
        "fetched tracker snapshot"
    );

    let selection = select_milestones(&milestones)?;
    info!(
        next = %selection.next,
        backlog = %selection.backlog,
        "Using milestones"
    );

    let ctx = RuleContext {
        next_milestone: &selection.next,
        backlog: &selection.backlog,
        policy,
    };
    Ok(process_issues(&mut issues, tracker, &ctx).await)
}
