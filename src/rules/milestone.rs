//! Milestone upkeep from type and priority labels

use super::RuleContext;
use crate::error::Result;
use crate::issue::IssueHandle;
use crate::labels::{BACKLOG_PRIORITIES, LABELS_FOR_BACKLOG, LABELS_FOR_NEXT_MILESTONE};

/// Set or remove an open issue's milestone based on its labels
///
/// An existing milestone is never replaced, only removed when the issue
/// has no type label that maps to a milestone.
pub(super) async fn maintain_milestones(
    issue: &mut IssueHandle<'_>,
    ctx: &RuleContext<'_>,
) -> Result<()> {
    if issue.closed {
        return Ok(());
    }

    if issue.has_any_label(LABELS_FOR_NEXT_MILESTONE) {
        if issue.milestone.is_none() {
            let target = if issue.has_any_label(BACKLOG_PRIORITIES) {
                ctx.backlog
            } else {
                ctx.next_milestone
            };
            issue.set_milestone(target).await?;
        }
    } else if issue.has_any_label(LABELS_FOR_BACKLOG) {
        if issue.milestone.is_none() {
            issue.set_milestone(ctx.backlog).await?;
        }
    } else if issue.milestone.is_some() {
        issue.remove_milestone().await?;
    }
    Ok(())
}
