//! Issue lifecycle rules
//!
//! Each rule is independently gated by its own checks, but rules run in the
//! fixed order of [`Rule::ALL`] and later rules observe the effects of
//! earlier ones on the same issue. Reopening runs before archiving so that a
//! freshly reopened issue is not archived again in the same pass.

mod lifecycle;
mod milestone;
mod waiting;

use crate::config::Policy;
use crate::error::Result;
use crate::issue::IssueHandle;
use crate::types::Milestone;

/// Shared inputs for every rule
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Nearest upcoming version milestone
    pub next_milestone: &'a Milestone,
    /// Catch-all backlog milestone
    pub backlog: &'a Milestone,
    /// Thresholds and texts
    pub policy: &'a Policy,
}

/// One lifecycle rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Reopen a closed issue when its author asks the bot to
    ReopenOnRequest,
    /// Label and lock issues that have been closed for a long time
    ArchiveOldClosed,
    /// Unlock and reopen archived issues whose archive label was removed
    UnarchiveOnLabelRemoval,
    /// Clear the waiting label on reply, or close when the wait runs out
    ManageWaiting,
    /// Drop the waiting label from issues closed by other means
    CleanUpTags,
    /// Nudge the author of a question the team has answered
    PingQuestions,
    /// Keep milestones in line with type and priority labels
    MaintainMilestones,
}

impl Rule {
    /// All rules, in the order they must run
    pub const ALL: [Self; 7] = [
        Self::ReopenOnRequest,
        Self::ArchiveOldClosed,
        Self::UnarchiveOnLabelRemoval,
        Self::ManageWaiting,
        Self::CleanUpTags,
        Self::PingQuestions,
        Self::MaintainMilestones,
    ];

    /// Stable name for logs
    pub const fn name(self) -> &'static str {
        match self {
            Self::ReopenOnRequest => "reopen-on-request",
            Self::ArchiveOldClosed => "archive-old-closed",
            Self::UnarchiveOnLabelRemoval => "unarchive-on-label-removal",
            Self::ManageWaiting => "manage-waiting",
            Self::CleanUpTags => "clean-up-tags",
            Self::PingQuestions => "ping-questions",
            Self::MaintainMilestones => "maintain-milestones",
        }
    }

    /// Apply this rule to one issue
    pub async fn apply(self, issue: &mut IssueHandle<'_>, ctx: &RuleContext<'_>) -> Result<()> {
        match self {
            Self::ReopenOnRequest => lifecycle::reopen_on_request(issue, ctx.policy).await,
            Self::ArchiveOldClosed => lifecycle::archive_old_closed(issue, ctx.policy).await,
            Self::UnarchiveOnLabelRemoval => lifecycle::unarchive_on_label_removal(issue).await,
            Self::ManageWaiting => waiting::manage_waiting(issue, ctx.policy).await,
            Self::CleanUpTags => waiting::clean_up_tags(issue).await,
            Self::PingQuestions => waiting::ping_questions(issue, ctx.policy).await,
            Self::MaintainMilestones => milestone::maintain_milestones(issue, ctx).await,
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
