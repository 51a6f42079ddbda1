//! Reopen, archive and unarchive

use crate::config::Policy;
use crate::error::Result;
use crate::issue::IssueHandle;
use crate::labels::Label;
use crate::types::Comment;
use tracing::info;

/// Reopen a closed issue if its author asked the bot to
pub(super) async fn reopen_on_request(issue: &mut IssueHandle<'_>, policy: &Policy) -> Result<()> {
    if !issue.closed || issue.has_label(Label::StatusArchived) {
        return Ok(());
    }

    let author = issue.author.clone();
    let closed_days = issue.closed_days;
    let mention = policy.bot_mention.to_lowercase();

    // Only load comments once the cheap checks pass; they cost API quota.
    let requested = issue
        .load_comments()
        .await?
        .iter()
        .rev()
        .any(|c| is_reopen_request(c, &author, closed_days, &mention));

    if requested {
        info!(issue = issue.number, "Found reopen request");
        issue.reopen().await?;
    }
    Ok(())
}

/// A request counts only if the author posted it after the issue was closed
fn is_reopen_request(comment: &Comment, author: &str, closed_days: i64, mention: &str) -> bool {
    if comment.author != author || comment.age_in_days > closed_days {
        return false;
    }
    let body = comment.body.to_lowercase();
    body.contains(mention) && (body.contains("reopen") || body.contains("re-open"))
}

/// Archive issues that have been closed for a while
///
/// Locked issues are skipped so this never fights with unarchiving.
pub(super) async fn archive_old_closed(issue: &mut IssueHandle<'_>, policy: &Policy) -> Result<()> {
    if !issue.locked && issue.closed && issue.closed_days >= policy.archive_after_closed_days {
        issue.add_label(Label::StatusArchived).await?;
        issue.lock().await?;
    }
    Ok(())
}

/// Unarchive an issue when someone removes its archive label
pub(super) async fn unarchive_on_label_removal(issue: &mut IssueHandle<'_>) -> Result<()> {
    if issue.locked && !issue.has_label(Label::StatusArchived) {
        issue.unlock().await?;
        issue.reopen().await?;
    }
    Ok(())
}
