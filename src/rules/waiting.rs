//! Waiting-on-response handling and question pings

use crate::config::Policy;
use crate::error::Result;
use crate::issue::IssueHandle;
use crate::labels::Label;

/// Resolve open issues waiting on the author
///
/// A reply from outside the team newer than the waiting label clears it;
/// otherwise the issue is closed as stale once the wait runs out.
pub(super) async fn manage_waiting(issue: &mut IssueHandle<'_>, policy: &Policy) -> Result<()> {
    if issue.closed || !issue.has_label(Label::StatusWaiting) {
        return Ok(());
    }

    let label_age = issue.label_age_in_days(Label::StatusWaiting).await?;

    let replied = issue
        .load_comments()
        .await?
        .iter()
        .find(|c| !c.from_team)
        .is_some_and(|c| c.age_in_days < label_age);

    if replied {
        issue.remove_label(Label::StatusWaiting).await?;
        return Ok(());
    }

    if label_age >= policy.close_after_waiting_days {
        issue.post_comment(&policy.close_stale_text).await?;
        issue.close().await?;
    }
    Ok(())
}

/// Drop the waiting label from issues that were closed while waiting
pub(super) async fn clean_up_tags(issue: &mut IssueHandle<'_>) -> Result<()> {
    if issue.closed && issue.has_label(Label::StatusWaiting) {
        issue.remove_label(Label::StatusWaiting).await?;
    }
    Ok(())
}

/// Ping the author of a question the team answered a while ago
pub(super) async fn ping_questions(issue: &mut IssueHandle<'_>, policy: &Policy) -> Result<()> {
    if issue.closed
        || !issue.has_label(Label::TypeQuestion)
        || issue.has_label(Label::StatusWaiting)
    {
        return Ok(());
    }

    let author = issue.author.clone();

    // The author may be on the team too; their own comment is not an answer.
    let answered = issue.load_comments().await?.first().is_some_and(|last| {
        last.from_team
            && last.author != author
            && last.age_in_days >= policy.ping_inactive_question_days
    });

    if answered {
        issue
            .post_comment(&format!("@{author} {}", policy.ping_question_text))
            .await?;
        issue.add_label(Label::StatusWaiting).await?;
    }
    Ok(())
}
