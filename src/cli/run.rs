//! Run command - one pass over every issue

use super::{Cli, CommandContext};
use tracing::{info, warn};
use update_issues::error::Result;
use update_issues::runner;

/// Run the issue policy pass
///
/// Returns `Ok(false)` when the pass completed but some rule failed.
pub async fn run_update(cli: &Cli) -> Result<bool> {
    let ctx = CommandContext::new(cli)?;

    info!(repo = %ctx.tracker.config(), dry_run = cli.dry_run, "Updating issues");
    let report = runner::run(ctx.tracker.as_ref(), &ctx.policy).await?;

    info!(
        processed = report.processed,
        ignored = report.ignored,
        failures = report.failures.len(),
        "Update complete"
    );
    for failure in &report.failures {
        warn!(
            issue = failure.issue,
            rule = %failure.rule,
            "failed: {}",
            failure.message
        );
    }

    Ok(report.is_success())
}
