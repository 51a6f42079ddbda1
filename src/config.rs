//! Policy configuration: thresholds and bot texts
//!
//! Every field has a default, so an empty or absent policy file gives the
//! stock behavior.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const DEFAULT_BOT_MENTION: &str = "@shaka-bot";

const PING_QUESTION_TEXT: &str =
    "Does this answer all your questions? If so, would you please close the issue?";

const CLOSE_STALE_TEXT: &str = "Closing due to inactivity. If this is still an issue for you or if you \
     have further questions, the OP can ask shaka-bot to reopen it by \
     including `@shaka-bot reopen` in a comment.";

/// Tunable rule parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policy {
    /// Mention that must appear in a reopen request
    pub bot_mention: String,
    /// Ping a question after the team's last reply is this many days old
    pub ping_inactive_question_days: i64,
    /// Close a waiting issue after this many days without a reply
    pub close_after_waiting_days: i64,
    /// Archive an issue after it has been closed this many days
    pub archive_after_closed_days: i64,
    /// Appended to `@author` when pinging a question
    pub ping_question_text: String,
    /// Posted when closing a stale waiting issue
    pub close_stale_text: String,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            bot_mention: DEFAULT_BOT_MENTION.to_string(),
            ping_inactive_question_days: 4,
            close_after_waiting_days: 7,
            archive_after_closed_days: 60,
            ping_question_text: PING_QUESTION_TEXT.to_string(),
            close_stale_text: CLOSE_STALE_TEXT.to_string(),
        }
    }
}

impl Policy {
    /// Parse a policy from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("invalid policy: {e}")))
    }

    /// Load a policy file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("invalid policy in {}: {e}", path.display())))
    }

    /// Load `path` if given, else use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}
