//! Error types for update-issues

use thiserror::Error;

/// Errors that can occur while maintaining issues
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API returned an error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// HTTP transport error from raw API requests
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid configuration (CLI, environment or policy file)
    #[error("configuration error: {0}")]
    Config(String),

    /// No milestone titled "Backlog" exists in the repository
    #[error("no backlog milestone found")]
    NoBacklogMilestone,

    /// Generic tracker failure (used by wrappers and test doubles)
    #[error("tracker error: {0}")]
    Tracker(String),
}

impl From<octocrab::Error> for Error {
    fn from(e: octocrab::Error) -> Self {
        Self::GitHubApi(join_chain(&e))
    }
}

impl Error {
    /// This error followed by every underlying cause, joined with `: `
    pub fn chain_message(&self) -> String {
        join_chain(self)
    }
}

/// Causes whose text already appears in the message are skipped
fn join_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Result alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
