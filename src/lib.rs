//! update-issues - lifecycle automation for GitHub issues
//!
//! A one-shot batch pass over a repository's issues that:
//! - reopens closed issues when their author asks the bot to
//! - archives (labels and locks) issues closed for a long time
//! - closes issues left waiting on the author for too long
//! - pings authors of answered questions
//! - keeps milestones in line with type and priority labels
//!
//! The rules talk to the tracker only through [`tracker::IssueTracker`].

pub mod config;
pub mod error;
pub mod issue;
pub mod labels;
pub mod milestones;
pub mod rules;
pub mod runner;
pub mod tracker;
pub mod types;

pub use error::{Error, Result};
