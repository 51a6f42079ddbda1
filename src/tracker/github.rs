//! GitHub issue tracker implementation

use crate::error::{Error, Result};
use crate::tracker::IssueTracker;
use crate::types::{AuthorAssociation, Comment, Issue, Milestone, RepoConfig, age_in_days};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use octocrab::Octocrab;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Default REST API base for github.com
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const PER_PAGE: usize = 100;

/// Login GitHub reports for deleted accounts
const GHOST_LOGIN: &str = "ghost";

// REST response types. Only the fields the rules need are decoded.

#[derive(Deserialize)]
struct ApiUser {
    login: String,
}

#[derive(Deserialize)]
struct ApiLabel {
    name: String,
}

#[derive(Deserialize)]
struct ApiMilestone {
    number: u64,
    title: String,
    state: String,
}

impl From<ApiMilestone> for Milestone {
    fn from(m: ApiMilestone) -> Self {
        let mut milestone = Self::new(m.number, m.title);
        milestone.closed = m.state == "closed";
        milestone
    }
}

#[derive(Deserialize)]
struct ApiIssue {
    number: u64,
    user: Option<ApiUser>,
    state: String,
    #[serde(default)]
    locked: bool,
    #[serde(default)]
    labels: Vec<ApiLabel>,
    milestone: Option<ApiMilestone>,
    closed_at: Option<DateTime<Utc>>,
    /// Present only when the "issue" is really a pull request
    pull_request: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct ApiComment {
    user: Option<ApiUser>,
    body: Option<String>,
    created_at: DateTime<Utc>,
    author_association: AuthorAssociation,
}

#[derive(Deserialize)]
struct ApiIssueEvent {
    event: String,
    label: Option<ApiLabel>,
    created_at: DateTime<Utc>,
}

fn login_of(user: Option<ApiUser>) -> String {
    user.map_or_else(|| GHOST_LOGIN.to_string(), |u| u.login)
}

/// GitHub tracker using octocrab for mutations and raw REST for listings
pub struct GitHubTracker {
    client: Octocrab,
    config: RepoConfig,
    /// Token for raw HTTP requests
    token: String,
    /// HTTP client for raw requests (paginated listings, lock state)
    http_client: Client,
    /// REST API base URL, without trailing slash
    api_base: String,
    /// All ages are measured against this instant
    snapshot_time: DateTime<Utc>,
}

impl GitHubTracker {
    /// Create a tracker for `config`, measuring ages from now
    pub fn new(token: &str, config: RepoConfig, api_base: &str) -> Result<Self> {
        Self::with_snapshot_time(token, config, api_base, Utc::now())
    }

    /// Create a tracker that measures ages from a fixed instant
    pub fn with_snapshot_time(
        token: &str,
        config: RepoConfig,
        api_base: &str,
        snapshot_time: DateTime<Utc>,
    ) -> Result<Self> {
        let api_base = api_base.trim_end_matches('/').to_string();

        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(api_base.as_str())
            .map_err(|e| Error::GitHubApi(e.to_string()))?
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        let http_client = Client::builder()
            .user_agent("update-issues")
            .build()
            .map_err(|e| Error::GitHubApi(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            token: token.to_string(),
            http_client,
            api_base,
            snapshot_time,
        })
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}{path}",
            self.api_base, self.config.owner, self.config.repo
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http_client
            .request(method, self.repo_url(path))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    /// Fetch every page of a list endpoint
    async fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let per_page = PER_PAGE.to_string();
        let mut items = Vec::new();

        for page in 1u32.. {
            let page = page.to_string();
            let response = self
                .request(Method::GET, path)
                .query(query)
                .query(&[("per_page", per_page.as_str()), ("page", page.as_str())])
                .send()
                .await?;
            let batch: Vec<T> = ensure_success(response, path).await?.json().await?;

            let last_page = batch.len() < PER_PAGE;
            items.extend(batch);
            if last_page {
                break;
            }
        }

        Ok(items)
    }
}

/// Turn a non-2xx response into an API error carrying GitHub's message
async fn ensure_success(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(Error::GitHubApi(format!("{what} returned {status}: {body}")))
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_milestones(&self) -> Result<Vec<Milestone>> {
        debug!("listing milestones");
        let milestones: Vec<ApiMilestone> = self
            .get_all_pages("/milestones", &[("state", "open")])
            .await?;

        let result: Vec<Milestone> = milestones.into_iter().map(Milestone::from).collect();
        debug!(count = result.len(), "listed milestones");
        Ok(result)
    }

    async fn list_issues(&self) -> Result<Vec<Issue>> {
        debug!("listing issues");
        let issues: Vec<ApiIssue> = self.get_all_pages("/issues", &[("state", "all")]).await?;

        let result: Vec<Issue> = issues
            .into_iter()
            .filter(|i| i.pull_request.is_none())
            .map(|i| {
                let closed = i.state == "closed";
                Issue {
                    number: i.number,
                    author: login_of(i.user),
                    closed,
                    locked: i.locked,
                    closed_days: match i.closed_at {
                        Some(at) if closed => age_in_days(at, self.snapshot_time),
                        _ => 0,
                    },
                    labels: i.labels.into_iter().map(|l| l.name).collect(),
                    milestone: i.milestone.map(Milestone::from),
                    comments: None,
                    label_ages: HashMap::new(),
                }
            })
            .collect();
        debug!(count = result.len(), "listed issues");
        Ok(result)
    }

    async fn list_comments(&self, issue_number: u64) -> Result<Vec<Comment>> {
        debug!(issue_number, "listing comments");
        let comments: Vec<ApiComment> = self
            .get_all_pages(&format!("/issues/{issue_number}/comments"), &[])
            .await?;

        // GitHub returns oldest first
        let result: Vec<Comment> = comments
            .into_iter()
            .rev()
            .map(|c| Comment {
                author: login_of(c.user),
                body: c.body.unwrap_or_default(),
                age_in_days: age_in_days(c.created_at, self.snapshot_time),
                from_team: c.author_association.is_team(),
            })
            .collect();
        debug!(issue_number, count = result.len(), "listed comments");
        Ok(result)
    }

    async fn label_age_in_days(&self, issue_number: u64, label: &str) -> Result<i64> {
        debug!(issue_number, label, "getting label age");
        let events: Vec<ApiIssueEvent> = self
            .get_all_pages(&format!("/issues/{issue_number}/events"), &[])
            .await?;

        let applied_at = events
            .iter()
            .rev()
            .find(|e| {
                e.event == "labeled" && e.label.as_ref().is_some_and(|l| l.name == label)
            })
            .map(|e| e.created_at);

        let age = applied_at.map_or(0, |at| age_in_days(at, self.snapshot_time));
        debug!(issue_number, label, age, "got label age");
        Ok(age)
    }

    async fn add_label(&self, issue_number: u64, label: &str) -> Result<()> {
        debug!(issue_number, label, "adding label");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .add_labels(issue_number, &[label.to_string()])
            .await?;
        Ok(())
    }

    async fn remove_label(&self, issue_number: u64, label: &str) -> Result<()> {
        debug!(issue_number, label, "removing label");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .remove_label(issue_number, label)
            .await?;
        Ok(())
    }

    async fn lock(&self, issue_number: u64) -> Result<()> {
        debug!(issue_number, "locking issue");
        let path = format!("/issues/{issue_number}/lock");
        let response = self
            .request(Method::PUT, &path)
            .json(&serde_json::json!({ "lock_reason": "resolved" }))
            .send()
            .await?;
        ensure_success(response, &path).await?;
        Ok(())
    }

    async fn unlock(&self, issue_number: u64) -> Result<()> {
        debug!(issue_number, "unlocking issue");
        let path = format!("/issues/{issue_number}/lock");
        let response = self.request(Method::DELETE, &path).send().await?;
        ensure_success(response, &path).await?;
        Ok(())
    }

    async fn close(&self, issue_number: u64) -> Result<()> {
        debug!(issue_number, "closing issue");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .update(issue_number)
            .state(octocrab::models::IssueState::Closed)
            .send()
            .await?;
        Ok(())
    }

    async fn reopen(&self, issue_number: u64) -> Result<()> {
        debug!(issue_number, "reopening issue");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .update(issue_number)
            .state(octocrab::models::IssueState::Open)
            .send()
            .await?;
        Ok(())
    }

    async fn set_milestone(&self, issue_number: u64, milestone: &Milestone) -> Result<()> {
        debug!(issue_number, milestone = %milestone, "setting milestone");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .update(issue_number)
            .milestone(milestone.number)
            .send()
            .await?;
        Ok(())
    }

    async fn remove_milestone(&self, issue_number: u64) -> Result<()> {
        debug!(issue_number, "removing milestone");
        // octocrab's update builder cannot send an explicit null milestone
        let path = format!("/issues/{issue_number}");
        let response = self
            .request(Method::PATCH, &path)
            .json(&serde_json::json!({ "milestone": null }))
            .send()
            .await?;
        ensure_success(response, &path).await?;
        Ok(())
    }

    async fn create_comment(&self, issue_number: u64, body: &str) -> Result<()> {
        debug!(issue_number, "creating comment");
        self.client
            .issues(&self.config.owner, &self.config.repo)
            .create_comment(issue_number, body)
            .await?;
        Ok(())
    }

    fn config(&self) -> &RepoConfig {
        &self.config
    }
}
