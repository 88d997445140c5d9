use std::time::Duration;

use reqwest::header::USER_AGENT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::GithubConfig;
use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("github request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("github responded with status {0}")]
    Status(reqwest::StatusCode),
}

impl From<GithubError> for ApiError {
    fn from(err: GithubError) -> Self {
        tracing::error!("github collaborator error: {}", err);
        ApiError::bad_gateway("GitHub API unavailable")
    }
}

/// Subset of the repository metadata the admin panel's import view needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: i64,
    pub fork: bool,
}

/// Read-only client for the repository-listing API. Unauthenticated; public
/// repositories only.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    per_page: u8,
}

impl GithubClient {
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        }
    }

    /// List a user's public repositories, most recently updated first.
    pub async fn list_repos(&self, username: &str) -> Result<Vec<RepoSummary>, GithubError> {
        let url = format!("{}/users/{}/repos", self.api_base, username);

        let response = self
            .http
            .get(&url)
            .query(&[("sort", "updated"), ("per_page", &self.per_page.to_string())])
            // GitHub rejects requests without a user agent
            .header(USER_AGENT, concat!("portfolio-api/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GithubError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}
