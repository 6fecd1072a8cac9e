//! Remote search API
//!
//! [`SearchClient`] is the seam between the search handler and GitHub. The
//! server uses [`GitHubClient`]; tests substitute an in-process fake.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::GithubSettings;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Options forwarded to the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

/// Search response body, items are passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("environment variable {0} is not set")]
    MissingToken(String),
}

#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Search issues and pull requests
    async fn search_issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, ApiError>;

    /// Search users and organizations
    async fn search_users(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, ApiError>;
}

/// GitHub REST search client
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a client, reading the token from the configured environment variable
    pub fn new(settings: &GithubSettings) -> Result<Self, ApiError> {
        let token = std::env::var(&settings.token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::MissingToken(settings.token_env.clone()))?;

        Self::with_token(settings, token)
    }

    pub fn with_token(settings: &GithubSettings, token: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    async fn search(
        &self,
        endpoint: &str,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, ApiError> {
        let url = format!("{}/search/{}", self.api_url, endpoint);

        let mut params = vec![
            ("q", query.to_string()),
            ("page", options.page.to_string()),
            ("per_page", options.per_page.to_string()),
        ];
        if let Some(sort) = &options.sort {
            params.push(("sort", sort.clone()));
        }
        if let Some(order) = &options.order {
            params.push(("order", order.clone()));
        }

        debug!(endpoint, query, page = options.page, per_page = options.per_page, "GitHub search request");

        let response = self
            .http
            .get(&url)
            .query(&params)
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchClient for GitHubClient {
    async fn search_issues(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, ApiError> {
        self.search("issues", query, options).await
    }

    async fn search_users(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResult, ApiError> {
        self.search("users", query, options).await
    }
}
