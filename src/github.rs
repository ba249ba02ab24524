use crate::error::{Result, TrendingError};
use crate::models::RepositoryRecord;
use crate::types::{GitHubRepo, SearchResponse};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
const USER_AGENT: &str = "github-trending-plugin/0.1.0";
const DEFAULT_WINDOW_DAYS: u32 = 7;
const DEFAULT_PER_PAGE: u32 = 25;
const MAX_PER_PAGE: u32 = 100;
const MAX_WINDOW_DAYS: u32 = 3650;

/// Source of the trending repository list.
///
/// Implementations make a single attempt per call; retry policy, if any,
/// belongs to the caller.
#[async_trait]
pub trait TrendingSource: Send + Sync {
    async fn fetch_trending(&self) -> Result<Vec<RepositoryRecord>>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub token: Option<String>,
    /// Only repositories created within this many days are considered.
    pub window_days: u32,
    pub per_page: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: API_BASE_URL.to_string(),
            token: None,
            window_days: DEFAULT_WINDOW_DAYS,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Fetches trending repositories from the GitHub search API.
///
/// GitHub has no trending endpoint; the newest repositories ranked by
/// stars stand in for it.
pub struct GitHubClient {
    client: Client,
    api_base: Url,
    config: ClientConfig,
}

impl GitHubClient {
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TrendingError::Config(format!("failed to build HTTP client: {}", e)))?;

        let api_base = Url::parse(&config.api_base)?;
        config.per_page = config.per_page.clamp(1, MAX_PER_PAGE);
        config.window_days = config.window_days.clamp(1, MAX_WINDOW_DAYS);

        Ok(GitHubClient {
            client,
            api_base,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the search URL for repositories created after `since`.
    pub fn search_url(&self, since: NaiveDate) -> Result<Url> {
        let mut url = self.api_base.join("search/repositories")?;
        url.query_pairs_mut()
            .append_pair("q", &format!("created:>{}", since.format("%Y-%m-%d")))
            .append_pair("sort", "stars")
            .append_pair("order", "desc")
            .append_pair("per_page", &self.config.per_page.to_string());
        Ok(url)
    }

    async fn make_request(&self, url: &Url) -> Result<Response> {
        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", "application/vnd.github.v3+json");

        if let Some(token) = &self.config.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        match response.status() {
            reqwest::StatusCode::OK => Ok(response),
            reqwest::StatusCode::NOT_FOUND => {
                Err(TrendingError::Fetch(format!("Resource not found: {}", url)))
            }
            reqwest::StatusCode::FORBIDDEN if rate_limit_remaining == Some(0) => {
                let reset = response
                    .headers()
                    .get("X-RateLimit-Reset")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<i64>().ok())
                    .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
                    .map(|dt| dt.format("%H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                warn!(%reset, "GitHub API rate limit exhausted");
                Err(TrendingError::Fetch(format!(
                    "API rate limit exceeded, resets at {}",
                    reset
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(TrendingError::Fetch(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait]
impl TrendingSource for GitHubClient {
    async fn fetch_trending(&self) -> Result<Vec<RepositoryRecord>> {
        let since = Utc::now()
            .date_naive()
            .checked_sub_signed(chrono::Duration::days(i64::from(self.config.window_days)))
            .ok_or_else(|| {
                TrendingError::Config(format!("window of {} days is out of range", self.config.window_days))
            })?;
        let url = self.search_url(since)?;
        debug!(%url, "Fetching trending repositories");

        let response = self.make_request(&url).await?;
        let body = response.text().await?;
        let records = parse_search_response(&body)?;

        debug!(count = records.len(), "Fetched trending repositories");
        Ok(records)
    }
}

/// Parse a search API payload into repository records.
pub fn parse_search_response(body: &str) -> Result<Vec<RepositoryRecord>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    if response.incomplete_results {
        debug!(total = response.total_count, "GitHub reported incomplete search results");
    }
    Ok(response.items.into_iter().map(RepositoryRecord::from).collect())
}

impl From<GitHubRepo> for RepositoryRecord {
    fn from(repo: GitHubRepo) -> Self {
        RepositoryRecord {
            url: repo.html_url,
            title: repo.name,
            owner: repo.owner.login,
            language: repo.language.unwrap_or_default(),
            star_count: repo.stargazers_count,
            description: repo.description.unwrap_or_default(),
        }
    }
}
