use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::activity::{aggregate_daily_commits, events_from_json};
use crate::error::{ProfileError, Result};
use crate::model::{ActivityEvent, DailyCommit, DateKey, ProfileReport, Repo};
use crate::util::validate_username;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Read-only client for the public user endpoints of the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn user_url(&self, username: &str, path: &str) -> String {
        format!("{}/users/{}/{}", self.api_url, username, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, username: &str, path: &str) -> Result<T> {
        let url = self.user_url(username, path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ProfileError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProfileError::Api { status, body });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch the first page of public repositories for `username`.
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<Repo>> {
        let username = validate_username(username)?;
        let repos: Vec<Repo> = self.get_json(username, "repos").await?;
        info!(username, count = repos.len(), "fetched repositories");
        Ok(repos)
    }

    /// Fetch the public event feed for `username`.
    pub async fn fetch_events(&self, username: &str) -> Result<Vec<ActivityEvent>> {
        let username = validate_username(username)?;
        let feed: serde_json::Value = self.get_json(username, "events/public").await?;
        let events = events_from_json(feed)?;
        info!(username, count = events.len(), "fetched public events");
        Ok(events)
    }

    pub async fn fetch_activity(&self, username: &str, window: &[DateKey]) -> Result<Vec<DailyCommit>> {
        let events = self.fetch_events(username).await?;
        Ok(aggregate_daily_commits(&events, window))
    }

    /// Fetch repositories and events concurrently and aggregate the activity window.
    pub async fn fetch_profile(&self, username: &str, window: &[DateKey]) -> Result<ProfileReport> {
        let username = validate_username(username)?;
        let (repositories, events) =
            tokio::try_join!(self.fetch_repos(username), self.fetch_events(username))?;

        Ok(ProfileReport {
            username: username.to_string(),
            repositories,
            daily_commits: aggregate_daily_commits(&events, window),
        })
    }
}
