use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Event type tag carried by activity records that push commits to a branch.
pub const PUSH_EVENT: &str = "PushEvent";

/// Calendar date used as grouping key and display label, rendered `YYYY-MM-DD`.
pub type DateKey = NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    /// Commit records are only counted, so any element shape is accepted.
    #[serde(default)]
    pub commits: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityEvent {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub payload: Option<EventPayload>,
}

impl ActivityEvent {
    #[cfg(test)]
    pub fn push(created_at: &str, commits: usize) -> Self {
        Self {
            kind: Some(PUSH_EVENT.to_string()),
            created_at: Some(created_at.to_string()),
            payload: Some(EventPayload {
                commits: Some(vec![serde_json::Value::Null; commits]),
            }),
        }
    }

    pub fn is_push(&self) -> bool {
        self.kind.as_deref() == Some(PUSH_EVENT)
    }

    /// Number of commits in the payload; an absent payload or list counts as zero.
    pub fn commit_count(&self) -> u32 {
        self.payload
            .as_ref()
            .and_then(|p| p.commits.as_ref())
            .map(|c| u32::try_from(c.len()).unwrap_or(u32::MAX))
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCommit {
    pub date: DateKey,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub fork: bool,
}

impl Repo {
    /// Get the repository description or an empty string if `None`.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone)]
pub struct ProfileReport {
    pub username: String,
    pub repositories: Vec<Repo>,
    pub daily_commits: Vec<DailyCommit>,
}

impl ProfileReport {
    pub fn total_commits(&self) -> u64 {
        self.daily_commits.iter().map(|d| d.count as u64).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub window_days: usize,
    pub repositories: Vec<Repo>,
    pub daily_commits: Vec<DailyCommit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReposOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub repositories: Vec<Repo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub username: String,
    pub window_days: usize,
    pub total_commits: u64,
    pub daily_commits: Vec<DailyCommit>,
}
