use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::GitHubClient;
use crate::error::Result;
use crate::model::{DailyCommit, DateKey, ProfileReport, Repo};

fn spinner(message: String, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub async fn fetch_profile_with_progress(
    client: &GitHubClient,
    username: &str,
    window: &[DateKey],
    show_progress: bool,
) -> Result<ProfileReport> {
    let pb = spinner(format!("Fetching profile for {username}..."), show_progress);
    let result = client.fetch_profile(username, window).await;
    pb.finish_and_clear();
    result
}

pub async fn fetch_repos_with_progress(
    client: &GitHubClient,
    username: &str,
    show_progress: bool,
) -> Result<Vec<Repo>> {
    let pb = spinner(format!("Fetching repositories for {username}..."), show_progress);
    let result = client.fetch_repos(username).await;
    pb.finish_and_clear();
    result
}

pub async fn fetch_activity_with_progress(
    client: &GitHubClient,
    username: &str,
    window: &[DateKey],
    show_progress: bool,
) -> Result<Vec<DailyCommit>> {
    let pb = spinner(format!("Fetching activity for {username}..."), show_progress);
    let result = client.fetch_activity(username, window).await;
    pb.finish_and_clear();
    result
}
