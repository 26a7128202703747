pub mod client;
pub mod fetch;

pub use client::{ClientConfig, GitHubClient, DEFAULT_API_URL};
pub use fetch::{fetch_activity_with_progress, fetch_profile_with_progress, fetch_repos_with_progress};
