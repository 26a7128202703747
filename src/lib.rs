pub mod activity;
pub mod analyze;
pub mod cli;
pub mod error;
pub mod github;
pub mod logging;
pub mod model;
pub mod repos;
pub mod tui;
pub mod util;

pub use activity::{aggregate_daily_commits, date_window_ending, events_from_json, generate_date_window};
pub use error::{ProfileError, Result};
pub use github::GitHubClient;
