use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::time::Duration;

use crate::activity::{date_window_ending, generate_date_window, DEFAULT_WINDOW_DAYS};
use crate::error::ProfileError;
use crate::github::{ClientConfig, GitHubClient, DEFAULT_API_URL};
use crate::model::DateKey;
use crate::util::parse_date;

#[derive(Parser)]
#[command(name = "ghprofile")]
#[command(about = "GitHub user analysis: repositories and daily commit activity")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, env = "GHPROFILE_API_URL", default_value = DEFAULT_API_URL, help = "Base URL of the GitHub REST API")]
    pub api_url: String,

    #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS, help = "Number of days in the activity window")]
    pub days: usize,

    #[arg(long, help = "Last day of the activity window (YYYY-MM-DD, defaults to today in UTC)")]
    pub until: Option<String>,

    #[arg(long, default_value = "30s", value_parser = humantime::parse_duration, help = "Request timeout (e.g. 10s, 1m)")]
    pub timeout: Duration,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn client(&self) -> Result<GitHubClient, ProfileError> {
        GitHubClient::new(&ClientConfig {
            api_url: self.api_url.clone(),
            timeout: self.timeout,
        })
    }

    pub fn window(&self) -> Result<Vec<DateKey>, ProfileError> {
        match self.until.as_deref() {
            Some(until) => date_window_ending(parse_date(until)?, self.days),
            None => generate_date_window(self.days),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Repositories and commit activity together
    Analyze {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long = "interactive", alias = "tui", alias = "ui", help = "Enable interactive terminal UI")]
        interactive: bool,
    },
    /// List the user's public repositories
    Repos {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
    /// Daily commit counts over the activity window
    Activity {
        #[arg(help = "GitHub username")]
        username: String,

        #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze { username, json, ndjson, interactive } => {
                crate::analyze::exec(&self.common, &username, json, ndjson, interactive).await
            }
            Commands::Repos { username, json, ndjson } => {
                crate::repos::exec(&self.common, &username, json, ndjson).await
            }
            Commands::Activity { username, json, ndjson } => {
                crate::activity::exec(&self.common, &username, json, ndjson).await
            }
        }
    }
}
