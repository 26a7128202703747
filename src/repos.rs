use anyhow::Context;
use chrono::Utc;
use console::style;

use crate::cli::CommonArgs;
use crate::github::fetch_repos_with_progress;
use crate::model::{Repo, ReposOutput, SCHEMA_VERSION};
use crate::util::truncate;

pub async fn exec(common: &CommonArgs, username: &str, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let client = common.client().context("Failed to build HTTP client")?;

    let repos = fetch_repos_with_progress(&client, username, !(json || ndjson))
        .await
        .with_context(|| format!("Failed to fetch repositories for '{username}'"))?;

    if json {
        output_json(username, &repos)?;
    } else if ndjson {
        output_ndjson(&repos)?;
    } else {
        output_cards(&repos)?;
    }

    Ok(())
}

fn output_json(username: &str, repos: &[Repo]) -> anyhow::Result<()> {
    let output = ReposOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        repositories: repos.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(repos: &[Repo]) -> anyhow::Result<()> {
    for repo in repos {
        println!("{}", serde_json::to_string(repo)?);
    }
    Ok(())
}

/// Print one card per repository: name, counters, description, link.
pub fn output_cards(repos: &[Repo]) -> anyhow::Result<()> {
    if repos.is_empty() {
        println!("No public repositories");
        return Ok(());
    }

    println!("{}", style(format!("Repositories ({})", repos.len())).bold());
    println!("{}", "─".repeat(50));

    for repo in repos {
        let mut header = format!(
            "{}  ★ {}  ⑂ {}",
            style(&repo.name).cyan().bold(),
            style(repo.stargazers_count).yellow(),
            style(repo.forks_count).magenta(),
        );
        if let Some(language) = &repo.language {
            header.push_str(&format!("  {}", style(format!("[{language}]")).dim()));
        }
        if repo.fork {
            header.push_str(&format!("  {}", style("fork").dim()));
        }
        println!("{header}");

        if !repo.description().is_empty() {
            println!("  {}", truncate(repo.description(), 100));
        }
        println!("  {}", style(&repo.html_url).underlined());
        println!();
    }

    Ok(())
}
