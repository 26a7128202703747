use anyhow::Context;
use chrono::Utc;
use serde::Serialize;

use crate::cli::CommonArgs;
use crate::github::fetch_profile_with_progress;
use crate::model::{DailyCommit, ProfileOutput, ProfileReport, Repo, SCHEMA_VERSION};

/// One NDJSON line; the `record` tag tells repositories and days apart.
#[derive(Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
enum Record<'a> {
    Repo(&'a Repo),
    Day(&'a DailyCommit),
}

pub async fn exec(
    common: &CommonArgs,
    username: &str,
    json: bool,
    ndjson: bool,
    interactive: bool,
) -> anyhow::Result<()> {
    let client = common.client().context("Failed to build HTTP client")?;
    let window = common.window().context("Failed to resolve activity window")?;

    let report = fetch_profile_with_progress(&client, username, &window, !(json || ndjson))
        .await
        .with_context(|| format!("Failed to analyze '{username}'"))?;

    if interactive {
        crate::tui::run(&report).context("Terminal UI failed")?;
    } else if json {
        output_json(&report)?;
    } else if ndjson {
        output_ndjson(&report)?;
    } else {
        output_summary(&report)?;
    }

    Ok(())
}

fn output_json(report: &ProfileReport) -> anyhow::Result<()> {
    let output = ProfileOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: report.username.clone(),
        window_days: report.daily_commits.len(),
        repositories: report.repositories.clone(),
        daily_commits: report.daily_commits.clone(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_ndjson(report: &ProfileReport) -> anyhow::Result<()> {
    for repo in &report.repositories {
        println!("{}", serde_json::to_string(&Record::Repo(repo))?);
    }
    for day in &report.daily_commits {
        println!("{}", serde_json::to_string(&Record::Day(day))?);
    }
    Ok(())
}

fn output_summary(report: &ProfileReport) -> anyhow::Result<()> {
    crate::repos::output_cards(&report.repositories)?;
    crate::activity::output_chart(&report.username, &report.daily_commits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn ndjson_records_are_tagged() {
        let day = DailyCommit {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            count: 2,
        };
        assert_eq!(
            serde_json::to_string(&Record::Day(&day)).unwrap(),
            r#"{"record":"day","date":"2024-01-02","count":2}"#
        );
    }
}
