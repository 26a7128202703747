use anyhow::Result;
use chrono::Utc;
use console::style;

use super::ActivitySummary;
use crate::model::{ActivityOutput, DailyCommit, SCHEMA_VERSION};

const BAR_WIDTH: usize = 30;

pub fn output_json(username: &str, daily: &[DailyCommit]) -> Result<()> {
    let output = ActivityOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        username: username.to_string(),
        window_days: daily.len(),
        total_commits: daily.iter().map(|d| d.count as u64).sum(),
        daily_commits: daily.to_vec(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(daily: &[DailyCommit]) -> Result<()> {
    for day in daily {
        println!("{}", serde_json::to_string(day)?);
    }
    Ok(())
}

/// Scaled bar for `count`, full width at `max`.
pub fn activity_bar(count: u32, max: u32) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let filled = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.clamp(1, BAR_WIDTH))
}

pub fn output_chart(username: &str, daily: &[DailyCommit]) -> Result<()> {
    if daily.is_empty() {
        println!("No data to display");
        return Ok(());
    }

    let max = daily.iter().map(|d| d.count).max().unwrap_or(0);
    let summary = ActivitySummary::from_daily(daily);

    println!(
        "{}",
        style(format!("Commit Activity for {username} (last {} days)", daily.len())).bold()
    );
    println!("{}", "─".repeat(50));

    for day in daily {
        let bar = activity_bar(day.count, max);
        println!(
            "{} {:<width$} {:>4}",
            day.date.format("%Y-%m-%d"),
            style(bar).green(),
            day.count,
            width = BAR_WIDTH
        );
    }

    println!("{}", "─".repeat(50));
    println!(
        "Total commits: {}  Active days: {}/{}  Average: {:.1}/day",
        style(summary.total).cyan(),
        style(summary.active_days).green(),
        daily.len(),
        summary.average
    );
    if let Some(busiest) = summary.busiest {
        println!(
            "Busiest day: {} ({} commits)",
            style(busiest.date.format("%Y-%m-%d")).yellow(),
            busiest.count
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bars_scale_to_maximum() {
        assert_eq!(activity_bar(0, 10), "");
        assert_eq!(activity_bar(3, 0), "");
        assert_eq!(activity_bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(activity_bar(5, 10).chars().count(), BAR_WIDTH / 2);
        // a single commit on a busy window still shows up
        assert_eq!(activity_bar(1, 1000).chars().count(), 1);
    }
}
