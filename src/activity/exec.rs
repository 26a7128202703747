use anyhow::Context;

use crate::cli::CommonArgs;
use crate::github::fetch_activity_with_progress;
use super::{output_chart, output_json, output_ndjson};

pub async fn exec(common: &CommonArgs, username: &str, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let client = common.client().context("Failed to build HTTP client")?;
    let window = common.window().context("Failed to resolve activity window")?;

    // Keep stdout clean for machine-readable output
    let daily = fetch_activity_with_progress(&client, username, &window, !(json || ndjson))
        .await
        .with_context(|| format!("Failed to fetch activity for '{username}'"))?;

    if json {
        output_json(username, &daily)?;
    } else if ndjson {
        output_ndjson(&daily)?;
    } else {
        output_chart(username, &daily)?;
    }

    Ok(())
}
