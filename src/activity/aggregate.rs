use std::collections::HashMap;
use tracing::debug;
use crate::model::{ActivityEvent, DailyCommit, DateKey};
use crate::util::timestamp_day_key;

/// Sum push-event commit counts per UTC day, then lay them onto `window`.
///
/// Output has one entry per window date, in window order; days without
/// activity get zero and events dated outside the window are dropped.
/// Events with a missing or unparseable `created_at` contribute nothing.
pub fn aggregate_daily_commits(events: &[ActivityEvent], window: &[DateKey]) -> Vec<DailyCommit> {
    let by_date = commit_counts_by_date(events);

    window
        .iter()
        .map(|&date| DailyCommit {
            date,
            count: by_date.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

pub fn commit_counts_by_date(events: &[ActivityEvent]) -> HashMap<DateKey, u32> {
    let mut day_map: HashMap<DateKey, u32> = HashMap::new();

    for event in events.iter().filter(|e| e.is_push()) {
        let date = match event.created_at.as_deref().and_then(timestamp_day_key) {
            Some(date) => date,
            None => {
                debug!(created_at = ?event.created_at, "skipping push event without a usable timestamp");
                continue;
            }
        };

        add_to_day(&mut day_map, date, event.commit_count());
    }

    day_map
}

fn add_to_day(day_map: &mut HashMap<DateKey, u32>, date: DateKey, commits: u32) {
    let count = day_map.entry(date).or_insert(0);
    *count = count.saturating_add(commits);
}
