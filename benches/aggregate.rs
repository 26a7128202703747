use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ghprofile::model::ActivityEvent;
use ghprofile::{aggregate_daily_commits, date_window_ending, events_from_json};
use serde_json::{json, Value};

fn synthetic_events(count: usize) -> Vec<ActivityEvent> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let feed: Vec<Value> = (0..count)
        .map(|i| {
            let day = start + Duration::days((i % 30) as i64);
            json!({
                "type": "PushEvent",
                "created_at": format!("{day}T{:02}:00:00Z", i % 24),
                "payload": { "commits": vec![json!({ "sha": "abc" }); i % 5] },
            })
        })
        .collect();
    events_from_json(Value::Array(feed)).unwrap()
}

fn bench_aggregate(c: &mut Criterion) {
    let window = date_window_ending(NaiveDate::from_ymd_opt(2024, 1, 30).unwrap(), 14).unwrap();
    let events = synthetic_events(300);

    c.bench_function("aggregate_daily_commits/300", |b| {
        b.iter(|| aggregate_daily_commits(black_box(&events), black_box(&window)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
