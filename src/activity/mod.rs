pub mod aggregate;
pub mod decode;
pub mod exec;
pub mod output;
pub mod summary;
pub mod window;

pub use aggregate::{aggregate_daily_commits, commit_counts_by_date};
pub use decode::events_from_json;
pub use exec::exec;
pub use output::{activity_bar, output_chart, output_json, output_ndjson};
pub use summary::ActivitySummary;
pub use window::{date_window_ending, generate_date_window, DEFAULT_WINDOW_DAYS};
