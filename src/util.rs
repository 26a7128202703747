use chrono::{DateTime, NaiveDate, Utc};
use crate::error::{ProfileError, Result};
use crate::model::DateKey;

const MAX_USERNAME_LEN: usize = 39;

pub fn day_key(timestamp: &DateTime<Utc>) -> DateKey {
    timestamp.date_naive()
}

/// Parse an ISO-8601 instant and return its UTC calendar date.
pub fn timestamp_day_key(input: &str) -> Option<DateKey> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| day_key(&dt.with_timezone(&Utc)))
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|e| ProfileError::InvalidDate(format!("'{input}': {e}")))
}

pub fn validate_username(username: &str) -> Result<&str> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::invalid_input("username is empty"));
    }
    if trimmed.len() > MAX_USERNAME_LEN {
        return Err(ProfileError::invalid_input(format!(
            "username '{trimmed}' is longer than {MAX_USERNAME_LEN} characters"
        )));
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(ProfileError::invalid_input(format!(
            "username '{trimmed}' may only contain letters, digits and '-'"
        )));
    }
    Ok(trimmed)
}

/// Truncate a string to `max` chars with an ellipsis when necessary.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}
