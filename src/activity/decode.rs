use serde_json::Value;
use tracing::debug;
use crate::error::{ProfileError, Result};
use crate::model::ActivityEvent;

/// Decode a public event feed.
///
/// The feed itself must be a JSON array. Elements that do not match the
/// event shape are kept as empty events so they contribute zero commits.
pub fn events_from_json(value: Value) -> Result<Vec<ActivityEvent>> {
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ProfileError::invalid_input(format!(
                "event feed must be a JSON array, got {}",
                json_kind(&other)
            )))
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                debug!(index, error = %e, "malformed activity event");
                ActivityEvent::default()
            })
        })
        .collect())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn non_array_feed_is_invalid_input() {
        let err = events_from_json(json!({"message": "Not Found"})).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidInput(_)));
        assert!(events_from_json(Value::Null).is_err());
    }

    #[test]
    fn malformed_elements_become_empty_events() {
        let events = events_from_json(json!([
            42,
            {"type": "PushEvent", "created_at": "2024-01-02T10:00:00Z", "payload": {"commits": "nope"}},
            {"type": "PushEvent", "created_at": "2024-01-02T10:00:00Z",
             "payload": {"commits": [{"sha": "abc", "message": "fix"}, {}]}}
        ]))
        .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ActivityEvent::default());
        assert_eq!(events[1], ActivityEvent::default());
        assert_eq!(events[2].commit_count(), 2);
    }

    #[test]
    fn odd_commit_records_still_count() {
        let events = events_from_json(json!([
            {"type": "PushEvent", "created_at": "2024-01-02T10:00:00Z",
             "payload": {"commits": [{"sha": 1}, {"sha": "abc"}, "x"]}}
        ]))
        .unwrap();

        assert!(events[0].is_push());
        assert_eq!(events[0].created_at.as_deref(), Some("2024-01-02T10:00:00Z"));
        assert_eq!(events[0].commit_count(), 3);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let events = events_from_json(json!([
            {"id": "1", "type": "IssuesEvent", "actor": {"login": "octocat"}, "created_at": "2024-01-02T10:00:00Z"}
        ]))
        .unwrap();
        assert_eq!(events[0].kind.as_deref(), Some("IssuesEvent"));
        assert!(!events[0].is_push());
    }
}
