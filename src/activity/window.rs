use chrono::{Duration, NaiveDate, Utc};
use crate::error::{ProfileError, Result};
use crate::model::DateKey;

/// Window length used when none is requested.
pub const DEFAULT_WINDOW_DAYS: usize = 14;

/// `n` consecutive calendar days ending at today's UTC date, oldest first.
pub fn generate_date_window(n: usize) -> Result<Vec<DateKey>> {
    date_window_ending(Utc::now().date_naive(), n)
}

/// `n` consecutive calendar days ending at (and including) `end`, oldest first.
pub fn date_window_ending(end: NaiveDate, n: usize) -> Result<Vec<DateKey>> {
    if n == 0 {
        return Err(ProfileError::invalid_input("date window must cover at least one day"));
    }

    (0..n)
        .rev()
        .map(|offset| {
            let days = i64::try_from(offset)
                .map_err(|_| ProfileError::InvalidDate(format!("window of {n} days is too large")))?;
            Duration::try_days(days)
                .and_then(|delta| end.checked_sub_signed(delta))
                .ok_or_else(|| ProfileError::InvalidDate(format!("{n} days before {end} is out of range")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn single_day_window_is_today() {
        let window = date_window_ending(date("2024-03-15"), 1).unwrap();
        assert_eq!(window, vec![date("2024-03-15")]);
    }

    #[test]
    fn window_is_consecutive_and_ends_at_end_date() {
        let end = date("2024-03-01");
        let window = date_window_ending(end, 14).unwrap();
        assert_eq!(window.len(), 14);
        assert_eq!(window.first().copied(), Some(date("2024-02-17")));
        assert_eq!(window.last().copied(), Some(end));
        for pair in window.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window: Vec<String> = date_window_ending(date("2024-01-02"), 3)
            .unwrap()
            .iter()
            .map(|d| d.to_string())
            .collect();
        assert_eq!(window, vec!["2023-12-31", "2024-01-01", "2024-01-02"]);
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(matches!(
            date_window_ending(date("2024-01-01"), 0),
            Err(ProfileError::InvalidInput(_))
        ));
    }

    #[test]
    fn oversized_window_is_an_invalid_date() {
        assert!(matches!(
            date_window_ending(date("2024-01-01"), usize::MAX),
            Err(ProfileError::InvalidDate(_))
        ));
    }

    #[test]
    fn generated_window_ends_today() {
        let window = generate_date_window(DEFAULT_WINDOW_DAYS).unwrap();
        let today = Utc::now().date_naive();
        // the clock may roll over between the two reads
        let last = *window.last().unwrap();
        assert!(last == today || last + Duration::days(1) == today);
        assert_eq!(window.len(), DEFAULT_WINDOW_DAYS);
    }
}
