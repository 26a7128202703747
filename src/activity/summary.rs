use crate::model::DailyCommit;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub total: u64,
    pub active_days: usize,
    pub busiest: Option<DailyCommit>,
    pub average: f64,
}

impl ActivitySummary {
    pub fn from_daily(daily: &[DailyCommit]) -> Self {
        let total: u64 = daily.iter().map(|d| d.count as u64).sum();
        let active_days = daily.iter().filter(|d| d.count > 0).count();
        // latest day wins a tie
        let busiest = daily
            .iter()
            .filter(|d| d.count > 0)
            .max_by_key(|d| (d.count, d.date))
            .copied();
        let average = if daily.is_empty() {
            0.0
        } else {
            total as f64 / daily.len() as f64
        };

        Self {
            total,
            active_days,
            busiest,
            average,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn day(d: u32, count: u32) -> DailyCommit {
        DailyCommit {
            date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
            count,
        }
    }

    #[test]
    fn summarises_window() {
        let summary = ActivitySummary::from_daily(&[day(1, 0), day(2, 4), day(3, 4), day(4, 0)]);
        assert_eq!(summary.total, 8);
        assert_eq!(summary.active_days, 2);
        assert_eq!(summary.busiest, Some(day(3, 4)));
        assert_eq!(summary.average, 2.0);
    }

    #[test]
    fn quiet_window_has_no_busiest_day() {
        let summary = ActivitySummary::from_daily(&[day(1, 0), day(2, 0)]);
        assert_eq!(summary.busiest, None);
        assert_eq!(summary.total, 0);
        assert_eq!(ActivitySummary::from_daily(&[]).average, 0.0);
    }
}
