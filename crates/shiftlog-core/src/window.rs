//! Local-time reporting windows.
//!
//! All stored timestamps are UTC, but every date-filtered view (monitoring,
//! audit log) buckets and displays in a fixed UTC+7 local offset. The
//! [`ReportingWindow`] type owns the resolution policy: default trailing
//! 30-day window ending "today", silent fallback on malformed input, and
//! clamping of inverted ranges.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed display/bucketing offset from UTC, in hours.
pub const LOCAL_OFFSET_HOURS: i64 = 7;

/// Default window length in days (inclusive of both endpoints).
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Convert a UTC instant to its calendar date in the fixed local offset.
pub fn local_date(ts: DateTime<Utc>) -> NaiveDate {
    (ts + Duration::hours(LOCAL_OFFSET_HOURS)).date_naive()
}

/// The local calendar date of "now".
pub fn local_today(now: DateTime<Utc>) -> NaiveDate {
    local_date(now)
}

/// An inclusive range of local calendar days used for filtering and
/// bucketing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingWindow {
    /// First local day in the range.
    pub start: NaiveDate,
    /// Last local day in the range.
    pub end: NaiveDate,
}

impl ReportingWindow {
    /// Resolve a window from optional ISO `YYYY-MM-DD` filter strings.
    ///
    /// The end date defaults to today in the local offset; the start date
    /// defaults to `end - 29` days. Malformed strings are silently ignored,
    /// falling back to the default. A start after the resolved end is
    /// clamped to equal the end, so the range is never inverted.
    pub fn resolve(start: Option<&str>, end: Option<&str>, now: DateTime<Utc>) -> Self {
        let end_date = end
            .and_then(parse_local_date)
            .unwrap_or_else(|| local_today(now));

        let mut start_date = start
            .and_then(parse_local_date)
            .unwrap_or_else(|| end_date - Duration::days(DEFAULT_WINDOW_DAYS - 1));

        if start_date > end_date {
            start_date = end_date;
        }

        Self {
            start: start_date,
            end: end_date,
        }
    }

    /// Inclusive UTC lower bound: local midnight of the start day.
    pub fn start_utc(&self) -> DateTime<Utc> {
        local_midnight_utc(self.start)
    }

    /// Exclusive UTC upper bound: local midnight of the day after the end day.
    pub fn end_utc_exclusive(&self) -> DateTime<Utc> {
        local_midnight_utc(self.end + Duration::days(1))
    }

    /// Whether a UTC instant falls inside the window.
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start_utc() && ts < self.end_utc_exclusive()
    }

    /// Number of calendar days in the window (always >= 1).
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Iterate over every local day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Human-readable `dd/mm/yy - dd/mm/yy` label.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d/%m/%y"),
            self.end.format("%d/%m/%y")
        )
    }
}

/// UTC instant corresponding to local midnight of the given local day.
fn local_midnight_utc(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc() - Duration::hours(LOCAL_OFFSET_HOURS)
}

fn parse_local_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_local_date_crosses_midnight() {
        // 18:00 UTC is already 01:00 the next day at UTC+7.
        assert_eq!(local_date(utc(2024, 3, 10, 18, 0)), date(2024, 3, 11));
        assert_eq!(local_date(utc(2024, 3, 10, 16, 59)), date(2024, 3, 10));
    }

    #[test]
    fn test_default_window_is_30_days() {
        let now = utc(2024, 6, 15, 12, 0);
        let w = ReportingWindow::resolve(None, None, now);
        assert_eq!(w.end, date(2024, 6, 15));
        assert_eq!(w.start, date(2024, 5, 17));
        assert_eq!(w.num_days(), 30);
    }

    #[test]
    fn test_explicit_range() {
        let now = utc(2024, 6, 15, 12, 0);
        let w = ReportingWindow::resolve(Some("2024-06-01"), Some("2024-06-10"), now);
        assert_eq!(w.start, date(2024, 6, 1));
        assert_eq!(w.end, date(2024, 6, 10));
        assert_eq!(w.num_days(), 10);
    }

    #[test]
    fn test_inverted_range_collapses_to_end() {
        let now = utc(2024, 6, 15, 12, 0);
        let w = ReportingWindow::resolve(Some("2024-06-20"), Some("2024-06-10"), now);
        assert_eq!(w.start, w.end);
        assert_eq!(w.end, date(2024, 6, 10));
        assert_eq!(w.num_days(), 1);
    }

    #[test]
    fn test_malformed_dates_fall_back_to_defaults() {
        let now = utc(2024, 6, 15, 12, 0);
        let w = ReportingWindow::resolve(Some("not-a-date"), Some("06/15/2024"), now);
        assert_eq!(w.end, date(2024, 6, 15));
        assert_eq!(w.start, date(2024, 5, 17));
    }

    #[test]
    fn test_start_only_defaults_end_to_today() {
        let now = utc(2024, 6, 15, 12, 0);
        let w = ReportingWindow::resolve(Some("2024-06-01"), None, now);
        assert_eq!(w.start, date(2024, 6, 1));
        assert_eq!(w.end, date(2024, 6, 15));
    }

    #[test]
    fn test_utc_bounds_subtract_offset() {
        let w = ReportingWindow {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        };
        // Local midnight 2024-06-01 at UTC+7 is 2024-05-31 17:00 UTC.
        assert_eq!(w.start_utc(), utc(2024, 5, 31, 17, 0));
        assert_eq!(w.end_utc_exclusive(), utc(2024, 6, 1, 17, 0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let w = ReportingWindow {
            start: date(2024, 6, 1),
            end: date(2024, 6, 1),
        };
        assert!(w.contains(utc(2024, 5, 31, 17, 0)));
        assert!(w.contains(utc(2024, 6, 1, 16, 59)));
        assert!(!w.contains(utc(2024, 6, 1, 17, 0)));
        assert!(!w.contains(utc(2024, 5, 31, 16, 59)));
    }

    #[test]
    fn test_days_iteration_is_dense() {
        let w = ReportingWindow {
            start: date(2024, 2, 27),
            end: date(2024, 3, 2),
        };
        let days: Vec<_> = w.days().collect();
        assert_eq!(days.len(), w.num_days() as usize);
        assert_eq!(days.first(), Some(&date(2024, 2, 27)));
        // 2024 is a leap year.
        assert!(days.contains(&date(2024, 2, 29)));
        assert_eq!(days.last(), Some(&date(2024, 3, 2)));
    }

    #[test]
    fn test_label_format() {
        let w = ReportingWindow {
            start: date(2024, 6, 1),
            end: date(2024, 6, 10),
        };
        assert_eq!(w.label(), "01/06/24 - 10/06/24");
    }
}
