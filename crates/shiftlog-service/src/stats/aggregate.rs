//! Pure aggregation over report lists.
//!
//! Every function here is side-effect free: the services load windowed
//! report lists from the database and hand them to these functions, which
//! keeps the bucketing and percentage rules testable without a database.
//!
//! Bucketing uses the fixed local offset from `shiftlog_core::window`;
//! timelines are dense, with an explicit zero for every absent day.

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use shiftlog_core::window::{ReportingWindow, local_date};
use shiftlog_entity::category::{Category, FALLBACK_COLOR};
use shiftlog_entity::report::Report;
use shiftlog_entity::user::User;

/// One category's share of a report list.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    /// Category name.
    pub name: String,
    /// Display color for charts.
    pub color: String,
    /// Number of matching reports.
    pub count: i64,
    /// Share of the total, percent, one decimal. `0.0` when the total is 0.
    pub percentage: f64,
}

/// One category's daily counts across a window.
#[derive(Debug, Clone, Serialize)]
pub struct TimelineSeries {
    /// Category name.
    pub category: String,
    /// Display color for charts.
    pub color: String,
    /// One count per label, zero-filled.
    pub counts: Vec<i64>,
}

/// A dense per-day, per-category chart payload.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTimeline {
    /// One ISO date label per day in the window.
    pub labels: Vec<String>,
    /// One series per category.
    pub series: Vec<TimelineSeries>,
}

/// An item name with its report frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemCount {
    /// Item name as written on the reports.
    pub item_name: String,
    /// Number of reports naming it.
    pub count: i64,
}

/// A user's report count over a window.
#[derive(Debug, Clone, Serialize)]
pub struct UserReportCount {
    /// User ID.
    pub user_id: Uuid,
    /// Display name.
    pub name: String,
    /// Employee ID.
    pub employee_id: String,
    /// Whether the user is pinned in monitoring lists.
    pub is_favorite: bool,
    /// Number of reports in the window.
    pub count: i64,
}

/// Round to one decimal place.
fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// The category names to chart for a report list: every known category in
/// its given order, then any names present on reports but absent from the
/// catalog (renamed or deleted categories keep their copied label).
fn chart_categories<'a>(reports: &'a [Report], categories: &'a [Category]) -> Vec<(&'a str, &'a str)> {
    let mut out: Vec<(&str, &str)> = categories
        .iter()
        .map(|c| (c.name.as_str(), c.color.as_str()))
        .collect();
    for report in reports {
        if !out.iter().any(|(name, _)| *name == report.category) {
            out.push((report.category.as_str(), FALLBACK_COLOR));
        }
    }
    out
}

/// Per-category counts and percentages over a report list.
///
/// Categories with zero reports still appear; the percentage of every
/// slice is `0.0` when the list is empty.
pub fn category_breakdown(reports: &[Report], categories: &[Category]) -> Vec<CategorySlice> {
    let total = reports.len() as i64;
    chart_categories(reports, categories)
        .into_iter()
        .map(|(name, color)| {
            let count = reports.iter().filter(|r| r.category == name).count() as i64;
            let percentage = if total == 0 {
                0.0
            } else {
                round1(count as f64 / total as f64 * 100.0)
            };
            CategorySlice {
                name: name.to_string(),
                color: color.to_string(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Dense per-day, per-category counts across the window.
///
/// Series length always equals the window's day count; days without
/// reports carry explicit zeros. Reports are bucketed by their creation
/// date in the fixed local offset.
pub fn daily_timeline(
    reports: &[Report],
    window: &ReportingWindow,
    categories: &[Category],
) -> DailyTimeline {
    let days: Vec<_> = window.days().collect();
    let labels = days.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let day_index: HashMap<_, _> = days.iter().enumerate().map(|(i, d)| (*d, i)).collect();

    let series = chart_categories(reports, categories)
        .into_iter()
        .map(|(name, color)| {
            let mut counts = vec![0i64; days.len()];
            for report in reports.iter().filter(|r| r.category == name) {
                if let Some(&i) = day_index.get(&local_date(report.created_at)) {
                    counts[i] += 1;
                }
            }
            TimelineSeries {
                category: name.to_string(),
                color: color.to_string(),
                counts,
            }
        })
        .collect();

    DailyTimeline { labels, series }
}

/// Report frequency per item name, in first-seen order.
pub fn item_counts(reports: &[Report]) -> Vec<ItemCount> {
    let mut out: Vec<ItemCount> = Vec::new();
    for report in reports {
        let Some(name) = report.item_name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        match out.iter_mut().find(|c| c.item_name == name) {
            Some(existing) => existing.count += 1,
            None => out.push(ItemCount {
                item_name: name.to_string(),
                count: 1,
            }),
        }
    }
    out
}

/// The `limit` most frequent item names. The sort is stable, so ties keep
/// their first-seen order.
pub fn top_items(reports: &[Report], limit: usize) -> Vec<ItemCount> {
    let mut counts = item_counts(reports);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

/// Report counts per user, preserving the given user order (the user
/// repository lists favorites first).
pub fn per_user_counts(reports: &[Report], users: &[User]) -> Vec<UserReportCount> {
    users
        .iter()
        .map(|u| UserReportCount {
            user_id: u.id,
            name: u.name.clone(),
            employee_id: u.employee_id.clone(),
            is_favorite: u.is_favorite,
            count: reports.iter().filter(|r| r.user_id == u.id).count() as i64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    fn cat(name: &str, color: &str) -> Category {
        Category {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            icon: "bi-tag".into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn report_at(category: &str, item: Option<&str>, created_at: DateTime<Utc>) -> Report {
        Report {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            time_label: "08:00".into(),
            category: category.into(),
            title: "t".into(),
            notes: String::new(),
            item_name: item.map(str::to_string),
            part_number: None,
            customer: None,
            created_at,
        }
    }

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_breakdown_percentages_round_to_one_decimal() {
        let cats = vec![cat("Produksi", "primary"), cat("Meeting", "info")];
        let now = Utc::now();
        let reports = vec![
            report_at("Produksi", None, now),
            report_at("Produksi", None, now),
            report_at("Meeting", None, now),
        ];
        let slices = category_breakdown(&reports, &cats);
        assert_eq!(slices[0].count, 2);
        assert_eq!(slices[0].percentage, 66.7);
        assert_eq!(slices[1].percentage, 33.3);
    }

    #[test]
    fn test_breakdown_of_empty_list_is_all_zero() {
        let cats = vec![cat("Produksi", "primary")];
        let slices = category_breakdown(&[], &cats);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].count, 0);
        assert_eq!(slices[0].percentage, 0.0);
    }

    #[test]
    fn test_unknown_report_category_gets_fallback_color() {
        let cats = vec![cat("Produksi", "primary")];
        let reports = vec![report_at("Retired Category", None, Utc::now())];
        let slices = category_breakdown(&reports, &cats);
        let retired = slices.iter().find(|s| s.name == "Retired Category").unwrap();
        assert_eq!(retired.color, FALLBACK_COLOR);
        assert_eq!(retired.count, 1);
    }

    #[test]
    fn test_timeline_is_dense_and_zero_filled() {
        let window = ReportingWindow {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
        };
        let cats = vec![cat("Produksi", "primary")];
        // 17:30 UTC on June 2 is already June 3 locally.
        let reports = vec![
            report_at("Produksi", None, utc(2024, 6, 2, 3)),
            report_at("Produksi", None, utc(2024, 6, 2, 17)),
        ];
        let timeline = daily_timeline(&reports, &window, &cats);
        assert_eq!(timeline.labels.len(), 5);
        assert_eq!(timeline.series.len(), 1);
        assert_eq!(timeline.series[0].counts, vec![0, 1, 1, 0, 0]);
    }

    #[test]
    fn test_timeline_ignores_reports_outside_window() {
        let window = ReportingWindow {
            start: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
        };
        let cats = vec![cat("Produksi", "primary")];
        let reports = vec![report_at("Produksi", None, utc(2024, 7, 1, 3))];
        let timeline = daily_timeline(&reports, &window, &cats);
        assert_eq!(timeline.series[0].counts, vec![0, 0]);
    }

    #[test]
    fn test_top_items_keeps_first_seen_order_on_ties() {
        let now = Utc::now();
        let reports = vec![
            report_at("Produksi", Some("Bolt"), now),
            report_at("Produksi", Some("Washer"), now),
            report_at("Produksi", Some("Nut"), now),
            report_at("Produksi", Some("Nut"), now),
            report_at("Produksi", Some("Washer"), now),
        ];
        let top = top_items(&reports, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].item_name, "Washer");
        assert_eq!(top[1].item_name, "Nut");
        assert_eq!(top[0].count, 2);
    }

    #[test]
    fn test_item_counts_skip_blank_names() {
        let now = Utc::now();
        let reports = vec![
            report_at("Produksi", Some(""), now),
            report_at("Produksi", None, now),
        ];
        assert!(item_counts(&reports).is_empty());
    }

    #[test]
    fn test_per_user_counts_preserve_user_order() {
        let now = Utc::now();
        let mut favorite = test_user("Bea");
        favorite.is_favorite = true;
        let other = test_user("Abe");

        let mut r = report_at("Produksi", None, now);
        r.user_id = other.id;

        let counts = per_user_counts(&[r], &[favorite.clone(), other.clone()]);
        assert_eq!(counts[0].user_id, favorite.id);
        assert_eq!(counts[0].count, 0);
        assert_eq!(counts[1].count, 1);
    }

    fn test_user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
            employee_id: format!("EMP-{name}"),
            password_hash: "x".into(),
            department: None,
            section: None,
            job: None,
            shift: None,
            is_admin: false,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }
}
