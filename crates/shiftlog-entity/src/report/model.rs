//! Shift report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Number of whole days after creation during which a report remains
/// editable and deletable by its owner.
pub const EDIT_WINDOW_DAYS: i64 = 2;

/// A single timestamped activity entry authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Report {
    /// Unique report identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Free-text time-of-day label (e.g. `"08:00 - 09:00"`).
    pub time_label: String,
    /// Category name, copied from the category at write time.
    pub category: String,
    /// Report title.
    pub title: String,
    /// Free-text notes.
    pub notes: String,
    /// Item worked on, if any.
    pub item_name: Option<String>,
    /// Part number of the item.
    pub part_number: Option<String>,
    /// Customer the item belongs to.
    pub customer: Option<String>,
    /// When the report was created (UTC, server-generated).
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Whole-day age of the report at `now`.
    ///
    /// Uses calendar-day counts of the elapsed duration, not a wall-clock
    /// 48h comparison: a report created 1 day and 23 hours ago is 1 day old.
    pub fn days_old(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }

    /// Whether the report is still inside its editable window.
    ///
    /// Evaluated lazily from `created_at`; the editable state is never
    /// materialized in the store.
    pub fn is_within_edit_window(&self, now: DateTime<Utc>) -> bool {
        self.days_old(now) < EDIT_WINDOW_DAYS
    }

    /// Whether `user_id` may edit or delete this report at `now`.
    pub fn is_mutable_by(&self, user_id: Uuid, now: DateTime<Utc>) -> bool {
        self.user_id == user_id && self.is_within_edit_window(now)
    }
}

/// Data required to create a new report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReport {
    /// Owning user.
    pub user_id: Uuid,
    /// Time-of-day label.
    pub time_label: String,
    /// Category name.
    pub category: String,
    /// Title.
    pub title: String,
    /// Notes.
    pub notes: String,
    /// Item worked on.
    pub item_name: Option<String>,
    /// Part number.
    pub part_number: Option<String>,
    /// Customer.
    pub customer: Option<String>,
}

/// Partial update of an existing report. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportPatch {
    /// New time-of-day label.
    pub time_label: Option<String>,
    /// New category name.
    pub category: Option<String>,
    /// New title.
    pub title: Option<String>,
    /// New notes.
    pub notes: Option<String>,
    /// New item name (`Some(None)` clears the field).
    pub item_name: Option<Option<String>>,
    /// New part number.
    pub part_number: Option<Option<String>>,
    /// New customer.
    pub customer: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn report(created_at: DateTime<Utc>, owner: Uuid) -> Report {
        Report {
            id: Uuid::new_v4(),
            user_id: owner,
            time_label: "08:00".into(),
            category: "Produksi".into(),
            title: "line check".into(),
            notes: String::new(),
            item_name: None,
            part_number: None,
            customer: None,
            created_at,
        }
    }

    #[test]
    fn test_editable_just_under_two_days() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let r = report(now - Duration::days(1) - Duration::hours(23), owner);
        assert_eq!(r.days_old(now), 1);
        assert!(r.is_mutable_by(owner, now));
    }

    #[test]
    fn test_stale_at_two_days() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let r = report(now - Duration::days(2) - Duration::minutes(1), owner);
        assert_eq!(r.days_old(now), 2);
        assert!(!r.is_mutable_by(owner, now));
    }

    #[test]
    fn test_non_owner_never_mutable() {
        let now = Utc::now();
        let r = report(now, Uuid::new_v4());
        assert!(!r.is_mutable_by(Uuid::new_v4(), now));
    }
}
