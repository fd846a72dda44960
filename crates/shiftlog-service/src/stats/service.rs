//! Dashboard and monitoring statistics services.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_core::window::ReportingWindow;
use shiftlog_database::repositories::category::CategoryRepository;
use shiftlog_database::repositories::report::ReportRepository;
use shiftlog_database::repositories::user::UserRepository;
use shiftlog_entity::category::Category;
use shiftlog_entity::report::Report;
use shiftlog_entity::user::User;

use crate::context::RequestContext;
use crate::stats::aggregate::{
    self, CategorySlice, DailyTimeline, ItemCount, UserReportCount,
};

/// A user's own dashboard payload.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// The user's reports, newest first.
    pub reports: Vec<Report>,
    /// Categories currently offered on the new-report form.
    pub categories: Vec<Category>,
    /// The user's per-category counts across all their reports.
    pub category_counts: Vec<CategorySlice>,
    /// The most recent report, used to pre-fill the form.
    pub last_report: Option<Report>,
}

/// Monitoring detail for a single user over a window.
#[derive(Debug, Clone, Serialize)]
pub struct UserDetailStats {
    /// The user under inspection.
    pub user: User,
    /// The resolved window.
    pub window: ReportingWindow,
    /// Human-readable window label.
    pub window_label: String,
    /// Total reports in the window (after the item filter).
    pub total: i64,
    /// Per-category counts and percentages.
    pub breakdown: Vec<CategorySlice>,
    /// Dense per-day, per-category chart.
    pub timeline: DailyTimeline,
    /// The user's 10 most recently used item names.
    pub recent_items: Vec<String>,
    /// Report frequency per item name.
    pub item_counts: Vec<ItemCount>,
    /// The filtered report list, newest first.
    pub reports: Vec<Report>,
}

/// Cross-user monitoring overview over a window.
#[derive(Debug, Clone, Serialize)]
pub struct OverviewStats {
    /// The resolved window.
    pub window: ReportingWindow,
    /// Human-readable window label.
    pub window_label: String,
    /// Total reports in the window (after the item filter).
    pub total: i64,
    /// Category distribution over all users.
    pub breakdown: Vec<CategorySlice>,
    /// Report counts per user, favorites first.
    pub user_counts: Vec<UserReportCount>,
    /// Ten most frequent items, stable tie order.
    pub top_items: Vec<ItemCount>,
    /// Dense per-day, per-category chart.
    pub timeline: DailyTimeline,
}

/// Number of items shown in the overview ranking.
const TOP_ITEM_LIMIT: usize = 10;

/// Number of recently used item names suggested per user.
const RECENT_ITEM_LIMIT: i64 = 10;

/// Computes dashboard and monitoring statistics.
#[derive(Debug, Clone)]
pub struct StatsService {
    report_repo: Arc<ReportRepository>,
    category_repo: Arc<CategoryRepository>,
    user_repo: Arc<UserRepository>,
}

impl StatsService {
    /// Creates a new stats service.
    pub fn new(
        report_repo: Arc<ReportRepository>,
        category_repo: Arc<CategoryRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            report_repo,
            category_repo,
            user_repo,
        }
    }

    /// The requesting user's dashboard. Read-only.
    pub async fn dashboard(&self, ctx: &RequestContext) -> AppResult<DashboardData> {
        let reports = self.report_repo.list_by_user(ctx.user_id).await?;
        let categories = self.category_repo.list_active().await?;
        let category_counts = aggregate::category_breakdown(&reports, &categories);
        let last_report = reports.first().cloned();

        Ok(DashboardData {
            reports,
            categories,
            category_counts,
            last_report,
        })
    }

    /// Monitoring detail for one user. Admin-only.
    ///
    /// The item filter, when present, restricts every figure in the
    /// response, not just the report list.
    pub async fn user_detail(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        start_date: Option<&str>,
        end_date: Option<&str>,
        item_filter: Option<&str>,
    ) -> AppResult<UserDetailStats> {
        ctx.require_admin()?;

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let window = ReportingWindow::resolve(start_date, end_date, Utc::now());
        let reports = self
            .report_repo
            .list_in_range(
                Some(user_id),
                window.start_utc(),
                window.end_utc_exclusive(),
                item_filter,
            )
            .await?;
        let categories = self.category_repo.list_all().await?;
        let recent_items = self
            .report_repo
            .recent_item_names(user_id, RECENT_ITEM_LIMIT)
            .await?;

        Ok(UserDetailStats {
            user,
            window_label: window.label(),
            total: reports.len() as i64,
            breakdown: aggregate::category_breakdown(&reports, &categories),
            timeline: aggregate::daily_timeline(&reports, &window, &categories),
            recent_items,
            item_counts: aggregate::item_counts(&reports),
            reports,
            window,
        })
    }

    /// Cross-user monitoring overview. Admin-only.
    pub async fn overview(
        &self,
        ctx: &RequestContext,
        start_date: Option<&str>,
        end_date: Option<&str>,
        item_filter: Option<&str>,
    ) -> AppResult<OverviewStats> {
        ctx.require_admin()?;

        let window = ReportingWindow::resolve(start_date, end_date, Utc::now());
        let reports = self
            .report_repo
            .list_in_range(
                None,
                window.start_utc(),
                window.end_utc_exclusive(),
                item_filter,
            )
            .await?;
        let categories = self.category_repo.list_all().await?;
        let users = self.user_repo.list_all().await?;

        Ok(OverviewStats {
            window_label: window.label(),
            total: reports.len() as i64,
            breakdown: aggregate::category_breakdown(&reports, &categories),
            user_counts: aggregate::per_user_counts(&reports, &users),
            top_items: aggregate::top_items(&reports, TOP_ITEM_LIMIT),
            timeline: aggregate::daily_timeline(&reports, &window, &categories),
            window,
        })
    }
}
