//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use shiftlog_auth::session::manager::SessionManager;
use shiftlog_core::config::AppConfig;

use shiftlog_service::audit::AuditQueryService;
use shiftlog_service::category::CategoryService;
use shiftlog_service::item::ItemService;
use shiftlog_service::report::ReportService;
use shiftlog_service::stats::StatsService;
use shiftlog_service::template::TemplateService;
use shiftlog_service::user::admin::AdminUserService;
use shiftlog_service::user::service::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Session lifecycle manager (login, logout, token validation)
    pub session_manager: Arc<SessionManager>,

    /// Report lifecycle service
    pub report_service: Arc<ReportService>,
    /// Dashboard and monitoring statistics
    pub stats_service: Arc<StatsService>,
    /// Report template service
    pub template_service: Arc<TemplateService>,
    /// Category administration
    pub category_service: Arc<CategoryService>,
    /// Item catalog and spreadsheet import
    pub item_service: Arc<ItemService>,
    /// User self-service
    pub user_service: Arc<UserService>,
    /// Administrative user management
    pub admin_user_service: Arc<AdminUserService>,
    /// Audit log viewing
    pub audit_service: Arc<AuditQueryService>,
}
