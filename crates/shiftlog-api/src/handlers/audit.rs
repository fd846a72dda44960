//! Audit log handler.

use axum::Json;
use axum::extract::{Query, State};

use shiftlog_core::error::AppError;
use shiftlog_service::audit::query::AuditLogView;

use crate::dto::request::WindowQuery;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/audit-log
///
/// Non-admin requesters always see their own entries; the `user_id`
/// filter only has effect for admins.
pub async fn view_audit_log(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WindowQuery>,
) -> Result<Json<ApiResponse<AuditLogView>>, AppError> {
    let view = state
        .audit_service
        .view(
            &auth,
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            query.user_id,
        )
        .await?;
    Ok(Json(ApiResponse::ok(view)))
}
