//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use shiftlog_core::error::AppError;
use shiftlog_service::stats::service::DashboardData;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<DashboardData>>, AppError> {
    let data = state.stats_service.dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(data)))
}
