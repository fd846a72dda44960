//! Monitoring handlers: cross-user overview and per-user detail.
//!
//! Both views accept `start_date`, `end_date` (`YYYY-MM-DD`, local offset)
//! and an `item` filter. The admin gate lives in the stats service.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_service::stats::service::{OverviewStats, UserDetailStats};

use crate::dto::request::WindowQuery;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/monitoring/overview
pub async fn overview(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<WindowQuery>,
) -> Result<Json<ApiResponse<OverviewStats>>, AppError> {
    let stats = state
        .stats_service
        .overview(
            &auth,
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            query.item.as_deref(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/monitoring/users/{id}
pub async fn user_detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<ApiResponse<UserDetailStats>>, AppError> {
    let stats = state
        .stats_service
        .user_detail(
            &auth,
            id,
            query.start_date.as_deref(),
            query.end_date.as_deref(),
            query.item.as_deref(),
        )
        .await?;
    Ok(Json(ApiResponse::ok(stats)))
}
