//! Report handlers: create, detail, edit, delete.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_entity::report::{Report, ReportPatch};
use shiftlog_service::report::service::{CreateReportRequest, CreatedReport, ReportDetail};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/reports
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReportRequest>,
) -> Result<Json<ApiResponse<CreatedReport>>, AppError> {
    let created = state.report_service.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(created)))
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReportDetail>>, AppError> {
    let detail = state.report_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(detail)))
}

/// PUT /api/reports/{id}
pub async fn update_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<ReportPatch>,
) -> Result<Json<ApiResponse<Report>>, AppError> {
    let report = state.report_service.update(&auth, id, patch).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// DELETE /api/reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.report_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Report deleted"))))
}
