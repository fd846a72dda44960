//! Report template handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_entity::template::ReportTemplate;
use shiftlog_service::template::service::CreateTemplateRequest;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/templates
pub async fn list_templates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ReportTemplate>>>, AppError> {
    let templates = state.template_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(templates)))
}

/// POST /api/templates
pub async fn create_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTemplateRequest>,
) -> Result<Json<ApiResponse<ReportTemplate>>, AppError> {
    let template = state.template_service.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(template)))
}

/// DELETE /api/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.template_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Template deleted",
    ))))
}
