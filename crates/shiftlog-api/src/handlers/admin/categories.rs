//! Admin category management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_entity::category::{Category, CreateCategory, UpdateCategory};

use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/categories
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Category>>>, AppError> {
    let categories = state.category_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(categories)))
}

/// POST /api/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCategory>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.category_service.create(&auth, req).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateCategory>,
) -> Result<Json<ApiResponse<Category>>, AppError> {
    let category = state.category_service.update(&auth, id, patch).await?;
    Ok(Json(ApiResponse::ok(category)))
}

/// PUT /api/admin/categories/{id}/toggle
pub async fn toggle_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, AppError> {
    let enabled = state.category_service.toggle_active(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse { enabled })))
}

/// DELETE /api/admin/categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.category_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Category deleted",
    ))))
}
