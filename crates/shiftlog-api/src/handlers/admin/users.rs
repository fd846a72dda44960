//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_entity::user::User;
use shiftlog_service::user::admin::AdminUpdateUserRequest;

use crate::dto::request::UserSearchQuery;
use crate::dto::response::{ApiResponse, MessageResponse, ToggleResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/users?search=
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<ApiResponse<Vec<User>>>, AppError> {
    let users = state
        .admin_user_service
        .list(&auth, query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(users)))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AdminUpdateUserRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.admin_user_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/admin/users/{id}/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ToggleResponse>>, AppError> {
    let enabled = state.admin_user_service.toggle_favorite(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ToggleResponse { enabled })))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.admin_user_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "User and all their data deleted",
    ))))
}
