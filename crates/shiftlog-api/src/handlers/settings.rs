//! Self-service settings handlers.

use axum::Json;
use axum::extract::State;

use shiftlog_core::error::AppError;
use shiftlog_entity::user::User;
use shiftlog_service::user::service::UpdateSettingsRequest;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<User>>, AppError> {
    let user = state.user_service.update_settings(&auth, req).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/settings/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state
        .user_service
        .change_password(&auth, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password changed",
    ))))
}
