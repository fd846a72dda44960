//! Admin item catalog handlers, including the spreadsheet upload.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use serde::Serialize;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_entity::item::{ItemEntry, ItemTriple};
use shiftlog_service::item::service::ImportSummary;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/items
pub async fn list_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ItemEntry>>>, AppError> {
    let items = state.item_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(items)))
}

/// POST /api/admin/items
pub async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(triple): Json<ItemTriple>,
) -> Result<Json<ApiResponse<ItemEntry>>, AppError> {
    let entry = state.item_service.create(&auth, triple).await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// PUT /api/admin/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(triple): Json<ItemTriple>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.item_service.update(&auth, id, triple).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Item updated"))))
}

/// DELETE /api/admin/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.item_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Item deleted"))))
}

/// Outcome of clearing the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ClearedResponse {
    /// Entries removed.
    pub removed: u64,
}

/// DELETE /api/admin/items
pub async fn clear_items(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ClearedResponse>>, AppError> {
    let removed = state.item_service.clear_all(&auth).await?;
    Ok(Json(ApiResponse::ok(ClearedResponse { removed })))
}

/// POST /api/admin/items/upload
///
/// Multipart form with a single `file` field holding an `.xlsx` workbook.
pub async fn upload_items(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImportSummary>>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("Uploaded file has no filename"))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        let summary = state
            .item_service
            .import_xlsx(&auth, &filename, &data)
            .await?;
        return Ok(Json(ApiResponse::ok(summary)));
    }

    Err(AppError::validation("No file field in upload"))
}
