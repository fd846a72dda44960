//! Item autocomplete handler.

use axum::Json;
use axum::extract::{Query, State};
use serde::Serialize;

use shiftlog_core::error::AppError;
use shiftlog_entity::item::ItemEntry;

use crate::dto::request::SearchQuery;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// A catalog entry with its pre-rendered autocomplete label.
#[derive(Debug, Clone, Serialize)]
pub struct ItemSuggestion {
    /// The matching entry.
    #[serde(flatten)]
    pub entry: ItemEntry,
    /// `item | part | customer` display string.
    pub display: String,
}

/// GET /api/items/search?q=
pub async fn search_items(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<ItemSuggestion>>>, AppError> {
    let entries = state.item_service.search(&query.q).await?;
    let suggestions = entries
        .into_iter()
        .map(|entry| ItemSuggestion {
            display: entry.display(),
            entry,
        })
        .collect();
    Ok(Json(ApiResponse::ok(suggestions)))
}
