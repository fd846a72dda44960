//! Report category entity model.
//!
//! Reports reference categories by *name*, copied at write time. Renaming
//! or deactivating a category never relabels historic reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Display color used when a report's category name no longer matches any
/// category row.
pub const FALLBACK_COLOR: &str = "secondary";

/// A report classification label with display styling.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Unique category name.
    pub name: String,
    /// Display color tag (Bootstrap color class).
    pub color: String,
    /// Display icon tag (Bootstrap icon class).
    pub icon: String,
    /// Whether the category is offered on new-report forms.
    pub is_active: bool,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategory {
    /// Unique category name.
    pub name: String,
    /// Display color tag.
    pub color: String,
    /// Display icon tag.
    pub icon: String,
}

/// Partial update of an existing category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategory {
    /// New name.
    pub name: Option<String>,
    /// New color tag.
    pub color: Option<String>,
    /// New icon tag.
    pub icon: Option<String>,
}
