//! Report template entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named, reusable bundle of default report fields owned by one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportTemplate {
    /// Unique template identifier.
    pub id: Uuid,
    /// Owning user.
    pub user_id: Uuid,
    /// Template display name.
    pub name: String,
    /// Default category name.
    pub category: String,
    /// Default title.
    pub title: String,
    /// Default notes.
    pub notes: String,
    /// Default item name.
    pub item_name: Option<String>,
    /// Default part number.
    pub part_number: Option<String>,
    /// Default customer.
    pub customer: Option<String>,
    /// UI color tag for the template card.
    pub color: String,
    /// When the template was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTemplate {
    /// Owning user.
    pub user_id: Uuid,
    /// Template name.
    pub name: String,
    /// Default category name.
    pub category: String,
    /// Default title.
    pub title: String,
    /// Default notes.
    pub notes: String,
    /// Default item name.
    pub item_name: Option<String>,
    /// Default part number.
    pub part_number: Option<String>,
    /// Default customer.
    pub customer: Option<String>,
    /// UI color tag.
    pub color: String,
}
