//! Item catalog entity model.
//!
//! The catalog is a deduplicated registry of `(item_name, part_number,
//! customer)` triples used for report autocomplete. Two entries may share
//! an item name as long as they differ in part number or customer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ItemEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// Item name.
    pub item_name: String,
    /// Part number, if known.
    pub part_number: Option<String>,
    /// Customer, if known.
    pub customer: Option<String>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last modified.
    pub updated_at: DateTime<Utc>,
}

impl ItemEntry {
    /// The `item | part | customer` display string used by autocomplete.
    pub fn display(&self) -> String {
        format!(
            "{} | {} | {}",
            self.item_name,
            self.part_number.as_deref().unwrap_or("No Part#"),
            self.customer.as_deref().unwrap_or("No Customer"),
        )
    }
}

/// The unique key of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemTriple {
    /// Item name (required, non-blank).
    pub item_name: String,
    /// Part number.
    pub part_number: Option<String>,
    /// Customer.
    pub customer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_fills_missing_parts() {
        let entry = ItemEntry {
            id: Uuid::new_v4(),
            item_name: "Widget A".into(),
            part_number: None,
            customer: Some("Acme".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(entry.display(), "Widget A | No Part# | Acme");
    }
}
