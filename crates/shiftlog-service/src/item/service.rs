//! Item catalog administration and autocomplete search.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::item::ItemRepository;
use shiftlog_entity::item::{ItemEntry, ItemTriple};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;
use crate::item::import::SpreadsheetImporter;

/// Maximum autocomplete results per search.
const SEARCH_LIMIT: i64 = 50;

/// Outcome of a spreadsheet upload.
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    /// Rows extracted from the file after in-file deduplication.
    pub rows: usize,
    /// Entries actually inserted (rows already in the catalog are skipped).
    pub inserted: usize,
}

/// Handles the item catalog.
#[derive(Debug, Clone)]
pub struct ItemService {
    item_repo: Arc<ItemRepository>,
    importer: SpreadsheetImporter,
    audit: AuditRecorder,
}

impl ItemService {
    /// Creates a new item service.
    pub fn new(
        item_repo: Arc<ItemRepository>,
        importer: SpreadsheetImporter,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            item_repo,
            importer,
            audit,
        }
    }

    /// Autocomplete search over the catalog by item name. Available to
    /// every authenticated user.
    pub async fn search(&self, query: &str) -> AppResult<Vec<ItemEntry>> {
        let query = query.trim();
        if query.is_empty() {
            return self.item_repo.list_limited(SEARCH_LIMIT).await;
        }
        self.item_repo.search(query, SEARCH_LIMIT).await
    }

    /// Lists the whole catalog. Admin-only.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<ItemEntry>> {
        ctx.require_admin()?;
        self.item_repo.list_all().await
    }

    /// Adds one catalog entry. The whole triple is unique. Admin-only.
    pub async fn create(&self, ctx: &RequestContext, triple: ItemTriple) -> AppResult<ItemEntry> {
        ctx.require_admin()?;
        let triple = normalize(triple)?;

        if self.item_repo.find_by_triple(&triple).await?.is_some() {
            return Err(AppError::conflict("This item entry already exists"));
        }

        let entry = self.item_repo.create(&triple).await?;

        self.audit
            .record(
                ctx.user_id,
                "item_created",
                format!("Added item '{}'", entry.display()),
            )
            .await;

        Ok(entry)
    }

    /// Rewrites one catalog entry. The new triple must not collide with
    /// another entry. Admin-only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        triple: ItemTriple,
    ) -> AppResult<()> {
        ctx.require_admin()?;
        let triple = normalize(triple)?;

        if let Some(existing) = self.item_repo.find_by_triple(&triple).await? {
            if existing.id != id {
                return Err(AppError::conflict("This item entry already exists"));
            }
        }

        self.item_repo.update(id, &triple).await?;

        self.audit
            .record(
                ctx.user_id,
                "item_updated",
                format!("Updated item '{}'", triple.item_name),
            )
            .await;

        Ok(())
    }

    /// Deletes one catalog entry. Admin-only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        self.item_repo.delete(id).await?;

        self.audit
            .record(ctx.user_id, "item_deleted", "Deleted item entry")
            .await;

        Ok(())
    }

    /// Empties the catalog, returning how many entries were removed.
    /// Admin-only.
    pub async fn clear_all(&self, ctx: &RequestContext) -> AppResult<u64> {
        ctx.require_admin()?;
        let removed = self.item_repo.delete_all().await?;

        self.audit
            .record(
                ctx.user_id,
                "items_cleared",
                format!("Cleared item catalog ({removed} entries)"),
            )
            .await;

        info!(removed, "Item catalog cleared");
        Ok(removed)
    }

    /// Imports an uploaded `.xlsx` workbook into the catalog. Rows whose
    /// exact triple already exists are skipped. Admin-only.
    pub async fn import_xlsx(
        &self,
        ctx: &RequestContext,
        filename: &str,
        data: &[u8],
    ) -> AppResult<ImportSummary> {
        ctx.require_admin()?;
        self.importer.check_extension(filename)?;

        let triples = self.importer.extract_rows(data)?;
        let rows = triples.len();

        let mut inserted = 0;
        for triple in &triples {
            if self.item_repo.ensure(triple).await? {
                inserted += 1;
            }
        }

        self.audit
            .record(
                ctx.user_id,
                "items_imported",
                format!("Imported '{filename}': {inserted} of {rows} rows added"),
            )
            .await;

        info!(filename, rows, inserted, "Item spreadsheet imported");

        Ok(ImportSummary { rows, inserted })
    }
}

/// Trims all three fields and rejects a blank item name.
fn normalize(triple: ItemTriple) -> AppResult<ItemTriple> {
    let item_name = triple.item_name.trim().to_string();
    if item_name.is_empty() {
        return Err(AppError::validation("Item name is required"));
    }
    Ok(ItemTriple {
        item_name,
        part_number: triple
            .part_number
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
        customer: triple
            .customer
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_drops_blanks() {
        let t = normalize(ItemTriple {
            item_name: " Bolt ".into(),
            part_number: Some("  ".into()),
            customer: Some(" Acme ".into()),
        })
        .unwrap();
        assert_eq!(t.item_name, "Bolt");
        assert_eq!(t.part_number, None);
        assert_eq!(t.customer, Some("Acme".into()));
    }

    #[test]
    fn test_normalize_rejects_blank_name() {
        assert!(
            normalize(ItemTriple {
                item_name: "  ".into(),
                part_number: None,
                customer: None,
            })
            .is_err()
        );
    }
}
