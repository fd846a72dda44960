//! Item catalog repository implementation.
//!
//! Triple lookups use `IS NOT DISTINCT FROM` so that NULL part numbers and
//! customers compare equal, matching the whole-triple uniqueness rule.

use sqlx::PgPool;
use uuid::Uuid;

use shiftlog_core::error::{AppError, ErrorKind};
use shiftlog_core::result::AppResult;
use shiftlog_entity::item::{ItemEntry, ItemTriple};

/// Repository for the item catalog.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the whole catalog ordered by item name.
    pub async fn list_all(&self) -> AppResult<Vec<ItemEntry>> {
        sqlx::query_as::<_, ItemEntry>("SELECT * FROM item_library ORDER BY item_name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// First `limit` entries ordered by item name (autocomplete dropdown).
    pub async fn list_limited(&self, limit: i64) -> AppResult<Vec<ItemEntry>> {
        sqlx::query_as::<_, ItemEntry>("SELECT * FROM item_library ORDER BY item_name LIMIT $1")
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Case-insensitive substring search on item name, returning every
    /// matching triple (same item name may appear with several parts or
    /// customers).
    pub async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<ItemEntry>> {
        let pattern = format!("%{query}%");
        sqlx::query_as::<_, ItemEntry>(
            "SELECT * FROM item_library WHERE item_name ILIKE $1 \
             ORDER BY item_name, part_number, customer LIMIT $2",
        )
        .bind(pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search items", e))
    }

    /// Find the entry with exactly this triple, if present.
    pub async fn find_by_triple(&self, triple: &ItemTriple) -> AppResult<Option<ItemEntry>> {
        sqlx::query_as::<_, ItemEntry>(
            "SELECT * FROM item_library WHERE item_name = $1 \
             AND part_number IS NOT DISTINCT FROM $2 \
             AND customer IS NOT DISTINCT FROM $3",
        )
        .bind(&triple.item_name)
        .bind(&triple.part_number)
        .bind(&triple.customer)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }

    /// Insert a new entry.
    pub async fn create(&self, triple: &ItemTriple) -> AppResult<ItemEntry> {
        sqlx::query_as::<_, ItemEntry>(
            "INSERT INTO item_library (item_name, part_number, customer) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&triple.item_name)
        .bind(&triple.part_number)
        .bind(&triple.customer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// Insert the triple unless an identical entry already exists.
    /// Returns `true` when a new entry was inserted.
    ///
    /// The conflict target matches the expression index on the triple, so
    /// concurrent insertions of the same triple resolve to a single row
    /// without surfacing an error to either caller.
    pub async fn ensure(&self, triple: &ItemTriple) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO item_library (item_name, part_number, customer) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (item_name, COALESCE(part_number, ''), COALESCE(customer, '')) \
             DO NOTHING",
        )
        .bind(&triple.item_name)
        .bind(&triple.part_number)
        .bind(&triple.customer)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to ensure item", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Overwrite an entry's triple.
    pub async fn update(&self, id: Uuid, triple: &ItemTriple) -> AppResult<()> {
        sqlx::query(
            "UPDATE item_library SET item_name = $2, part_number = $3, customer = $4, \
             updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(&triple.item_name)
        .bind(&triple.part_number)
        .bind(&triple.customer)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))?;
        Ok(())
    }

    /// Delete one entry.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM item_library WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;
        Ok(())
    }

    /// Delete every entry, returning how many were removed.
    pub async fn delete_all(&self) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM item_library")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to clear items", e))?;
        Ok(result.rows_affected())
    }
}
