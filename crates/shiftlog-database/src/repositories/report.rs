//! Report repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use shiftlog_core::error::{AppError, ErrorKind};
use shiftlog_core::result::AppResult;
use shiftlog_entity::report::{CreateReport, Report};

/// Repository for shift reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new report. `created_at` is set by the database.
    pub async fn create(&self, data: &CreateReport) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "INSERT INTO reports (user_id, time_label, category, title, notes, item_name, part_number, customer) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.time_label)
        .bind(&data.category)
        .bind(&data.title)
        .bind(&data.notes)
        .bind(&data.item_name)
        .bind(&data.part_number)
        .bind(&data.customer)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create report", e))
    }

    /// Find a report by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// Overwrite a report's mutable fields.
    pub async fn update(&self, report: &Report) -> AppResult<()> {
        sqlx::query(
            "UPDATE reports SET time_label = $2, category = $3, title = $4, notes = $5, \
             item_name = $6, part_number = $7, customer = $8 WHERE id = $1",
        )
        .bind(report.id)
        .bind(&report.time_label)
        .bind(&report.category)
        .bind(&report.title)
        .bind(&report.notes)
        .bind(&report.item_name)
        .bind(&report.part_number)
        .bind(&report.customer)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update report", e))?;
        Ok(())
    }

    /// Delete a report.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete report", e))?;
        Ok(())
    }

    /// All reports owned by a user, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<Report>> {
        sqlx::query_as::<_, Report>(
            "SELECT * FROM reports WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))
    }

    /// Reports within a UTC time range `[start, end)`, optionally narrowed
    /// to one user and/or one item name. Newest first.
    pub async fn list_in_range(
        &self,
        user_id: Option<Uuid>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        item_name: Option<&str>,
    ) -> AppResult<Vec<Report>> {
        let mut conditions = vec![
            "created_at >= $1".to_string(),
            "created_at < $2".to_string(),
        ];
        let mut param_idx = 3u32;

        if user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if item_name.is_some() {
            conditions.push(format!("item_name = ${param_idx}"));
        }

        let sql = format!(
            "SELECT * FROM reports WHERE {} ORDER BY created_at DESC",
            conditions.join(" AND ")
        );

        let mut query = sqlx::query_as::<_, Report>(&sql).bind(start).bind(end);
        if let Some(uid) = user_id {
            query = query.bind(uid);
        }
        if let Some(item) = item_name {
            query = query.bind(item.to_string());
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query reports", e))
    }

    /// Every distinct non-blank item name across all reports, ordered.
    pub async fn distinct_item_names(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT item_name FROM reports \
             WHERE item_name IS NOT NULL AND item_name <> '' ORDER BY item_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list item names", e))
    }

    /// A user's most recently used distinct item names.
    pub async fn recent_item_names(&self, user_id: Uuid, limit: i64) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT item_name FROM ( \
                 SELECT item_name, MAX(created_at) AS last_used FROM reports \
                 WHERE user_id = $1 AND item_name IS NOT NULL AND item_name <> '' \
                 GROUP BY item_name \
             ) t ORDER BY last_used DESC LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list recent items", e)
        })
    }

    /// Count all reports.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count reports", e))
    }
}
