//! Report template repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shiftlog_core::error::{AppError, ErrorKind};
use shiftlog_core::result::AppResult;
use shiftlog_entity::template::{CreateTemplate, ReportTemplate};

/// Repository for per-user report templates.
#[derive(Debug, Clone)]
pub struct TemplateRepository {
    pool: PgPool,
}

impl TemplateRepository {
    /// Create a new template repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new template.
    pub async fn create(&self, data: &CreateTemplate) -> AppResult<ReportTemplate> {
        sqlx::query_as::<_, ReportTemplate>(
            "INSERT INTO report_templates (user_id, name, category, title, notes, item_name, part_number, customer, color) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.category)
        .bind(&data.title)
        .bind(&data.notes)
        .bind(&data.item_name)
        .bind(&data.part_number)
        .bind(&data.customer)
        .bind(&data.color)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create template", e))
    }

    /// Find a template by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ReportTemplate>> {
        sqlx::query_as::<_, ReportTemplate>("SELECT * FROM report_templates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find template", e))
    }

    /// All templates owned by a user, newest first.
    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<ReportTemplate>> {
        sqlx::query_as::<_, ReportTemplate>(
            "SELECT * FROM report_templates WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list templates", e))
    }

    /// Delete a template.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM report_templates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete template", e)
            })?;
        Ok(())
    }
}
