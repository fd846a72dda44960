//! Audit log repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use shiftlog_core::error::{AppError, ErrorKind};
use shiftlog_core::result::AppResult;
use shiftlog_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

/// Repository for audit log entries. Append-only: there are no update or
/// delete methods.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit log entry.
    pub async fn create(&self, data: &CreateAuditLogEntry) -> AppResult<AuditLogEntry> {
        sqlx::query_as::<_, AuditLogEntry>(
            "INSERT INTO audit_log (user_id, actor_id, action, detail) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.actor_id)
        .bind(&data.action)
        .bind(&data.detail)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }

    /// Entries within `[start, end)`, optionally filtered by subject user,
    /// newest first.
    pub async fn list_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        user_id: Option<Uuid>,
    ) -> AppResult<Vec<AuditLogEntry>> {
        let entries = match user_id {
            Some(uid) => {
                sqlx::query_as::<_, AuditLogEntry>(
                    "SELECT * FROM audit_log \
                     WHERE created_at >= $1 AND created_at < $2 AND user_id = $3 \
                     ORDER BY created_at DESC",
                )
                .bind(start)
                .bind(end)
                .bind(uid)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, AuditLogEntry>(
                    "SELECT * FROM audit_log \
                     WHERE created_at >= $1 AND created_at < $2 \
                     ORDER BY created_at DESC",
                )
                .bind(start)
                .bind(end)
                .fetch_all(&self.pool)
                .await
            }
        };

        entries
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to query audit log", e))
    }
}
