//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit log entry recording a security- or data-relevant
/// action. Entries are append-only; normal flows never mutate or delete
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The user the action concerns. Nullable so history survives user
    /// deletion.
    pub user_id: Option<Uuid>,
    /// The user who performed the action. Defaults to the subject.
    pub actor_id: Option<Uuid>,
    /// The action tag (e.g. `"login"`, `"report_deleted"`).
    pub action: String,
    /// Free-text detail about the action.
    pub detail: String,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The subject user.
    pub user_id: Option<Uuid>,
    /// The acting user; `None` falls back to the subject.
    pub actor_id: Option<Uuid>,
    /// Action tag.
    pub action: String,
    /// Free-text detail.
    pub detail: String,
}
