//! Best-effort audit trail recording.
//!
//! Audit writes happen after the primary operation and must never fail it:
//! every error is logged through `tracing` and swallowed.

use std::sync::Arc;

use tracing::error;
use uuid::Uuid;

use shiftlog_database::repositories::audit::AuditLogRepository;
use shiftlog_entity::audit::CreateAuditLogEntry;

/// Appends audit trail entries without propagating failures.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    audit_repo: Arc<AuditLogRepository>,
}

impl AuditRecorder {
    /// Creates a new audit recorder.
    pub fn new(audit_repo: Arc<AuditLogRepository>) -> Self {
        Self { audit_repo }
    }

    /// Records an action performed by a user on their own data.
    pub async fn record(&self, subject: Uuid, action: &str, detail: impl Into<String>) {
        self.record_entry(Some(subject), None, action, detail).await;
    }

    /// Records an action with an explicit subject and actor. A `None`
    /// subject is kept for actions whose target row no longer exists
    /// (user deletion); a `None` actor defaults to the subject.
    pub async fn record_entry(
        &self,
        subject: Option<Uuid>,
        actor: Option<Uuid>,
        action: &str,
        detail: impl Into<String>,
    ) {
        let entry = CreateAuditLogEntry {
            user_id: subject,
            actor_id: actor.or(subject),
            action: action.to_string(),
            detail: detail.into(),
        };
        if let Err(e) = self.audit_repo.create(&entry).await {
            error!(error = %e, action, "Failed to record audit entry");
        }
    }
}
