//! Audit log viewing with per-role subject filtering.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use shiftlog_core::result::AppResult;
use shiftlog_core::window::ReportingWindow;
use shiftlog_database::repositories::audit::AuditLogRepository;
use shiftlog_entity::audit::AuditLogEntry;

use crate::context::RequestContext;

/// An audit log page scoped to a resolved window.
#[derive(Debug, Clone, Serialize)]
pub struct AuditLogView {
    /// The resolved local-day window.
    pub window: ReportingWindow,
    /// The subject filter actually applied.
    pub user_id: Option<Uuid>,
    /// Matching entries, newest first.
    pub entries: Vec<AuditLogEntry>,
}

/// Serves the audit log view.
#[derive(Debug, Clone)]
pub struct AuditQueryService {
    audit_repo: Arc<AuditLogRepository>,
}

impl AuditQueryService {
    /// Creates a new audit query service.
    pub fn new(audit_repo: Arc<AuditLogRepository>) -> Self {
        Self { audit_repo }
    }

    /// Lists audit entries in the requested window, newest first.
    ///
    /// Non-admin requesters always see their own entries only; whatever
    /// subject filter they request is replaced with their own ID. Admins
    /// may filter by any subject, or none.
    pub async fn view(
        &self,
        ctx: &RequestContext,
        start_date: Option<&str>,
        end_date: Option<&str>,
        requested_user: Option<Uuid>,
    ) -> AppResult<AuditLogView> {
        let window = ReportingWindow::resolve(start_date, end_date, Utc::now());
        let user_id = effective_subject_filter(ctx.is_admin, ctx.user_id, requested_user);

        let entries = self
            .audit_repo
            .list_in_range(window.start_utc(), window.end_utc_exclusive(), user_id)
            .await?;

        Ok(AuditLogView {
            window,
            user_id,
            entries,
        })
    }
}

/// The subject filter to apply for a requester.
fn effective_subject_filter(
    is_admin: bool,
    requester_id: Uuid,
    requested: Option<Uuid>,
) -> Option<Uuid> {
    if is_admin {
        requested
    } else {
        Some(requester_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_admin_is_forced_to_self() {
        let me = Uuid::new_v4();
        let someone_else = Uuid::new_v4();
        assert_eq!(
            effective_subject_filter(false, me, Some(someone_else)),
            Some(me)
        );
        assert_eq!(effective_subject_filter(false, me, None), Some(me));
    }

    #[test]
    fn test_admin_filter_passes_through() {
        let me = Uuid::new_v4();
        let target = Uuid::new_v4();
        assert_eq!(effective_subject_filter(true, me, Some(target)), Some(target));
        assert_eq!(effective_subject_filter(true, me, None), None);
    }
}
