//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting and from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The user's employee ID (convenience field from the token claims).
    pub employee_id: String,
    /// The user's display name.
    pub name: String,
    /// Whether the user currently holds the admin flag.
    pub is_admin: bool,
    /// IP address of the request origin, when known.
    pub ip_address: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        user_id: Uuid,
        session_id: Uuid,
        employee_id: String,
        name: String,
        is_admin: bool,
        ip_address: Option<String>,
    ) -> Self {
        Self {
            user_id,
            session_id,
            employee_id,
            name,
            is_admin,
            ip_address,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Rejects the request unless the current user is an admin.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::authorization("Administrator access required"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(is_admin: bool) -> RequestContext {
        RequestContext::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "EMP-042".into(),
            "Operator".into(),
            is_admin,
            None,
        )
    }

    #[test]
    fn test_require_admin_rejects_regular_users() {
        assert!(ctx(false).require_admin().is_err());
        assert!(ctx(true).require_admin().is_ok());
    }
}
