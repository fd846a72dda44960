//! Request DTOs.

use serde::Deserialize;
use uuid::Uuid;

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Employee ID.
    pub employee_id: String,
    /// Plaintext password.
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    /// Current password, verified before the change.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Query parameters shared by the windowed monitoring and audit views.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowQuery {
    /// Start of the range, `YYYY-MM-DD` in the local offset.
    pub start_date: Option<String>,
    /// End of the range, `YYYY-MM-DD` in the local offset.
    pub end_date: Option<String>,
    /// Item name filter.
    pub item: Option<String>,
    /// Subject user filter (audit log only).
    pub user_id: Option<Uuid>,
}

/// Autocomplete search query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    /// Search term.
    #[serde(default)]
    pub q: String,
}

/// User list search query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserSearchQuery {
    /// Name, employee ID, or department search term.
    pub search: Option<String>,
}
