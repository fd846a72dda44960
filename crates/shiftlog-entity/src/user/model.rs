//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered employee account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Human-readable display name.
    pub name: String,
    /// Unique employee ID used for login.
    pub employee_id: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Department the employee belongs to.
    pub department: Option<String>,
    /// Section within the department.
    pub section: Option<String>,
    /// Job title.
    pub job: Option<String>,
    /// Work shift label (e.g. `"Morning"`).
    pub shift: Option<String>,
    /// Whether this user has administrator privileges.
    pub is_admin: bool,
    /// Whether this user is pinned to the top of monitoring lists.
    pub is_favorite: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Unique employee ID.
    pub employee_id: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Department.
    pub department: Option<String>,
    /// Section.
    pub section: Option<String>,
    /// Job title.
    pub job: Option<String>,
    /// Work shift.
    pub shift: Option<String>,
    /// Administrator flag.
    pub is_admin: bool,
}

/// Data for an administrative update of an existing user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New employee ID (uniqueness re-checked when changed).
    pub employee_id: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New section.
    pub section: Option<String>,
    /// New job title.
    pub job: Option<String>,
    /// New shift.
    pub shift: Option<String>,
    /// New admin flag.
    pub is_admin: Option<bool>,
}
