//! Login session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An authenticated login session backing a signed token.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier (embedded in the token).
    pub id: Uuid,
    /// The authenticated user.
    pub user_id: Uuid,
    /// IP address at login.
    pub ip_address: Option<String>,
    /// User-Agent at login.
    pub user_agent: Option<String>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
    /// Set when the session is explicitly logged out.
    pub terminated_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the session is still usable at `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.terminated_at.is_none() && now < self.expires_at
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The authenticated user.
    pub user_id: Uuid,
    /// IP address at login.
    pub ip_address: Option<String>,
    /// User-Agent at login.
    pub user_agent: Option<String>,
    /// Expiry timestamp.
    pub expires_at: DateTime<Utc>,
}
