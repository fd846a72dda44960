//! Authentication and session configuration.

use serde::{Deserialize, Serialize};

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign session tokens.
    pub secret_key: String,
    /// Access token lifetime in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: u64,
    /// Session row lifetime in hours; expired sessions fail validation.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
}

fn default_token_ttl() -> u64 {
    12
}

fn default_session_ttl() -> u64 {
    12
}
