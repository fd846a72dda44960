//! Session lifecycle manager: login, logout, token validation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use shiftlog_core::config::AuthConfig;
use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::audit::AuditLogRepository;
use shiftlog_database::repositories::session::SessionRepository;
use shiftlog_database::repositories::user::UserRepository;
use shiftlog_entity::audit::CreateAuditLogEntry;
use shiftlog_entity::session::{CreateSession, Session};
use shiftlog_entity::user::User;

use crate::jwt::encoder::IssuedToken;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// Generated access token.
    pub token: IssuedToken,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the session lifecycle: login, logout, and per-request
/// token validation.
#[derive(Clone)]
pub struct SessionManager {
    jwt_encoder: Arc<JwtEncoder>,
    jwt_decoder: Arc<JwtDecoder>,
    session_repo: Arc<SessionRepository>,
    user_repo: Arc<UserRepository>,
    audit_repo: Arc<AuditLogRepository>,
    password_hasher: Arc<PasswordHasher>,
    session_ttl_hours: i64,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_ttl_hours", &self.session_ttl_hours)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        session_repo: Arc<SessionRepository>,
        user_repo: Arc<UserRepository>,
        audit_repo: Arc<AuditLogRepository>,
        password_hasher: Arc<PasswordHasher>,
        config: &AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            session_repo,
            user_repo,
            audit_repo,
            password_hasher,
            session_ttl_hours: config.session_ttl_hours as i64,
        }
    }

    /// Performs the login flow: verify credentials, create a session row,
    /// issue an access token, and record the login in the audit trail.
    ///
    /// Credential failures return a single generic authentication error so
    /// callers cannot distinguish an unknown employee ID from a wrong
    /// password.
    pub async fn login(
        &self,
        employee_id: &str,
        password: &str,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> AppResult<LoginResult> {
        let user = self
            .user_repo
            .find_by_employee_id(employee_id)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid employee ID or password"))?;

        let verified = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;
        if !verified {
            return Err(AppError::authentication("Invalid employee ID or password"));
        }

        let session = self
            .session_repo
            .create(&CreateSession {
                user_id: user.id,
                ip_address: ip_address.map(str::to_string),
                user_agent: user_agent.map(str::to_string),
                expires_at: Utc::now() + chrono::Duration::hours(self.session_ttl_hours),
            })
            .await?;

        let token = self.jwt_encoder.generate_access_token(&user, session.id)?;

        self.record_audit(
            user.id,
            "login",
            format!("Logged in from {}", ip_address.unwrap_or("unknown")),
        )
        .await;

        info!(user_id = %user.id, employee_id = %user.employee_id, "User logged in");

        Ok(LoginResult {
            token,
            session,
            user,
        })
    }

    /// Terminates a session and records the logout.
    pub async fn logout(&self, session_id: Uuid, user_id: Uuid) -> AppResult<()> {
        self.session_repo.terminate(session_id).await?;
        self.record_audit(user_id, "logout", "Logged out".to_string())
            .await;
        info!(user_id = %user_id, session_id = %session_id, "User logged out");
        Ok(())
    }

    /// Validates a bearer token for a request.
    ///
    /// Decodes the token, checks that its session is still active, and
    /// reloads the user so a revoked account or demoted admin flag takes
    /// effect immediately rather than at token expiry.
    pub async fn validate_token(&self, token: &str) -> AppResult<(Claims, User)> {
        let claims = self.jwt_decoder.decode_access_token(token)?;

        let session = self
            .session_repo
            .find_by_id(claims.sid)
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;
        if !session.is_active(Utc::now()) {
            return Err(AppError::authentication("Session is no longer active"));
        }

        let user = self
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        Ok((claims, user))
    }

    /// Appends an audit entry, logging and swallowing failures so audit
    /// problems never break the auth flow.
    async fn record_audit(&self, user_id: Uuid, action: &str, detail: String) {
        let entry = CreateAuditLogEntry {
            user_id: Some(user_id),
            actor_id: Some(user_id),
            action: action.to_string(),
            detail,
        };
        if let Err(e) = self.audit_repo.create(&entry).await {
            error!(error = %e, action, "Failed to record audit entry");
        }
    }
}
