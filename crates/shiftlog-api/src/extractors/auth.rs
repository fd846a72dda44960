//! `AuthUser` extractor that pulls the bearer token from the Authorization
//! header, validates it against the session store, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use shiftlog_core::error::AppError;
use shiftlog_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Validates the signature, the backing session row, and reloads
        // the user so flag changes apply before token expiry.
        let (claims, user) = state.session_manager.validate_token(token).await?;

        let ip_address = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let ctx = RequestContext::new(
            user.id,
            claims.session_id(),
            user.employee_id,
            user.name,
            user.is_admin,
            ip_address,
        );

        Ok(AuthUser(ctx))
    }
}
