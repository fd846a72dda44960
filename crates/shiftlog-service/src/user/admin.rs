//! Administrative user management.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shiftlog_auth::password::PasswordHasher;
use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::user::UserRepository;
use shiftlog_entity::user::{UpdateUser, User};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// An administrative user edit. All fields optional; a supplied
/// `new_password` resets the account password.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminUpdateUserRequest {
    /// Profile fields to change.
    #[serde(flatten)]
    pub fields: UpdateUser,
    /// Replacement password.
    pub new_password: Option<String>,
}

/// Handles administrative user management. Every method requires the
/// admin flag on the request context.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    audit: AuditRecorder,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            audit,
        }
    }

    /// Lists every user, favorites first. With a search term, matches
    /// name, employee ID, or department.
    pub async fn list(&self, ctx: &RequestContext, search: Option<&str>) -> AppResult<Vec<User>> {
        ctx.require_admin()?;
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => self.user_repo.search(term).await,
            None => self.user_repo.list_all().await,
        }
    }

    /// Edits a user's profile and flags.
    ///
    /// Changing the employee ID re-checks uniqueness; changing the admin
    /// flag is called out separately in the audit trail.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        req: AdminUpdateUserRequest,
    ) -> AppResult<User> {
        ctx.require_admin()?;

        let mut user = self.load(id).await?;
        let was_admin = user.is_admin;

        if let Some(name) = req.fields.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
            user.name = name;
        }
        if let Some(employee_id) = req.fields.employee_id {
            let employee_id = employee_id.trim().to_string();
            if employee_id.is_empty() {
                return Err(AppError::validation("Employee ID cannot be empty"));
            }
            if employee_id != user.employee_id {
                if self
                    .user_repo
                    .find_by_employee_id(&employee_id)
                    .await?
                    .is_some()
                {
                    return Err(AppError::conflict("Employee ID is already registered"));
                }
                user.employee_id = employee_id;
            }
        }
        if let Some(department) = req.fields.department {
            user.department = Some(department).filter(|v| !v.trim().is_empty());
        }
        if let Some(section) = req.fields.section {
            user.section = Some(section).filter(|v| !v.trim().is_empty());
        }
        if let Some(job) = req.fields.job {
            user.job = Some(job).filter(|v| !v.trim().is_empty());
        }
        if let Some(shift) = req.fields.shift {
            user.shift = Some(shift).filter(|v| !v.trim().is_empty());
        }
        if let Some(is_admin) = req.fields.is_admin {
            user.is_admin = is_admin;
        }

        self.user_repo.update(&user).await?;

        if let Some(new_password) = req.new_password.filter(|p| !p.is_empty()) {
            let hash = self.hasher.hash_password(&new_password)?;
            self.user_repo.update_password(id, &hash).await?;
            self.audit
                .record_entry(
                    Some(id),
                    Some(ctx.user_id),
                    "password_reset",
                    format!("Password reset for '{}'", user.employee_id),
                )
                .await;
        }

        if user.is_admin != was_admin {
            self.audit
                .record_entry(
                    Some(id),
                    Some(ctx.user_id),
                    "admin_flag_changed",
                    format!(
                        "'{}' is {} an administrator",
                        user.employee_id,
                        if user.is_admin { "now" } else { "no longer" }
                    ),
                )
                .await;
        }

        self.audit
            .record_entry(
                Some(id),
                Some(ctx.user_id),
                "user_updated",
                format!("Updated account '{}'", user.employee_id),
            )
            .await;

        info!(user_id = %id, actor_id = %ctx.user_id, "User updated by admin");

        Ok(user)
    }

    /// Flips a user's favorite flag, returning the new value.
    pub async fn toggle_favorite(&self, ctx: &RequestContext, id: Uuid) -> AppResult<bool> {
        ctx.require_admin()?;
        self.load(id).await?;
        self.user_repo.toggle_favorite(id).await
    }

    /// Deletes a user and all their reports, templates, and sessions in
    /// one transaction. Self-deletion is rejected. The audit entry keeps
    /// a null subject so the history survives the deleted account.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;

        if id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        let user = self.load(id).await?;
        self.user_repo.delete_cascade(id).await?;

        self.audit
            .record_entry(
                None,
                Some(ctx.user_id),
                "user_deleted",
                format!("Deleted account '{}' ({})", user.employee_id, user.name),
            )
            .await;

        info!(user_id = %id, actor_id = %ctx.user_id, "User deleted by admin");

        Ok(())
    }

    async fn load(&self, id: Uuid) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_request_changes_nothing() {
        let req = AdminUpdateUserRequest::default();
        assert!(req.fields.name.is_none());
        assert!(req.fields.employee_id.is_none());
        assert!(req.fields.is_admin.is_none());
        assert!(req.new_password.is_none());
    }
}
