//! User self-service: registration, profile settings, password changes.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use shiftlog_auth::password::PasswordHasher;
use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::user::UserRepository;
use shiftlog_entity::user::{CreateUser, User};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Fields accepted at registration.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Display name, required non-blank.
    pub name: String,
    /// Employee ID used for login, unique, required non-blank.
    pub employee_id: String,
    /// Plaintext password.
    pub password: String,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
    /// Section.
    #[serde(default)]
    pub section: Option<String>,
    /// Job title.
    #[serde(default)]
    pub job: Option<String>,
    /// Work shift.
    #[serde(default)]
    pub shift: Option<String>,
}

/// Fields accepted on a profile settings update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettingsRequest {
    /// New display name.
    pub name: Option<String>,
    /// New department.
    pub department: Option<String>,
    /// New section.
    pub section: Option<String>,
    /// New job title.
    pub job: Option<String>,
    /// New work shift.
    pub shift: Option<String>,
}

/// Handles user self-service operations.
#[derive(Debug, Clone)]
pub struct UserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    audit: AuditRecorder,
}

impl UserService {
    /// Creates a new user service.
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

    /// Registers a new account. Employee IDs are unique.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<User> {
        let name = req.name.trim().to_string();
        let employee_id = req.employee_id.trim().to_string();
        if name.is_empty() || employee_id.is_empty() {
            return Err(AppError::validation("Name and employee ID are required"));
        }
        if req.password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }
        if self
            .user_repo
            .find_by_employee_id(&employee_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Employee ID is already registered"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name,
                employee_id,
                password_hash,
                department: req.department,
                section: req.section,
                job: req.job,
                shift: req.shift,
                is_admin: false,
            })
            .await?;

        self.audit
            .record(
                user.id,
                "account_created",
                format!("Registered account '{}'", user.employee_id),
            )
            .await;

        info!(user_id = %user.id, employee_id = %user.employee_id, "User registered");

        Ok(user)
    }

    /// The current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<User> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Updates the current user's profile fields.
    pub async fn update_settings(
        &self,
        ctx: &RequestContext,
        req: UpdateSettingsRequest,
    ) -> AppResult<User> {
        let mut user = self.get_profile(ctx).await?;

        if let Some(name) = req.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
            user.name = name;
        }
        if let Some(department) = req.department {
            user.department = Some(department).filter(|v| !v.trim().is_empty());
        }
        if let Some(section) = req.section {
            user.section = Some(section).filter(|v| !v.trim().is_empty());
        }
        if let Some(job) = req.job {
            user.job = Some(job).filter(|v| !v.trim().is_empty());
        }
        if let Some(shift) = req.shift {
            user.shift = Some(shift).filter(|v| !v.trim().is_empty());
        }

        self.user_repo.update(&user).await?;

        self.audit
            .record(ctx.user_id, "settings_updated", "Updated profile settings")
            .await;

        info!(user_id = %ctx.user_id, "Profile updated");

        Ok(user)
    }

    /// Changes the current user's password after verifying the old one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let user = self.get_profile(ctx).await?;

        let valid = self
            .hasher
            .verify_password(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::authentication("Current password is incorrect"));
        }
        if new_password.is_empty() {
            return Err(AppError::validation("New password is required"));
        }

        let new_hash = self.hasher.hash_password(new_password)?;
        self.user_repo.update_password(ctx.user_id, &new_hash).await?;

        self.audit
            .record(ctx.user_id, "password_changed", "Changed own password")
            .await;

        info!(user_id = %ctx.user_id, "Password changed");

        Ok(())
    }
}
