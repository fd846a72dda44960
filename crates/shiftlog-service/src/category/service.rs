//! Category administration.
//!
//! Reports copy the category *name* at write time, so renaming,
//! deactivating, or deleting a category never touches historic reports.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::category::CategoryRepository;
use shiftlog_entity::category::{Category, CreateCategory, UpdateCategory};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Handles category administration.
#[derive(Debug, Clone)]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
    audit: AuditRecorder,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(category_repo: Arc<CategoryRepository>, audit: AuditRecorder) -> Self {
        Self {
            category_repo,
            audit,
        }
    }

    /// Lists every category, active or not. Admin-only.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Category>> {
        ctx.require_admin()?;
        self.category_repo.list_all().await
    }

    /// Lists the categories offered on new-report forms. No admin gate.
    pub async fn list_active(&self) -> AppResult<Vec<Category>> {
        self.category_repo.list_active().await
    }

    /// Adds a category. Names are unique. Admin-only.
    pub async fn create(&self, ctx: &RequestContext, req: CreateCategory) -> AppResult<Category> {
        ctx.require_admin()?;

        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Category name is required"));
        }
        if self.category_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::conflict("A category with this name already exists"));
        }

        let category = self
            .category_repo
            .create(&CreateCategory { name, ..req })
            .await?;

        self.audit
            .record(
                ctx.user_id,
                "category_created",
                format!("Added category '{}'", category.name),
            )
            .await;

        info!(category_id = %category.id, "Category created");

        Ok(category)
    }

    /// Updates a category's display fields. Renames re-check uniqueness.
    /// Admin-only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: UpdateCategory,
    ) -> AppResult<Category> {
        ctx.require_admin()?;

        let mut category = self.load(id).await?;

        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Category name is required"));
            }
            if name != category.name
                && self.category_repo.find_by_name(&name).await?.is_some()
            {
                return Err(AppError::conflict("A category with this name already exists"));
            }
            category.name = name;
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        if let Some(icon) = patch.icon {
            category.icon = icon;
        }

        self.category_repo.update(&category).await?;

        self.audit
            .record(
                ctx.user_id,
                "category_updated",
                format!("Updated category '{}'", category.name),
            )
            .await;

        Ok(category)
    }

    /// Flips a category's active flag, returning the new value. Admin-only.
    pub async fn toggle_active(&self, ctx: &RequestContext, id: Uuid) -> AppResult<bool> {
        ctx.require_admin()?;
        let category = self.load(id).await?;
        let is_active = self.category_repo.toggle_active(id).await?;

        self.audit
            .record(
                ctx.user_id,
                "category_toggled",
                format!(
                    "Category '{}' is now {}",
                    category.name,
                    if is_active { "active" } else { "inactive" }
                ),
            )
            .await;

        Ok(is_active)
    }

    /// Deletes a category. Historic reports keep the copied name and render
    /// with the fallback color. Admin-only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        ctx.require_admin()?;
        let category = self.load(id).await?;
        self.category_repo.delete(id).await?;

        self.audit
            .record(
                ctx.user_id,
                "category_deleted",
                format!("Deleted category '{}'", category.name),
            )
            .await;

        info!(category_id = %id, "Category deleted");
        Ok(())
    }

    async fn load(&self, id: Uuid) -> AppResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))
    }
}
