//! Per-user report templates.
//!
//! Templates are owner-only but carry no freshness gate: unlike reports
//! they may be deleted at any time.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::template::TemplateRepository;
use shiftlog_entity::template::{CreateTemplate, ReportTemplate};

use crate::context::RequestContext;

/// Default card color for templates created without one.
const DEFAULT_TEMPLATE_COLOR: &str = "primary";

/// Fields accepted when creating a template.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplateRequest {
    /// Template display name, required non-blank.
    pub name: String,
    /// Default category name.
    pub category: String,
    /// Default title.
    pub title: String,
    /// Default notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Default item name.
    #[serde(default)]
    pub item_name: Option<String>,
    /// Default part number.
    #[serde(default)]
    pub part_number: Option<String>,
    /// Default customer.
    #[serde(default)]
    pub customer: Option<String>,
    /// Card color, defaults to `primary`.
    #[serde(default)]
    pub color: Option<String>,
}

/// Handles template management.
#[derive(Debug, Clone)]
pub struct TemplateService {
    template_repo: Arc<TemplateRepository>,
}

impl TemplateService {
    /// Creates a new template service.
    pub fn new(template_repo: Arc<TemplateRepository>) -> Self {
        Self { template_repo }
    }

    /// Creates a template owned by the requesting user.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateTemplateRequest,
    ) -> AppResult<ReportTemplate> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Template name is required"));
        }

        let template = self
            .template_repo
            .create(&CreateTemplate {
                user_id: ctx.user_id,
                name: name.to_string(),
                category: req.category,
                title: req.title,
                notes: req.notes.unwrap_or_default(),
                item_name: req.item_name.filter(|v| !v.trim().is_empty()),
                part_number: req.part_number.filter(|v| !v.trim().is_empty()),
                customer: req.customer.filter(|v| !v.trim().is_empty()),
                color: req
                    .color
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TEMPLATE_COLOR.to_string()),
            })
            .await?;

        info!(template_id = %template.id, user_id = %ctx.user_id, "Template created");

        Ok(template)
    }

    /// Lists the requesting user's templates, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<ReportTemplate>> {
        self.template_repo.list_by_user(ctx.user_id).await
    }

    /// Deletes one of the requesting user's templates.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let template = self
            .template_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Template not found"))?;

        if template.user_id != ctx.user_id {
            return Err(AppError::authorization("Not your template"));
        }

        self.template_repo.delete(id).await?;
        info!(template_id = %id, user_id = %ctx.user_id, "Template deleted");
        Ok(())
    }
}
