//! Report mutation: create, view, edit, delete.
//!
//! Edits and deletions are gated on ownership and freshness: only the
//! owner may change a report, and only while it is less than two whole
//! days old. The gate is evaluated from `created_at` at request time.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use shiftlog_core::error::AppError;
use shiftlog_core::result::AppResult;
use shiftlog_database::repositories::category::CategoryRepository;
use shiftlog_database::repositories::item::ItemRepository;
use shiftlog_database::repositories::report::ReportRepository;
use shiftlog_entity::category::FALLBACK_COLOR;
use shiftlog_entity::item::ItemTriple;
use shiftlog_entity::report::{CreateReport, Report, ReportPatch};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Fields accepted when creating a report.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReportRequest {
    /// Time-of-day label, required non-blank.
    pub time_label: String,
    /// Category name, required non-blank.
    pub category: String,
    /// Title, required non-blank.
    pub title: String,
    /// Notes, defaults to empty.
    #[serde(default)]
    pub notes: Option<String>,
    /// Item worked on.
    #[serde(default)]
    pub item_name: Option<String>,
    /// Part number of the item.
    #[serde(default)]
    pub part_number: Option<String>,
    /// Customer the item belongs to.
    #[serde(default)]
    pub customer: Option<String>,
}

/// A created report together with its category's display color.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedReport {
    /// The stored report.
    pub report: Report,
    /// Color of the report's category, `secondary` when the name matches
    /// no category row.
    pub category_color: String,
}

/// A report plus its current editability for the requester.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDetail {
    /// The report.
    pub report: Report,
    /// Whether the requester may still edit or delete it.
    pub is_editable: bool,
}

/// Handles the report lifecycle.
#[derive(Debug, Clone)]
pub struct ReportService {
    report_repo: Arc<ReportRepository>,
    item_repo: Arc<ItemRepository>,
    category_repo: Arc<CategoryRepository>,
    audit: AuditRecorder,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        report_repo: Arc<ReportRepository>,
        item_repo: Arc<ItemRepository>,
        category_repo: Arc<CategoryRepository>,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            report_repo,
            item_repo,
            category_repo,
            audit,
        }
    }

    /// Creates a report for the requesting user.
    ///
    /// When the report names an item whose exact `(item_name, part_number,
    /// customer)` triple is not yet in the catalog, the entry is inserted
    /// in the same request, so the catalog grows as reports are written.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateReportRequest,
    ) -> AppResult<CreatedReport> {
        let time_label = required_field(&req.time_label, "Time is required")?;
        let category = required_field(&req.category, "Category is required")?;
        let title = required_field(&req.title, "Title is required")?;

        let item_name = blank_to_none(req.item_name);
        let part_number = blank_to_none(req.part_number);
        let customer = blank_to_none(req.customer);

        if let Some(name) = &item_name {
            self.item_repo
                .ensure(&ItemTriple {
                    item_name: name.clone(),
                    part_number: part_number.clone(),
                    customer: customer.clone(),
                })
                .await?;
        }

        let report = self
            .report_repo
            .create(&CreateReport {
                user_id: ctx.user_id,
                time_label,
                category,
                title,
                notes: req.notes.unwrap_or_default(),
                item_name,
                part_number,
                customer,
            })
            .await?;

        let category_color = self
            .category_repo
            .find_by_name(&report.category)
            .await?
            .map(|c| c.color)
            .unwrap_or_else(|| FALLBACK_COLOR.to_string());

        self.audit
            .record(
                ctx.user_id,
                "report_created",
                format!("Created report '{}'", report.title),
            )
            .await;

        info!(report_id = %report.id, user_id = %ctx.user_id, "Report created");

        Ok(CreatedReport {
            report,
            category_color,
        })
    }

    /// Fetches a report with its current editability.
    ///
    /// Owners may view their own reports and admins may view any report.
    /// `is_editable` is evaluated for the requester, so it is false for
    /// an admin viewing someone else's report.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<ReportDetail> {
        let report = self.load(id).await?;
        if report.user_id != ctx.user_id && !ctx.is_admin {
            return Err(AppError::authorization("Not your report"));
        }
        let is_editable = report.is_mutable_by(ctx.user_id, Utc::now());
        Ok(ReportDetail {
            report,
            is_editable,
        })
    }

    /// Applies a partial update to a report. Only supplied fields change.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        patch: ReportPatch,
    ) -> AppResult<Report> {
        let mut report = self.load(id).await?;
        check_mutation_allowed(&report, ctx.user_id, Utc::now())?;

        if let Some(time_label) = patch.time_label {
            report.time_label = required_field(&time_label, "Time is required")?;
        }
        if let Some(category) = patch.category {
            report.category = required_field(&category, "Category is required")?;
        }
        if let Some(title) = patch.title {
            report.title = required_field(&title, "Title is required")?;
        }
        if let Some(notes) = patch.notes {
            report.notes = notes;
        }
        if let Some(item_name) = patch.item_name {
            report.item_name = blank_to_none(item_name);
        }
        if let Some(part_number) = patch.part_number {
            report.part_number = blank_to_none(part_number);
        }
        if let Some(customer) = patch.customer {
            report.customer = blank_to_none(customer);
        }

        self.report_repo.update(&report).await?;

        self.audit
            .record(
                ctx.user_id,
                "report_edited",
                format!("Edited report '{}'", report.title),
            )
            .await;

        info!(report_id = %report.id, user_id = %ctx.user_id, "Report updated");

        Ok(report)
    }

    /// Deletes a report under the same ownership and freshness gate as
    /// editing. Irreversible.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let report = self.load(id).await?;
        check_mutation_allowed(&report, ctx.user_id, Utc::now())?;

        self.report_repo.delete(id).await?;

        self.audit
            .record(
                ctx.user_id,
                "report_deleted",
                format!("Deleted report '{}'", report.title),
            )
            .await;

        info!(report_id = %id, user_id = %ctx.user_id, "Report deleted");

        Ok(())
    }

    async fn load(&self, id: Uuid) -> AppResult<Report> {
        self.report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Report not found"))
    }
}

/// The ownership and freshness gate shared by edit and delete.
pub fn check_mutation_allowed(
    report: &Report,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if report.user_id != user_id {
        return Err(AppError::authorization("Not your report"));
    }
    if !report.is_within_edit_window(now) {
        return Err(AppError::stale_edit(
            "Reports older than 2 days can no longer be changed",
        ));
    }
    Ok(())
}

/// A required text field, trimmed. Blank input is a validation error.
fn required_field(value: &str, message: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AppError::validation(message))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Normalizes an optional text field: blank becomes `None`.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use shiftlog_core::error::ErrorKind;

    fn report(owner: Uuid, created_at: DateTime<Utc>) -> Report {
        Report {
            id: Uuid::new_v4(),
            user_id: owner,
            time_label: "08:00".into(),
            category: "Produksi".into(),
            title: "line check".into(),
            notes: String::new(),
            item_name: None,
            part_number: None,
            customer: None,
            created_at,
        }
    }

    #[test]
    fn test_gate_rejects_non_owner_before_staleness() {
        let now = Utc::now();
        // Stale AND foreign: ownership is checked first.
        let r = report(Uuid::new_v4(), now - Duration::days(5));
        let err = check_mutation_allowed(&r, Uuid::new_v4(), now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_gate_rejects_stale_report_for_owner() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let r = report(owner, now - Duration::days(2));
        let err = check_mutation_allowed(&r, owner, now).unwrap_err();
        assert_eq!(err.kind, ErrorKind::StaleEdit);
    }

    #[test]
    fn test_gate_allows_fresh_owned_report() {
        let owner = Uuid::new_v4();
        let now = Utc::now();
        let r = report(owner, now - Duration::hours(47));
        assert!(check_mutation_allowed(&r, owner, now).is_ok());
    }

    #[test]
    fn test_required_field_trims_and_rejects_blank() {
        assert_eq!(required_field("  08:00 ", "x").unwrap(), "08:00");
        assert!(required_field("   ", "x").is_err());
    }

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(Some("  ".into())), None);
        assert_eq!(blank_to_none(Some(" Bolt ".into())), Some("Bolt".into()));
        assert_eq!(blank_to_none(None), None);
    }
}
