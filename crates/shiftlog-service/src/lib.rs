//! # shiftlog-service
//!
//! Business logic service layer for Shiftlog. Each service orchestrates
//! repositories and authentication to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod audit;
pub mod category;
pub mod context;
pub mod item;
pub mod report;
pub mod stats;
pub mod template;
pub mod user;

pub use audit::{AuditQueryService, AuditRecorder};
pub use category::CategoryService;
pub use context::RequestContext;
pub use item::{ItemService, SpreadsheetImporter};
pub use report::ReportService;
pub use stats::StatsService;
pub use template::TemplateService;
pub use user::{AdminUserService, UserService};
