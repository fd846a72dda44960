//! Report creation, editing, and deletion.

pub mod service;

pub use service::ReportService;
