//! Report template management.

pub mod service;

pub use service::TemplateService;
