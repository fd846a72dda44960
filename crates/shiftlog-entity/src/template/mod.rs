//! Report template entity.

pub mod model;

pub use model::{CreateTemplate, ReportTemplate};
