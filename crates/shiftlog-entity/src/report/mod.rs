//! Shift report entity.

pub mod model;

pub use model::{CreateReport, Report, ReportPatch, EDIT_WINDOW_DAYS};
