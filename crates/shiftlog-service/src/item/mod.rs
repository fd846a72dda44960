//! Item catalog management and spreadsheet import.

pub mod import;
pub mod service;

pub use import::SpreadsheetImporter;
pub use service::ItemService;
