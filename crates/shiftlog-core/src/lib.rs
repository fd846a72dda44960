//! # shiftlog-core
//!
//! Core crate for Shiftlog. Contains configuration schemas, the unified
//! error system, and the local-time reporting window used by every
//! date-filtered query.
//!
//! This crate has **no** internal dependencies on other Shiftlog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod window;

pub use error::AppError;
pub use result::AppResult;
