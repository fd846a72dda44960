//! # shiftlog-entity
//!
//! Domain entity models for Shiftlog: users, categories, reports, report
//! templates, the item catalog, audit log entries, and sessions. Each
//! module contains the persisted model plus its create/update payloads.

pub mod audit;
pub mod category;
pub mod item;
pub mod report;
pub mod session;
pub mod template;
pub mod user;
