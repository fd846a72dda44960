//! HTTP request handlers, organized by domain.

pub mod admin;
pub mod audit;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod item;
pub mod monitoring;
pub mod report;
pub mod settings;
pub mod template;
