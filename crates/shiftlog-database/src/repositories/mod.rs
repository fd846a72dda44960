//! Concrete repository implementations, one per entity.

pub mod audit;
pub mod category;
pub mod item;
pub mod report;
pub mod session;
pub mod template;
pub mod user;
