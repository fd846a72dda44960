//! Admin-only handlers.

pub mod categories;
pub mod items;
pub mod users;
