//! Report category entity.

pub mod model;

pub use model::{Category, CreateCategory, UpdateCategory, FALLBACK_COLOR};
