//! Item catalog entity.

pub mod model;

pub use model::{ItemEntry, ItemTriple};
