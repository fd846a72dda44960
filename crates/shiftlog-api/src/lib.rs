//! # shiftlog-api
//!
//! HTTP API layer for Shiftlog: the axum router, request handlers, DTOs,
//! and the authentication extractor. The `AppError` → HTTP status mapping
//! lives in `shiftlog-core`; [`error`] pins it with tests.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
