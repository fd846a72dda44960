//! Audit trail recording and querying.

pub mod query;
pub mod recorder;

pub use query::AuditQueryService;
pub use recorder::AuditRecorder;
