//! Report statistics: pure aggregation and the services that feed it.

pub mod aggregate;
pub mod service;

pub use aggregate::{CategorySlice, DailyTimeline, ItemCount, TimelineSeries, UserReportCount};
pub use service::StatsService;
