//! Application use cases. Queries over deliveries and the report flow built on them.

pub mod paging;
pub mod query_service;
pub mod report_service;

pub use paging::{PageRequest, paging};
pub use query_service::{QueryHelper, travel_gap_minutes};
pub use report_service::{ReportParams, ReportService, ReportSummary};
