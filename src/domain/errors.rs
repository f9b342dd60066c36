//! Domain errors. Used by ports, use cases and the gap aggregation.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Delivery source error: {0}")]
    Source(String),

    #[error("Failed to parse deliveries: {0}")]
    Parse(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// The travel-time guard passed but a bound used by the gap formula is missing.
    #[error("Delivery {delivery_id}: {field} is not set")]
    IncompletePeriod {
        delivery_id: String,
        field: &'static str,
    },
}
