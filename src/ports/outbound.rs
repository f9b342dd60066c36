//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, DomainError};
use std::collections::BTreeMap;

/// Delivery source. Produces the collection the queries run over.
#[async_trait::async_trait]
pub trait DeliverySource: Send + Sync {
    /// Load every delivery. Order is preserved; queries that keep input order rely on it.
    async fn load_deliveries(&self) -> Result<Vec<Delivery>, DomainError>;
}

/// Report sink. Persists derived views produced by the report service.
#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    /// Write a list of deliveries under the given report name (e.g. "paid").
    async fn write_deliveries(
        &self,
        name: &str,
        deliveries: &[&Delivery],
    ) -> Result<(), DomainError>;

    async fn write_short_infos(
        &self,
        name: &str,
        infos: &[DeliveryShortInfo],
    ) -> Result<(), DomainError>;

    async fn write_status_counts(
        &self,
        counts: &BTreeMap<DeliveryStatus, usize>,
    ) -> Result<(), DomainError>;

    async fn write_average_gaps(&self, gaps: &[AverageGapsInfo]) -> Result<(), DomainError>;
}
