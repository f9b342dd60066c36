//! Report service. Loads deliveries, runs every query and hands the derived views to a sink.
//!
//! Coordinates between the delivery source (data), the query helper (views) and the report sink (output).

use crate::domain::{Delivery, DeliveryType, DomainError};
use crate::ports::{DeliveryQueries, DeliverySource, ReportSink};
use crate::usecases::paging::PageRequest;
use std::sync::Arc;
use tracing::{info, warn};

/// Optional query parameters supplied by the host (usually from config).
#[derive(Debug, Clone, Default)]
pub struct ReportParams {
    pub client_id: Option<String>,
    pub city: Option<String>,
    pub delivery_type: Option<DeliveryType>,
    pub page: PageRequest,
}

/// Sizes of the views produced by one run.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    pub paid: usize,
    pub not_finished: usize,
    pub client_infos: Option<usize>,
    pub by_city_and_type: Option<usize>,
    pub uniq_cargo_types: usize,
    pub statuses: usize,
    pub directions: usize,
    pub page_len: usize,
}

/// Service running the full query set over one loaded collection.
///
/// Orchestrates the flow:
/// 1. Load deliveries from the source
/// 2. Run filters, projection, ordering and aggregation
/// 3. Cut one page of deliveries ordered by status and loading start
/// 4. Write every view to the sink
pub struct ReportService<Q: DeliveryQueries> {
    queries: Q,
    source: Arc<dyn DeliverySource>,
    sink: Arc<dyn ReportSink>,
}

impl<Q: DeliveryQueries> ReportService<Q> {
    pub fn new(queries: Q, source: Arc<dyn DeliverySource>, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            queries,
            source,
            sink,
        }
    }

    /// Load once and produce every report.
    pub async fn run(&self, params: &ReportParams) -> Result<ReportSummary, DomainError> {
        let deliveries = self.source.load_deliveries().await?;
        info!(count = deliveries.len(), "deliveries loaded");
        self.report(&deliveries, params).await
    }

    /// Produce every report for an already loaded collection.
    pub async fn report(
        &self,
        deliveries: &[Delivery],
        params: &ReportParams,
    ) -> Result<ReportSummary, DomainError> {
        let q = &self.queries;

        let paid = q.paid(deliveries);
        self.sink.write_deliveries("paid", &paid).await?;

        let not_finished = q.not_finished(deliveries);
        self.sink
            .write_deliveries("not_finished", &not_finished)
            .await?;

        let client_infos = match params.client_id.as_deref() {
            Some(client_id) => {
                let infos = q.delivery_infos_by_client(deliveries, client_id);
                info!(client_id, count = infos.len(), "client deliveries");
                self.sink
                    .write_short_infos(&format!("client_{}", client_id), &infos)
                    .await?;
                Some(infos.len())
            }
            None => None,
        };

        let by_city_and_type = match (params.city.as_deref(), params.delivery_type) {
            (Some(city), Some(kind)) => {
                let found = q.deliveries_by_city_and_type(deliveries, city, kind);
                info!(city, delivery_type = %kind, count = found.len(), "deliveries by city and type");
                self.sink.write_deliveries("by_city_and_type", &found).await?;
                Some(found.len())
            }
            (Some(_), None) | (None, Some(_)) => {
                warn!("city and delivery type must both be set; skipping city/type report");
                None
            }
            (None, None) => None,
        };

        let uniq_cargo_types = q.count_uniq_cargo_types(deliveries);

        let counts = q.counts_by_delivery_status(deliveries);
        self.sink.write_status_counts(&counts).await?;

        let gaps = q.average_travel_time_per_direction(deliveries)?;
        self.sink.write_average_gaps(&gaps).await?;

        let ordered = q.order_by_status_then_by_start_loading(deliveries);
        self.sink.write_deliveries("ordered", &ordered).await?;

        let page = q.paging(
            deliveries.iter(),
            |d| (d.status, d.loading_period.start),
            None::<fn(&&Delivery) -> bool>,
            params.page,
        );
        self.sink.write_deliveries("ordered_page", &page).await?;

        let summary = ReportSummary {
            total: deliveries.len(),
            paid: paid.len(),
            not_finished: not_finished.len(),
            client_infos,
            by_city_and_type,
            uniq_cargo_types,
            statuses: counts.len(),
            directions: gaps.len(),
            page_len: page.len(),
        };
        info!(
            total = summary.total,
            paid = summary.paid,
            not_finished = summary.not_finished,
            uniq_cargo_types = summary.uniq_cargo_types,
            directions = summary.directions,
            page = params.page.number,
            page_len = summary.page_len,
            "reports complete"
        );
        Ok(summary)
    }
}
