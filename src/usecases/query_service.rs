//! Query helper. Filters, projection, ordering and aggregation over a delivery slice.
//!
//! Stateless: every operation reads its input and returns fresh values. Subsets are
//! returned as borrows of the input; nothing is copied or mutated.

use crate::domain::{
    AverageGapsInfo, CargoType, Delivery, DeliveryShortInfo, DeliveryStatus, DeliveryType,
    DomainError,
};
use crate::ports::DeliveryQueries;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

const MICROS_PER_MINUTE: f64 = 60_000_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Default implementation of [`DeliveryQueries`].
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryHelper;

impl QueryHelper {
    pub fn new() -> Self {
        Self
    }
}

/// Travel gap of one delivery in minutes.
///
/// Counted only when the loading end and the arrival start are both recorded; the value
/// itself spans from loading start to arrival end. Deliveries failing that check count as 0.
/// Errors when the check passes but one of the spanned bounds is missing.
pub fn travel_gap_minutes(delivery: &Delivery) -> Result<f64, DomainError> {
    if delivery.loading_period.end.is_none() || delivery.arrival_period.start.is_none() {
        return Ok(0.0);
    }
    let arrival_end = delivery
        .arrival_period
        .end
        .ok_or_else(|| DomainError::IncompletePeriod {
            delivery_id: delivery.id.clone(),
            field: "arrival end",
        })?;
    let loading_start = delivery
        .loading_period
        .start
        .ok_or_else(|| DomainError::IncompletePeriod {
            delivery_id: delivery.id.clone(),
            field: "loading start",
        })?;
    let gap = arrival_end - loading_start;
    // Microseconds overflow only for gaps beyond ~292k years.
    Ok(match gap.num_microseconds() {
        Some(micros) => micros as f64 / MICROS_PER_MINUTE,
        None => gap.num_milliseconds() as f64 / MILLIS_PER_MINUTE,
    })
}

impl DeliveryQueries for QueryHelper {
    fn paid<'a>(&self, deliveries: &'a [Delivery]) -> Vec<&'a Delivery> {
        deliveries.iter().filter(|d| d.payment_id.is_some()).collect()
    }

    fn not_finished<'a>(&self, deliveries: &'a [Delivery]) -> Vec<&'a Delivery> {
        deliveries
            .iter()
            .filter(|d| !d.status.is_finished())
            .collect()
    }

    fn delivery_infos_by_client(
        &self,
        deliveries: &[Delivery],
        client_id: &str,
    ) -> Vec<DeliveryShortInfo> {
        deliveries
            .iter()
            .filter(|d| d.client_id == client_id)
            .map(DeliveryShortInfo::from)
            .collect()
    }

    fn deliveries_by_city_and_type<'a>(
        &self,
        deliveries: &'a [Delivery],
        city: &str,
        delivery_type: DeliveryType,
    ) -> Vec<&'a Delivery> {
        deliveries
            .iter()
            .filter(|d| d.direction.origin.city == city && d.delivery_type == delivery_type)
            .collect()
    }

    fn order_by_status_then_by_start_loading<'a>(
        &self,
        deliveries: &'a [Delivery],
    ) -> Vec<&'a Delivery> {
        let mut ordered: Vec<&Delivery> = deliveries.iter().collect();
        // `None < Some(_)`: unset loading starts come first within a status.
        ordered.sort_by(|a, b| {
            a.status
                .cmp(&b.status)
                .then_with(|| a.loading_period.start.cmp(&b.loading_period.start))
        });
        ordered
    }

    fn count_uniq_cargo_types(&self, deliveries: &[Delivery]) -> usize {
        deliveries
            .iter()
            .map(|d| d.cargo_type)
            .collect::<HashSet<CargoType>>()
            .len()
    }

    fn counts_by_delivery_status(&self, deliveries: &[Delivery]) -> BTreeMap<DeliveryStatus, usize> {
        let mut counts = BTreeMap::new();
        for d in deliveries {
            *counts.entry(d.status).or_insert(0) += 1;
        }
        counts
    }

    fn average_travel_time_per_direction(
        &self,
        deliveries: &[Delivery],
    ) -> Result<Vec<AverageGapsInfo>, DomainError> {
        // (start city, end city) -> (sum of gaps, members)
        let mut groups: BTreeMap<(&str, &str), (f64, usize)> = BTreeMap::new();
        for d in deliveries {
            let gap = travel_gap_minutes(d)?;
            let key = (
                d.direction.origin.city.as_str(),
                d.direction.destination.city.as_str(),
            );
            let entry = groups.entry(key).or_insert((0.0, 0));
            entry.0 += gap;
            entry.1 += 1;
        }
        debug!(directions = groups.len(), "grouped deliveries by direction");

        Ok(groups
            .into_iter()
            .map(|((start, end), (sum, count))| AverageGapsInfo {
                start_city: start.to_string(),
                end_city: end.to_string(),
                average_gap: sum / count as f64,
            })
            .collect())
    }
}
