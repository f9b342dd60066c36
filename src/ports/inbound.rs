//! Inbound port. Hosts call into the query layer through this trait.

use crate::domain::{
    AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, DeliveryType, DomainError,
};
use crate::usecases::paging::{self, PageRequest};
use std::collections::BTreeMap;

/// Query surface over an in-memory delivery collection.
///
/// Every method is a pure function of its arguments. Results are materialized before
/// returning; subsets borrow from `deliveries`, projections and aggregates are owned.
pub trait DeliveryQueries: Send + Sync {
    /// Deliveries with a payment id.
    fn paid<'a>(&self, deliveries: &'a [Delivery]) -> Vec<&'a Delivery>;

    /// Deliveries whose status is neither `Done` nor `Cancelled`.
    fn not_finished<'a>(&self, deliveries: &'a [Delivery]) -> Vec<&'a Delivery>;

    /// Short infos for one client, in input order.
    fn delivery_infos_by_client(
        &self,
        deliveries: &[Delivery],
        client_id: &str,
    ) -> Vec<DeliveryShortInfo>;

    /// Deliveries starting in `city` with the given type. Not limited in length.
    fn deliveries_by_city_and_type<'a>(
        &self,
        deliveries: &'a [Delivery],
        city: &str,
        delivery_type: DeliveryType,
    ) -> Vec<&'a Delivery>;

    /// Stable sort by status, then by loading start (unset starts first).
    fn order_by_status_then_by_start_loading<'a>(
        &self,
        deliveries: &'a [Delivery],
    ) -> Vec<&'a Delivery>;

    fn count_uniq_cargo_types(&self, deliveries: &[Delivery]) -> usize;

    fn counts_by_delivery_status(&self, deliveries: &[Delivery]) -> BTreeMap<DeliveryStatus, usize>;

    /// Average loading-to-arrival gap in minutes per (start city, end city), sorted by city pair.
    fn average_travel_time_per_direction(
        &self,
        deliveries: &[Delivery],
    ) -> Result<Vec<AverageGapsInfo>, DomainError>;

    /// Filter, sort by key, then cut one page. See [`paging::paging`].
    fn paging<T, K, F, P>(
        &self,
        elements: impl IntoIterator<Item = T>,
        ordering: F,
        filter: Option<P>,
        page: PageRequest,
    ) -> Vec<T>
    where
        Self: Sized,
        K: Ord,
        F: FnMut(&T) -> K,
        P: FnMut(&T) -> bool,
    {
        paging::paging(elements, ordering, filter, page)
    }
}
