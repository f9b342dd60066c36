//! delivery-query: filtering, grouping, ordering and paging over in-memory deliveries,
//! laid out as a hexagon (domain, ports, use cases, adapters).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
