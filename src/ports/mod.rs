//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the host into the query layer
//! - Outbound: Called by the application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::DeliveryQueries;
pub use outbound::{DeliverySource, ReportSink};
