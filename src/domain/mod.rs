//! Core domain layer. No external I/O dependencies.
//!
//! Entities and derived views live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    AverageGapsInfo, CargoType, Delivery, DeliveryShortInfo, DeliveryStatus, DeliveryType,
    Direction, Location, Period,
};
pub use errors::DomainError;
