//! Infrastructure adapters. Implement outbound ports.
//!
//! Delivery sources and report sinks. Map errors to DomainError.

pub mod report;
pub mod source;
