//! Domain entities. Pure data structures for the delivery records and the views derived from them.
//!
//! Field names serialize in PascalCase to match the delivery data files produced upstream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a delivery. Declaration order is the ordering used when sorting by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Pending,
    Loading,
    InTransit,
    Unloading,
    Done,
    Cancelled,
}

impl DeliveryStatus {
    /// True for statuses that end the lifecycle (`Done`, `Cancelled`).
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Loading => "Loading",
            Self::InTransit => "InTransit",
            Self::Unloading => "Unloading",
            Self::Done => "Done",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DeliveryType {
    Standard,
    Express,
    Urgent,
}

impl DeliveryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Express => "Express",
            Self::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeliveryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            "urgent" => Ok(Self::Urgent),
            other => Err(format!("unknown delivery type: {}", other)),
        }
    }
}

/// Cargo classifier. Compared by value when counting distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CargoType {
    General,
    Fragile,
    Perishable,
    Hazardous,
    Bulk,
    Liquid,
}

impl CargoType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Fragile => "Fragile",
            Self::Perishable => "Perishable",
            Self::Hazardous => "Hazardous",
            Self::Bulk => "Bulk",
            Self::Liquid => "Liquid",
        }
    }
}

impl std::fmt::Display for CargoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    pub city: String,
}

impl Location {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Route of a delivery: where it is loaded and where it arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Direction {
    pub origin: Location,
    pub destination: Location,
}

impl Direction {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Location::new(origin),
            destination: Location::new(destination),
        }
    }
}

/// Time window with independently optional bounds. `None` means "not recorded",
/// which is distinct from any timestamp (including the Unix epoch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Period {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

impl Period {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }
}

/// A shipment record. Owned by the host; queries only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Delivery {
    pub id: String,
    pub client_id: String,
    /// Set once the delivery has been paid.
    #[serde(default)]
    pub payment_id: Option<String>,
    pub status: DeliveryStatus,
    #[serde(rename = "Type")]
    pub delivery_type: DeliveryType,
    pub cargo_type: CargoType,
    pub direction: Direction,
    #[serde(default)]
    pub loading_period: Period,
    #[serde(default)]
    pub arrival_period: Period,
}

/// Reduced per-client view of a delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryShortInfo {
    pub id: String,
    pub start_city: String,
    pub end_city: String,
    pub client_id: String,
    #[serde(rename = "Type")]
    pub delivery_type: DeliveryType,
    pub loading_period: Period,
    pub arrival_period: Period,
    pub status: DeliveryStatus,
    pub cargo_type: CargoType,
}

impl From<&Delivery> for DeliveryShortInfo {
    fn from(d: &Delivery) -> Self {
        Self {
            id: d.id.clone(),
            start_city: d.direction.origin.city.clone(),
            end_city: d.direction.destination.city.clone(),
            client_id: d.client_id.clone(),
            delivery_type: d.delivery_type,
            loading_period: d.loading_period,
            arrival_period: d.arrival_period,
            status: d.status,
            cargo_type: d.cargo_type,
        }
    }
}

/// Average travel gap in minutes for one origin/destination city pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AverageGapsInfo {
    pub start_city: String,
    pub end_city: String,
    pub average_gap: f64,
}
