//! CSV rendering of delivery views. Uses the `csv` crate for quoting and escaping.
//!
//! All tables are semicolon-delimited with a header row. Unset timestamps render as empty cells.

use crate::domain::{AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, Period};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::BTreeMap;

fn writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> Result<String, csv::Error> {
    let bytes = wtr.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            e.to_string(),
        ))
    })?;
    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}

fn timestamp(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

fn period_cells(p: &Period) -> [String; 2] {
    [timestamp(p.start), timestamp(p.end)]
}

/// Render full delivery rows.
///
/// Format: `Id;ClientId;PaymentId;Status;Type;CargoType;StartCity;EndCity;LoadingStart;LoadingEnd;ArrivalStart;ArrivalEnd`
pub fn deliveries_to_csv(deliveries: &[&Delivery]) -> Result<String, csv::Error> {
    let mut wtr = writer();
    wtr.write_record([
        "Id",
        "ClientId",
        "PaymentId",
        "Status",
        "Type",
        "CargoType",
        "StartCity",
        "EndCity",
        "LoadingStart",
        "LoadingEnd",
        "ArrivalStart",
        "ArrivalEnd",
    ])?;
    for d in deliveries {
        let [loading_start, loading_end] = period_cells(&d.loading_period);
        let [arrival_start, arrival_end] = period_cells(&d.arrival_period);
        wtr.write_record([
            d.id.as_str(),
            d.client_id.as_str(),
            d.payment_id.as_deref().unwrap_or(""),
            d.status.as_str(),
            d.delivery_type.as_str(),
            d.cargo_type.as_str(),
            d.direction.origin.city.as_str(),
            d.direction.destination.city.as_str(),
            loading_start.as_str(),
            loading_end.as_str(),
            arrival_start.as_str(),
            arrival_end.as_str(),
        ])?;
    }
    wtr.flush()?;
    finish(wtr)
}

/// Render short infos. Same columns as the projection, in projection order.
pub fn short_infos_to_csv(infos: &[DeliveryShortInfo]) -> Result<String, csv::Error> {
    let mut wtr = writer();
    wtr.write_record([
        "Id",
        "StartCity",
        "EndCity",
        "ClientId",
        "Type",
        "LoadingStart",
        "LoadingEnd",
        "ArrivalStart",
        "ArrivalEnd",
        "Status",
        "CargoType",
    ])?;
    for info in infos {
        let [loading_start, loading_end] = period_cells(&info.loading_period);
        let [arrival_start, arrival_end] = period_cells(&info.arrival_period);
        wtr.write_record([
            info.id.as_str(),
            info.start_city.as_str(),
            info.end_city.as_str(),
            info.client_id.as_str(),
            info.delivery_type.as_str(),
            loading_start.as_str(),
            loading_end.as_str(),
            arrival_start.as_str(),
            arrival_end.as_str(),
            info.status.as_str(),
            info.cargo_type.as_str(),
        ])?;
    }
    wtr.flush()?;
    finish(wtr)
}

/// Format: `Status;Count`, one row per status present.
pub fn status_counts_to_csv(counts: &BTreeMap<DeliveryStatus, usize>) -> Result<String, csv::Error> {
    let mut wtr = writer();
    wtr.write_record(["Status", "Count"])?;
    for (status, count) in counts {
        wtr.write_record([status.as_str(), count.to_string().as_str()])?;
    }
    wtr.flush()?;
    finish(wtr)
}

/// Format: `StartCity;EndCity;AverageGapMinutes`, gaps with two decimals.
pub fn average_gaps_to_csv(gaps: &[AverageGapsInfo]) -> Result<String, csv::Error> {
    let mut wtr = writer();
    wtr.write_record(["StartCity", "EndCity", "AverageGapMinutes"])?;
    for row in gaps {
        wtr.write_record([
            row.start_city.as_str(),
            row.end_city.as_str(),
            format!("{:.2}", row.average_gap).as_str(),
        ])?;
    }
    wtr.flush()?;
    finish(wtr)
}
