pub mod csv_sink;
pub mod csv_utils;

pub use csv_sink::CsvReportSink;
pub use csv_utils::{average_gaps_to_csv, deliveries_to_csv, short_infos_to_csv, status_counts_to_csv};
