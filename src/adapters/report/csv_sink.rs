//! Implements ReportSink. Writes one CSV file per view into a reports directory.
//!
//! Files: `{name}.csv` for delivery lists and short infos, `status_counts.csv`, `average_gaps.csv`.
//! Existing files are replaced.

use super::csv_utils::{
    average_gaps_to_csv, deliveries_to_csv, short_infos_to_csv, status_counts_to_csv,
};
use crate::domain::{AverageGapsInfo, Delivery, DeliveryShortInfo, DeliveryStatus, DomainError};
use crate::ports::ReportSink;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// CSV report directory.
pub struct CsvReportSink {
    reports_dir: PathBuf,
}

impl CsvReportSink {
    pub fn new(reports_dir: impl AsRef<Path>) -> Self {
        Self {
            reports_dir: reports_dir.as_ref().to_path_buf(),
        }
    }

    /// File for a report name. Bytes outside `[A-Za-z0-9_-]` are written as `%XX`,
    /// so distinct names never share a file.
    fn report_path(&self, name: &str) -> PathBuf {
        let mut safe = String::with_capacity(name.len());
        for b in name.bytes() {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' {
                safe.push(char::from(b));
            } else {
                safe.push_str(&format!("%{:02X}", b));
            }
        }
        self.reports_dir.join(format!("{}.csv", safe))
    }

    async fn write_report(
        &self,
        name: &str,
        rendered: Result<String, csv::Error>,
        rows: usize,
    ) -> Result<(), DomainError> {
        let content =
            rendered.map_err(|e| DomainError::Report(format!("Failed to render {}: {}", name, e)))?;
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;
        let path = self.report_path(name);
        fs::write(&path, content)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to write report: {}", e)))?;
        info!(path = %path.display(), rows, "report written");
        Ok(())
    }
}

#[async_trait::async_trait]
impl ReportSink for CsvReportSink {
    async fn write_deliveries(
        &self,
        name: &str,
        deliveries: &[&Delivery],
    ) -> Result<(), DomainError> {
        self.write_report(name, deliveries_to_csv(deliveries), deliveries.len())
            .await
    }

    async fn write_short_infos(
        &self,
        name: &str,
        infos: &[DeliveryShortInfo],
    ) -> Result<(), DomainError> {
        self.write_report(name, short_infos_to_csv(infos), infos.len())
            .await
    }

    async fn write_status_counts(
        &self,
        counts: &BTreeMap<DeliveryStatus, usize>,
    ) -> Result<(), DomainError> {
        self.write_report("status_counts", status_counts_to_csv(counts), counts.len())
            .await
    }

    async fn write_average_gaps(&self, gaps: &[AverageGapsInfo]) -> Result<(), DomainError> {
        self.write_report("average_gaps", average_gaps_to_csv(gaps), gaps.len())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_escapes_name() {
        let sink = CsvReportSink::new("/tmp/reports");
        assert_eq!(
            sink.report_path("client_a/b c"),
            PathBuf::from("/tmp/reports/client_a%2Fb%20c.csv")
        );
        assert_eq!(
            sink.report_path("client_007"),
            PathBuf::from("/tmp/reports/client_007.csv")
        );
    }

    #[tokio::test]
    async fn test_similar_client_names_write_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvReportSink::new(dir.path());
        assert_ne!(sink.report_path("client_a/b"), sink.report_path("client_a_b"));
        assert_ne!(sink.report_path("client_a%2Fb"), sink.report_path("client_a/b"));

        sink.write_short_infos("client_a/b", &[]).await.unwrap();
        sink.write_short_infos("client_a_b", &[]).await.unwrap();

        let files = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, 2);
    }

    #[tokio::test]
    async fn test_writes_average_gaps_file() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let sink = CsvReportSink::new(&reports);
        let gaps = vec![AverageGapsInfo {
            start_city: "Kyiv".to_string(),
            end_city: "Lviv".to_string(),
            average_gap: 42.5,
        }];

        sink.write_average_gaps(&gaps).await.unwrap();

        let written = std::fs::read_to_string(reports.join("average_gaps.csv")).unwrap();
        assert_eq!(written, "StartCity;EndCity;AverageGapMinutes\nKyiv;Lviv;42.50\n");
    }

    #[tokio::test]
    async fn test_write_replaces_existing_report() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvReportSink::new(dir.path());
        let mut counts = BTreeMap::new();
        counts.insert(DeliveryStatus::Pending, 3);
        sink.write_status_counts(&counts).await.unwrap();
        counts.clear();
        sink.write_status_counts(&counts).await.unwrap();

        let written = std::fs::read_to_string(dir.path().join("status_counts.csv")).unwrap();
        assert_eq!(written, "Status;Count\n");
    }
}
