//! Application configuration. Data file, reports directory, query parameters.

use crate::domain::{DeliveryType, DomainError};
use crate::usecases::paging::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PageRequest};
use crate::usecases::ReportParams;
use serde::Deserialize;

pub const DEFAULT_DATA_PATH: &str = "./data/deliveries.json";
pub const DEFAULT_REPORTS_DIR: &str = "./reports";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON file with the delivery array. Read from DELIVERY_QUERY_DATA_PATH.
    #[serde(default)]
    pub data_path: Option<String>,

    /// Directory for CSV reports. Read from DELIVERY_QUERY_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Client for the short-info report. Read from DELIVERY_QUERY_CLIENT_ID.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Origin city for the city/type report. Read from DELIVERY_QUERY_CITY.
    #[serde(default)]
    pub city: Option<String>,

    /// Delivery type for the city/type report (standard, express, urgent). Read from DELIVERY_QUERY_DELIVERY_TYPE.
    #[serde(default)]
    pub delivery_type: Option<String>,

    /// Elements per page (default 100). Read from DELIVERY_QUERY_PAGE_SIZE.
    #[serde(default)]
    pub page_size: Option<i32>,

    /// 1-based page number (default 1). Read from DELIVERY_QUERY_PAGE_NUMBER.
    #[serde(default)]
    pub page_number: Option<i32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("DELIVERY_QUERY"));
        if let Ok(path) = std::env::var("DELIVERY_QUERY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn data_path_or_default(&self) -> String {
        self.data_path
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
    }

    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORTS_DIR.to_string())
    }

    pub fn page_or_default(&self) -> PageRequest {
        PageRequest::new(
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
        )
    }

    /// Parsed delivery type, if configured. An unknown name is a config error.
    pub fn delivery_type(&self) -> Result<Option<DeliveryType>, DomainError> {
        self.delivery_type
            .as_deref()
            .map(|s| s.parse::<DeliveryType>().map_err(DomainError::Config))
            .transpose()
    }

    /// Query parameters for the report service.
    pub fn report_params(&self) -> Result<ReportParams, DomainError> {
        Ok(ReportParams {
            client_id: self.client_id.clone(),
            city: self.city.clone(),
            delivery_type: self.delivery_type()?,
            page: self.page_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_path_or_default(), DEFAULT_DATA_PATH);
        assert_eq!(cfg.reports_dir_or_default(), DEFAULT_REPORTS_DIR);
        assert_eq!(cfg.page_or_default(), PageRequest::default());
        let params = cfg.report_params().unwrap();
        assert_eq!(params.client_id, None);
        assert_eq!(params.delivery_type, None);
    }

    #[test]
    fn test_report_params_from_fields() {
        let cfg = AppConfig {
            client_id: Some("c-9".to_string()),
            city: Some("Kyiv".to_string()),
            delivery_type: Some("Express".to_string()),
            page_size: Some(10),
            page_number: Some(3),
            ..AppConfig::default()
        };
        let params = cfg.report_params().unwrap();
        assert_eq!(params.client_id.as_deref(), Some("c-9"));
        assert_eq!(params.city.as_deref(), Some("Kyiv"));
        assert_eq!(params.delivery_type, Some(DeliveryType::Express));
        assert_eq!(params.page, PageRequest::new(10, 3));
    }

    #[test]
    fn test_load_keeps_ids_as_written() {
        // Only test touching DELIVERY_QUERY_* variables; tests share the process env.
        let vars = [
            ("DELIVERY_QUERY_CLIENT_ID", "007"),
            ("DELIVERY_QUERY_CITY", "0451"),
            ("DELIVERY_QUERY_PAGE_SIZE", "10"),
            ("DELIVERY_QUERY_PAGE_NUMBER", "2"),
        ];
        for (key, value) in vars {
            unsafe { std::env::set_var(key, value) };
        }
        let loaded = AppConfig::load();
        for (key, _) in vars {
            unsafe { std::env::remove_var(key) };
        }

        let cfg = loaded.unwrap();
        assert_eq!(cfg.client_id.as_deref(), Some("007"));
        assert_eq!(cfg.city.as_deref(), Some("0451"));
        assert_eq!(cfg.page_size, Some(10));
        assert_eq!(cfg.page_or_default(), PageRequest::new(10, 2));
    }

    #[test]
    fn test_unknown_delivery_type_is_config_error() {
        let cfg = AppConfig {
            delivery_type: Some("drone".to_string()),
            ..AppConfig::default()
        };
        assert!(matches!(cfg.report_params(), Err(DomainError::Config(_))));
    }
}
