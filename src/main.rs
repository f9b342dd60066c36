//! Wiring. Entry point: load config, bootstrap adapters, inject into the report service, run once.
//! No query logic here.

use delivery_query::adapters::report::CsvReportSink;
use delivery_query::adapters::source::JsonFileSource;
use delivery_query::ports::{DeliverySource, ReportSink};
use delivery_query::shared::config::AppConfig;
use delivery_query::usecases::{QueryHelper, ReportService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv::dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("config: {}", e))?;
    let params = cfg.report_params().map_err(|e| anyhow::anyhow!("{}", e))?;

    let data_path = cfg.data_path_or_default();
    let reports_dir = cfg.reports_dir_or_default();
    info!(
        data = %data_path,
        reports = %reports_dir,
        page_size = params.page.size,
        page_number = params.page.number,
        "starting delivery reports"
    );

    let source: Arc<dyn DeliverySource> = Arc::new(JsonFileSource::new(&data_path));
    let sink: Arc<dyn ReportSink> = Arc::new(CsvReportSink::new(&reports_dir));
    let service = ReportService::new(QueryHelper::new(), source, sink);

    let summary = service
        .run(&params)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("Deliveries:          {}", summary.total);
    println!("Paid:                {}", summary.paid);
    println!("Not finished:        {}", summary.not_finished);
    if let Some(n) = summary.client_infos {
        println!("Client deliveries:   {}", n);
    }
    if let Some(n) = summary.by_city_and_type {
        println!("By city and type:    {}", n);
    }
    println!("Unique cargo types:  {}", summary.uniq_cargo_types);
    println!("Statuses present:    {}", summary.statuses);
    println!("Directions:          {}", summary.directions);
    println!("Rows on page:        {}", summary.page_len);
    println!("Reports written to   {}", reports_dir);

    Ok(())
}
