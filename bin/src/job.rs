//! End-to-end sync job: fetch, flat file, warehouse.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tickref_lib::prelude::*;
use tracing::{info, warn};

use crate::Cli;
use crate::config::JobConfig;
use crate::output::write_records;

/// Runs the full fetch → flat file → warehouse pipeline.
pub(crate) async fn run(cli: &Cli, config: JobConfig) -> Result<()> {
    let Some(api_key) = config.api_key else {
        warn!("POLYGON_API_KEY not set, nothing to do");
        return Ok(());
    };

    let client_config = ClientConfig {
        page_size: cli.page_size,
        max_retries: cli.max_retries,
        ..ClientConfig::default()
    };
    let client = ApiClient::new(client_config).context("Failed to create API client")?;

    let records = fetch_all(&client, &api_key)
        .await
        .context("Ticker fetch failed")?;

    let today = chrono::Utc::now().date_naive();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("tickers.{}", cli.format.extension())));

    write_records(&records, &output, cli.format, today)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Wrote {} rows to {}", records.len(), output.display());

    if cli.skip_warehouse {
        info!("warehouse stage skipped by flag");
        return Ok(());
    }
    if !config.warehouse.is_complete() {
        println!("Warehouse credentials not fully set. Skipping warehouse load.");
        return Ok(());
    }

    let table = config.warehouse.qualified_table();
    let mut loader = WarehouseLoader::connect(config.warehouse)
        .await
        .context("Failed to connect to warehouse")?;
    loader
        .ensure_table()
        .await
        .context("Failed to create warehouse table")?;
    let rows = loader
        .load(&records, today)
        .await
        .context("Warehouse load failed")?;
    println!("Loaded {rows} rows into warehouse table {table}");

    Ok(())
}
