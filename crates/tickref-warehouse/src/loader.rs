//! Warehouse table creation and bulk loading.

use chrono::NaiveDate;
use tickref_types::TickerRecord;
use tokio_postgres::Client;
use tracing::{debug, info};

use crate::config::WarehouseConfig;
use crate::error::WarehouseError;
use crate::{connect, sql};

/// Warehouse loader bound to one connection.
pub struct WarehouseLoader {
    client: Client,
    config: WarehouseConfig,
}

impl std::fmt::Debug for WarehouseLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WarehouseLoader {
    /// Connects to the warehouse and assumes the configured role, if any.
    ///
    /// # Errors
    ///
    /// [`WarehouseError::Incomplete`] when required settings are missing,
    /// otherwise driver or TLS errors.
    pub async fn connect(config: WarehouseConfig) -> Result<Self, WarehouseError> {
        let client = connect::connect_client(config.pg_config()?).await?;
        if let Some(role) = &config.role {
            client
                .batch_execute(&format!("SET ROLE {}", sql::quote_ident(role)))
                .await?;
        }
        Ok(Self { client, config })
    }

    /// Creates the target table and its partition-date index when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if either DDL statement fails.
    pub async fn ensure_table(&self) -> Result<(), WarehouseError> {
        let qualified = self.config.qualified_table();
        debug!(table = %qualified, "ensuring warehouse table");
        self.client
            .batch_execute(&sql::create_table(&qualified))
            .await?;
        self.client
            .batch_execute(&sql::create_ds_index(&self.config.table, &qualified))
            .await?;
        Ok(())
    }

    /// Bulk-inserts all records in a single transaction.
    ///
    /// Empty string fields insert as NULL; the timestamp and partition-date
    /// columns go through explicit server-side conversions. Returns the
    /// number of rows written.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction, the prepared statement, or any
    /// insert fails; nothing is committed in that case.
    pub async fn load(
        &mut self,
        records: &[TickerRecord],
        today: NaiveDate,
    ) -> Result<u64, WarehouseError> {
        if records.is_empty() {
            info!("no rows to load");
            return Ok(0);
        }

        let qualified = self.config.qualified_table();
        let transaction = self.client.transaction().await?;
        let statement = transaction
            .prepare_typed(&sql::insert_row(&qualified), &sql::INSERT_PARAM_TYPES)
            .await?;

        let mut rows = 0u64;
        for record in records {
            let ds = record.partition_date(today).to_string();
            rows += transaction
                .execute(
                    &statement,
                    &[
                        &text(&record.ticker),
                        &text(&record.name),
                        &text(&record.market),
                        &text(&record.locale),
                        &text(&record.primary_exchange),
                        &text(&record.ticker_type),
                        &record.active,
                        &text(&record.currency_name),
                        &text(&record.cik),
                        &text(&record.composite_figi),
                        &text(&record.share_class_figi),
                        &text(&record.last_updated_utc),
                        &ds,
                    ],
                )
                .await?;
        }
        transaction.commit().await?;

        info!(rows, table = %qualified, "loaded rows into warehouse");
        Ok(rows)
    }
}

/// Normalizes an optional field for insertion: empty strings become NULL.
fn text(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_maps_empty_to_null() {
        assert_eq!(text(&Some("ZWS".to_string())), Some("ZWS"));
        assert_eq!(text(&Some(String::new())), None);
        assert_eq!(text(&None), None);
    }
}
