//! Process configuration sourced from the environment.
//!
//! Configuration is read once at startup into [`JobConfig`] and passed by
//! parameter into the pipeline stages.

use std::env;

use tickref_lib::prelude::{DEFAULT_TABLE, WarehouseConfig};

/// Job-wide configuration.
#[derive(Debug, Default)]
pub(crate) struct JobConfig {
    /// Polygon API credential.
    pub api_key: Option<String>,
    /// Warehouse connection settings.
    pub warehouse: WarehouseConfig,
}

impl JobConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self {
            api_key: clean_var("POLYGON_API_KEY"),
            warehouse: WarehouseConfig {
                host: clean_var("WAREHOUSE_HOST"),
                port: clean_var("WAREHOUSE_PORT").and_then(|port| port.parse().ok()),
                user: clean_var("WAREHOUSE_USER"),
                password: clean_var("WAREHOUSE_PASSWORD"),
                database: clean_var("WAREHOUSE_DATABASE"),
                schema: clean_var("WAREHOUSE_SCHEMA"),
                role: clean_var("WAREHOUSE_ROLE"),
                table: clean_var("WAREHOUSE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
                sslmode: clean_var("WAREHOUSE_SSLMODE"),
            },
        }
    }
}

/// Reads an environment variable, discarding empty values after cleaning.
fn clean_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| clean(&value))
        .filter(|value| !value.is_empty())
}

/// Strips whitespace and one level of surrounding single or double quotes.
fn clean(value: &str) -> String {
    let value = value.trim();
    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    unquoted.trim().to_string()
}
