//! Warehouse connection settings.

use tokio_postgres::config::SslMode;

use crate::error::WarehouseError;
use crate::sql::quote_ident;

/// Default warehouse table name.
pub const DEFAULT_TABLE: &str = "stock_tickers";

/// Connection settings for the warehouse stage.
///
/// Every credential field is optional: the stage is skipped entirely when
/// the set is incomplete (see [`is_complete`]). Values come from process
/// configuration, not from module-level state.
///
/// [`is_complete`]: WarehouseConfig::is_complete
#[derive(Clone)]
pub struct WarehouseConfig {
    /// Database server hostname.
    pub host: Option<String>,
    /// Database server port (driver default when absent).
    pub port: Option<u16>,
    /// Login user.
    pub user: Option<String>,
    /// Login password.
    pub password: Option<String>,
    /// Target database name.
    pub database: Option<String>,
    /// Schema qualifying the target table, if any.
    pub schema: Option<String>,
    /// Session role assumed after connecting, if any.
    pub role: Option<String>,
    /// Target table name.
    pub table: String,
    /// TLS mode: `disable`, `prefer` (the default), or `require`.
    pub sslmode: Option<String>,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            user: None,
            password: None,
            database: None,
            schema: None,
            role: None,
            table: DEFAULT_TABLE.to_string(),
            sslmode: None,
        }
    }
}

impl std::fmt::Debug for WarehouseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarehouseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("schema", &self.schema)
            .field("role", &self.role)
            .field("table", &self.table)
            .field("sslmode", &self.sslmode)
            .finish()
    }
}

impl WarehouseConfig {
    /// Returns true when every required connection setting is present.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.host.is_some()
            && self.user.is_some()
            && self.password.is_some()
            && self.database.is_some()
    }

    /// Returns the schema-qualified, quoted table name.
    #[must_use]
    pub fn qualified_table(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{}.{}", quote_ident(schema), quote_ident(&self.table)),
            None => quote_ident(&self.table),
        }
    }

    /// Resolves the configured TLS mode (`prefer` when unset).
    pub(crate) fn ssl_mode(&self) -> SslMode {
        match self.sslmode.as_deref() {
            Some("disable") => SslMode::Disable,
            Some("require") => SslMode::Require,
            _ => SslMode::Prefer,
        }
    }

    /// Builds the driver configuration from the credential set.
    pub(crate) fn pg_config(&self) -> Result<tokio_postgres::Config, WarehouseError> {
        let host = self.host.as_deref().ok_or(WarehouseError::Incomplete("host"))?;
        let user = self.user.as_deref().ok_or(WarehouseError::Incomplete("user"))?;
        let password = self
            .password
            .as_deref()
            .ok_or(WarehouseError::Incomplete("password"))?;
        let database = self
            .database
            .as_deref()
            .ok_or(WarehouseError::Incomplete("database"))?;

        let mut config = tokio_postgres::Config::new();
        config
            .host(host)
            .user(user)
            .password(password)
            .dbname(database)
            .ssl_mode(self.ssl_mode());
        if let Some(port) = self.port {
            config.port(port);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> WarehouseConfig {
        WarehouseConfig {
            host: Some("warehouse.internal".to_string()),
            user: Some("loader".to_string()),
            password: Some("hunter2".to_string()),
            database: Some("marketdata".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_incomplete() {
        assert!(!WarehouseConfig::default().is_complete());
    }

    #[test]
    fn test_complete_credential_set() {
        assert!(complete().is_complete());
    }

    #[test]
    fn test_partial_credential_set_is_incomplete() {
        let config = WarehouseConfig {
            password: None,
            ..complete()
        };
        assert!(!config.is_complete());
    }

    #[test]
    fn test_qualified_table() {
        let config = WarehouseConfig {
            schema: Some("reference".to_string()),
            ..complete()
        };
        assert_eq!(config.qualified_table(), "\"reference\".\"stock_tickers\"");
        assert_eq!(complete().qualified_table(), "\"stock_tickers\"");
    }

    #[test]
    fn test_ssl_mode_mapping() {
        let mut config = complete();
        assert_eq!(config.ssl_mode(), SslMode::Prefer);
        config.sslmode = Some("disable".to_string());
        assert_eq!(config.ssl_mode(), SslMode::Disable);
        config.sslmode = Some("require".to_string());
        assert_eq!(config.ssl_mode(), SslMode::Require);
    }

    #[test]
    fn test_pg_config_requires_credentials() {
        let err = WarehouseConfig::default().pg_config().unwrap_err();
        assert!(matches!(err, WarehouseError::Incomplete("host")));
        assert!(complete().pg_config().is_ok());
    }

    #[test]
    fn test_debug_masks_password() {
        let rendered = format!("{:?}", complete());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }
}
