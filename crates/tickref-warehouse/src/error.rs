//! Warehouse error types.

use thiserror::Error;

/// Errors that can occur during warehouse loading.
#[derive(Error, Debug)]
pub enum WarehouseError {
    /// Database driver error.
    #[error("Postgres error: {0}")]
    Postgres(#[from] tokio_postgres::Error),

    /// TLS setup failed.
    #[error("TLS error: {0}")]
    Tls(#[from] native_tls::Error),

    /// Required connection settings are missing.
    #[error("incomplete warehouse configuration: missing {0}")]
    Incomplete(&'static str),
}
