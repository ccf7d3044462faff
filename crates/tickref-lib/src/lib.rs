//! Rust library for syncing Polygon ticker reference data.
//!
//! This is a facade crate that re-exports functionality from the tickref
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tickref_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::with_defaults()?;
//!     let records = fetch_all(&client, "my-api-key").await?;
//!
//!     let today = chrono::Utc::now().date_naive();
//!     let file = std::fs::File::create("tickers.csv")?;
//!     CsvFormatter::new().write_records(&records, today, file)?;
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickref/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tickref_types::*;

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use tickref_fetch::{
    ApiClient, ClientConfig, FetchError, FetchSession, PageAction, PageResponse, Step,
    TickersPage, backoff_delay, classify_page, fetch_all,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use tickref_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

// Re-export warehouse loading
#[cfg(feature = "warehouse")]
pub use tickref_warehouse::{DEFAULT_TABLE, WarehouseConfig, WarehouseError, WarehouseLoader};

/// Prelude module for convenient imports.
///
/// ```
/// use tickref_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tickref_types::{COLUMNS, TickerRecord};

    #[cfg(feature = "fetch")]
    pub use tickref_fetch::{ApiClient, ClientConfig, FetchError, fetch_all};

    #[cfg(feature = "format")]
    pub use tickref_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "warehouse")]
    pub use tickref_warehouse::{
        DEFAULT_TABLE, WarehouseConfig, WarehouseError, WarehouseLoader,
    };
}
