//! Warehouse loading for the tickref reference-data pipeline.
//!
//! This crate persists fetched ticker reference records to a relational
//! warehouse table:
//!
//! - [`WarehouseConfig`] - Connection settings sourced from process
//!   configuration, with a completeness check gating the stage
//! - [`WarehouseLoader`] - Table creation and transactional bulk insert

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickref/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod connect;
mod error;
mod loader;
mod sql;

pub use config::{DEFAULT_TABLE, WarehouseConfig};
pub use error::WarehouseError;
pub use loader::WarehouseLoader;
