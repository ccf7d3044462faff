//! HTTP client and paginated fetching for the tickref reference-data
//! pipeline.
//!
//! This crate provides the data retrieval pipeline:
//!
//! - [`url::tickers_url`] - Constructs the initial listing URL
//! - [`ApiClient`] - HTTP client with timeouts and connection reuse
//! - [`classify_page`] / [`FetchSession`] - The pagination state machine
//! - [`fetch_all`] - Cursor-driven pagination with bounded backoff

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickref/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod paginate;
pub mod url;

pub use client::{ApiClient, ClientConfig, PageResponse};
pub use paginate::{
    FetchError, FetchSession, PageAction, Step, TickersPage, backoff_delay, classify_page,
    fetch_all,
};
