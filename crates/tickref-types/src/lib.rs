//! Core types for the tickref reference-data pipeline.
//!
//! This crate provides the fundamental data structures used throughout
//! tickref:
//!
//! - [`TickerRecord`] - A single security ticker reference record
//! - [`COLUMNS`] - The fixed output column order shared by the flat-file
//!   writers and the warehouse loader

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tickref/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ticker;

pub use ticker::{COLUMNS, TickerRecord};
