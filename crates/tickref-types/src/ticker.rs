//! Ticker reference record representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Output column order shared by the flat-file writers and the warehouse
/// loader.
///
/// The first twelve columns mirror the upstream record fields; `ds` is the
/// partition date derived by the pipeline.
pub const COLUMNS: [&str; 13] = [
    "ticker",
    "name",
    "market",
    "locale",
    "primary_exchange",
    "type",
    "active",
    "currency_name",
    "cik",
    "composite_figi",
    "share_class_figi",
    "last_updated_utc",
    "ds",
];

/// A single security ticker reference record.
///
/// Records arrive as JSON objects with an externally defined field set. Every
/// field is optional, and the pipeline does not interpret field semantics
/// beyond deriving the partition date from `last_updated_utc`. Unknown
/// upstream fields are ignored at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickerRecord {
    /// Ticker symbol (e.g. `ZWS`).
    pub ticker: Option<String>,
    /// Security name.
    pub name: Option<String>,
    /// Market identifier (e.g. `stocks`).
    pub market: Option<String>,
    /// Locale (e.g. `us`).
    pub locale: Option<String>,
    /// Primary listing exchange MIC (e.g. `XNYS`).
    pub primary_exchange: Option<String>,
    /// Security type code (e.g. `CS`, `ADRC`).
    #[serde(rename = "type")]
    pub ticker_type: Option<String>,
    /// Whether the ticker is actively traded.
    pub active: Option<bool>,
    /// Trading currency (e.g. `usd`).
    pub currency_name: Option<String>,
    /// SEC Central Index Key.
    pub cik: Option<String>,
    /// Composite FIGI identifier.
    pub composite_figi: Option<String>,
    /// Share class FIGI identifier.
    pub share_class_figi: Option<String>,
    /// Upstream last-update timestamp (RFC 3339, UTC).
    pub last_updated_utc: Option<String>,
}

impl TickerRecord {
    /// Returns the partition date (`ds`) for this record.
    ///
    /// Derived from the date portion of `last_updated_utc`; falls back to
    /// `today` when the timestamp is absent or unparseable.
    #[must_use]
    pub fn partition_date(&self, today: NaiveDate) -> NaiveDate {
        self.last_updated_utc
            .as_deref()
            .and_then(timestamp_date)
            .unwrap_or(today)
    }
}

/// Extracts the calendar date from an RFC 3339 timestamp.
///
/// Only the portion before the `T` separator is examined, so any
/// fractional-second precision is accepted.
fn timestamp_date(timestamp: &str) -> Option<NaiveDate> {
    let date = timestamp.split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partition_date_from_timestamp() {
        let record = TickerRecord {
            last_updated_utc: Some("2025-09-11T06:11:10Z".to_string()),
            ..Default::default()
        };
        assert_eq!(record.partition_date(date(2025, 9, 26)), date(2025, 9, 11));
    }

    #[test]
    fn test_partition_date_nanosecond_precision() {
        let record = TickerRecord {
            last_updated_utc: Some("2025-09-11T06:11:10.586204443Z".to_string()),
            ..Default::default()
        };
        assert_eq!(record.partition_date(date(2025, 9, 26)), date(2025, 9, 11));
    }

    #[test]
    fn test_partition_date_missing_timestamp() {
        let record = TickerRecord::default();
        assert_eq!(record.partition_date(date(2025, 9, 26)), date(2025, 9, 26));
    }

    #[test]
    fn test_partition_date_unparseable_timestamp() {
        let record = TickerRecord {
            last_updated_utc: Some("not a timestamp".to_string()),
            ..Default::default()
        };
        assert_eq!(record.partition_date(date(2025, 9, 26)), date(2025, 9, 26));
    }

    #[test]
    fn test_deserialize_renames_type() {
        let record: TickerRecord = serde_json::from_str(
            r#"{"ticker": "ZWS", "type": "CS", "active": true}"#,
        )
        .unwrap();
        assert_eq!(record.ticker.as_deref(), Some("ZWS"));
        assert_eq!(record.ticker_type.as_deref(), Some("CS"));
        assert_eq!(record.active, Some(true));
        assert!(record.name.is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let record: TickerRecord =
            serde_json::from_str(r#"{"ticker": "ZWS", "delisted_utc": "2024-01-01"}"#).unwrap();
        assert_eq!(record.ticker.as_deref(), Some("ZWS"));
    }

    #[test]
    fn test_columns_order() {
        assert_eq!(COLUMNS.len(), 13);
        assert_eq!(COLUMNS[0], "ticker");
        assert_eq!(COLUMNS[6], "active");
        assert_eq!(COLUMNS[12], "ds");
    }
}
