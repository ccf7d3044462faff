//! JSON output format.

use chrono::NaiveDate;
use serde_json::Value;
use std::io::Write;
use tickref_types::TickerRecord;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// Records serialize with their upstream field names plus the derived `ds`
/// partition date.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }
}

/// Serializes one record with the derived partition date attached.
fn record_value(record: &TickerRecord, today: NaiveDate) -> Result<Value, FormatError> {
    let mut value = serde_json::to_value(record)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "ds".to_string(),
            Value::String(record.partition_date(today).to_string()),
        );
    }
    Ok(value)
}

impl Formatter for JsonFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[TickerRecord],
        today: NaiveDate,
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                let values = records
                    .iter()
                    .map(|record| record_value(record, today))
                    .collect::<Result<Vec<_>, _>>()?;
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, &values)?;
                } else {
                    serde_json::to_writer(&mut writer, &values)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    serde_json::to_writer(&mut writer, &record_value(record, today)?)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 26).unwrap()
    }

    fn create_test_record() -> TickerRecord {
        TickerRecord {
            ticker: Some("ZWS".to_string()),
            ticker_type: Some("CS".to_string()),
            active: Some(true),
            last_updated_utc: Some("2025-09-11T06:11:10Z".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[create_test_record()], today(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"ticker\":\"ZWS\""));
        assert!(result.contains("\"type\":\"CS\""));
        assert!(result.contains("\"ds\":\"2025-09-11\""));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let records = vec![create_test_record(), TickerRecord::default()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&records, today(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
        // a record without a timestamp falls back to today's partition
        assert!(lines[1].contains("\"ds\":\"2025-09-26\""));
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[create_test_record()], today(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }
}
