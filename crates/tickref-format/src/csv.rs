//! CSV output format.

use chrono::NaiveDate;
use std::io::Write;
use tickref_types::{COLUMNS, TickerRecord};

use crate::{FormatError, Formatter};

/// CSV formatter.
///
/// Writes one header row with the fixed column set, followed by one row per
/// record. Missing fields render as empty strings; the partition date is
/// derived per record.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include the header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include the header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one record in the fixed column order.
fn record_row(record: &TickerRecord, today: NaiveDate) -> [String; 13] {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    [
        text(&record.ticker),
        text(&record.name),
        text(&record.market),
        text(&record.locale),
        text(&record.primary_exchange),
        text(&record.ticker_type),
        record.active.map(|a| a.to_string()).unwrap_or_default(),
        text(&record.currency_name),
        text(&record.cik),
        text(&record.composite_figi),
        text(&record.share_class_figi),
        text(&record.last_updated_utc),
        record.partition_date(today).to_string(),
    ]
}

impl Formatter for CsvFormatter {
    fn write_records<W: Write + Send>(
        &self,
        records: &[TickerRecord],
        today: NaiveDate,
        writer: W,
    ) -> Result<(), FormatError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_writer(writer);

        if self.include_header {
            csv_writer.write_record(COLUMNS)?;
        }
        for record in records {
            csv_writer.write_record(&record_row(record, today))?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
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
            name: Some("Zurn Elkay Water Solutions Corporation".to_string()),
            market: Some("stocks".to_string()),
            locale: Some("us".to_string()),
            primary_exchange: Some("XNYS".to_string()),
            ticker_type: Some("CS".to_string()),
            active: Some(true),
            currency_name: Some("usd".to_string()),
            cik: Some("0001439288".to_string()),
            composite_figi: Some("BBG000H8R0N8".to_string()),
            share_class_figi: Some("BBG001T36GB5".to_string()),
            last_updated_utc: Some("2025-09-11T06:11:10.586204443Z".to_string()),
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[create_test_record()], today(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let mut lines = result.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ticker,name,market,locale,primary_exchange,type,active,currency_name,cik,\
             composite_figi,share_class_figi,last_updated_utc,ds"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("ZWS,"));
        assert!(row.contains(",true,"));
        assert!(row.ends_with(",2025-09-11"));
    }

    #[test]
    fn test_csv_missing_fields_render_empty() {
        let record = TickerRecord {
            ticker: Some("ZWS".to_string()),
            ..Default::default()
        };
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&[record], today(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(result.trim_end(), "ZWS,,,,,,,,,,,,2025-09-26");
    }

    #[test]
    fn test_csv_quotes_embedded_delimiters() {
        let record = TickerRecord {
            ticker: Some("AMX".to_string()),
            name: Some("America Movil, S.A.B. de C.V.".to_string()),
            ..Default::default()
        };
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter.write_records(&[record], today(), &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("\"America Movil, S.A.B. de C.V.\""));
    }

    #[test]
    fn test_csv_round_trip() {
        let records = vec![
            create_test_record(),
            TickerRecord {
                ticker: Some("AAPL".to_string()),
                name: Some("Apple Inc.".to_string()),
                ..Default::default()
            },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tickers.csv");
        let file = std::fs::File::create(&path).unwrap();
        CsvFormatter::new()
            .write_records(&records, today(), file)
            .unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            COLUMNS.to_vec()
        );
        let rows: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(&rows[0][0], "ZWS");
        assert_eq!(&rows[0][5], "CS");
        assert_eq!(&rows[0][12], "2025-09-11");
        assert_eq!(&rows[1][0], "AAPL");
        assert_eq!(&rows[1][4], ""); // absent primary_exchange reads back empty
        assert_eq!(&rows[1][12], "2025-09-26");
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[create_test_record()], today(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("ticker\tname\tmarket"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_records(&[create_test_record()], today(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("ticker,name"));
        assert!(result.starts_with("ZWS,"));
    }
}
