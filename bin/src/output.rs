//! Output format dispatch for the tickref CLI.

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tickref_lib::prelude::*;

/// Output format for the flat-file stage.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Writes records to a file in the specified format.
pub(crate) fn write_records(
    records: &[TickerRecord],
    output: &Path,
    format: Format,
    today: NaiveDate,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Csv => CsvFormatter::new().write_records(records, today, writer)?,
        Format::Json => JsonFormatter::new().write_records(records, today, writer)?,
        Format::Ndjson => JsonFormatter::ndjson().write_records(records, today, writer)?,
    }

    Ok(())
}
