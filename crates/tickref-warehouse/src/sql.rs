//! SQL statement generation for the ticker reference table.

use tickref_types::COLUMNS;
use tokio_postgres::types::Type;

/// Parameter types for the insert statement: text throughout apart from the
/// `active` flag. The timestamp and partition-date columns arrive as text
/// and convert server-side in the statement.
pub(crate) const INSERT_PARAM_TYPES: [Type; 13] = [
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::BOOL,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
    Type::TEXT,
];

/// Quotes an identifier for interpolation into DDL/DML.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// `CREATE TABLE IF NOT EXISTS` statement for the ticker reference table.
pub(crate) fn create_table(qualified_table: &str) -> String {
    format!(
        r"CREATE TABLE IF NOT EXISTS {qualified_table} (
    ticker VARCHAR,
    name VARCHAR,
    market VARCHAR,
    locale VARCHAR,
    primary_exchange VARCHAR,
    type VARCHAR,
    active BOOLEAN,
    currency_name VARCHAR,
    cik VARCHAR,
    composite_figi VARCHAR,
    share_class_figi VARCHAR,
    last_updated_utc TIMESTAMPTZ,
    ds DATE
)"
    )
}

/// Index supporting partition-date pruning on the target table.
pub(crate) fn create_ds_index(table: &str, qualified_table: &str) -> String {
    format!(
        "CREATE INDEX IF NOT EXISTS {} ON {qualified_table} (ds)",
        quote_ident(&format!("idx_{table}_ds"))
    )
}

/// Insert statement with explicit server-side conversions for the timestamp
/// and partition-date columns.
pub(crate) fn insert_row(qualified_table: &str) -> String {
    let columns = COLUMNS.join(", ");
    format!(
        "INSERT INTO {qualified_table} ({columns}) VALUES \
         ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12::timestamptz, $13::date)"
    )
}
