use std::collections::HashSet;

use csv::{ReaderBuilder, Trim};

use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// Parse plain CSV text into a header and row records.
///
/// The first line is the header. Every other line is split on `,` with no
/// quote handling, fields are trimmed and numeric text becomes a number.
/// Short lines fill the missing trailing cells with null; extra fields are
/// dropped. Whitespace around the whole document is ignored and blank lines
/// are skipped.
pub fn parse_csv(text: &str) -> Result<(Vec<ColumnKey>, Vec<Row>)> {
    let text = text.trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<ColumnKey> = rdr
        .headers()
        .map_err(Error::Csv)?
        .iter()
        .map(ColumnKey::from)
        .collect();

    let mut seen = HashSet::with_capacity(headers.len());
    for header in &headers {
        if !seen.insert(header) {
            return Err(Error::DuplicateColumnName(header.to_string()));
        }
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(Error::Csv)?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = record.get(i).map_or(Value::Null, Value::parse_scalar);
                (header.clone(), value)
            })
            .collect();
        rows.push(row);
    }

    log::trace!("parsed CSV: {} columns, {} rows", headers.len(), rows.len());
    Ok((headers, rows))
}
