//! Input shape detection and normalization into row records.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::config::{FrameOptions, RaggedColumns};
use crate::error::{Error, Result};
use crate::io;
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// The input shapes a `DataFrame` can be built from
#[derive(Debug, Clone, PartialEq)]
pub enum DataInput {
    /// 2-D row array; every row has the same length
    Rows(Vec<Vec<Value>>),
    /// Array of row records; the first record defines the columns
    Records(Vec<Row>),
    /// Column-oriented mapping `{column: values}`
    Columns(IndexMap<ColumnKey, Vec<Value>>),
    /// Text parsed as JSON first, falling back to CSV
    Text(String),
    /// Text parsed as plain CSV only
    Csv(String),
    /// Text parsed as JSON only
    Json(String),
}

impl DataInput {
    /// Build a 2-D row array from anything convertible to values
    pub fn rows<R, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        DataInput::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Build a column mapping, keeping the given column order
    pub fn columns<K, C, V>(columns: impl IntoIterator<Item = (K, C)>) -> Self
    where
        K: Into<ColumnKey>,
        C: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        DataInput::Columns(
            columns
                .into_iter()
                .map(|(k, values)| (k.into(), values.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

impl From<Vec<Row>> for DataInput {
    fn from(records: Vec<Row>) -> Self {
        DataInput::Records(records)
    }
}

impl From<Vec<Vec<Value>>> for DataInput {
    fn from(rows: Vec<Vec<Value>>) -> Self {
        DataInput::Rows(rows)
    }
}

impl From<IndexMap<ColumnKey, Vec<Value>>> for DataInput {
    fn from(columns: IndexMap<ColumnKey, Vec<Value>>) -> Self {
        DataInput::Columns(columns)
    }
}

impl From<&str> for DataInput {
    fn from(text: &str) -> Self {
        DataInput::Text(text.to_string())
    }
}

impl From<String> for DataInput {
    fn from(text: String) -> Self {
        DataInput::Text(text)
    }
}

/// Canonical form: ordered columns plus rows keyed exactly by those columns
#[derive(Debug, Default)]
pub(crate) struct Normalized {
    pub columns: Vec<ColumnKey>,
    pub rows: Vec<Row>,
}

/// Turn any input into canonical rows.
///
/// `columns`, when given, labels the positions of a 2-D row array, and
/// selects/orders the columns of every other shape.
pub(crate) fn normalize(
    input: Option<DataInput>,
    columns: Option<Vec<ColumnKey>>,
    options: &FrameOptions,
) -> Result<Normalized> {
    if let Some(columns) = &columns {
        ensure_unique(columns)?;
    }

    let Some(input) = input else {
        return Ok(empty(columns));
    };

    match input {
        DataInput::Rows(rows) if rows.is_empty() => Ok(empty(columns)),
        DataInput::Records(records) if records.is_empty() => Ok(empty(columns)),
        DataInput::Rows(rows) => {
            log::debug!("ingesting 2-D row array: {} rows", rows.len());
            from_rows(rows, columns)
        }
        DataInput::Records(records) => {
            log::debug!("ingesting row records: {} rows", records.len());
            project(from_records(records)?, columns)
        }
        DataInput::Columns(map) => {
            log::debug!("ingesting column mapping: {} columns", map.len());
            project(from_column_map(map, options.ragged_columns)?, columns)
        }
        DataInput::Text(text) => from_text(&text, columns, options),
        DataInput::Csv(text) => {
            if text.trim().is_empty() {
                return Ok(empty(columns));
            }
            let (header, rows) = io::parse_csv(&text)?;
            project(Normalized { columns: header, rows }, columns)
        }
        DataInput::Json(text) => {
            let parsed = io::parse_json(&text)?;
            normalize(Some(parsed), columns, options)
        }
    }
}

fn empty(columns: Option<Vec<ColumnKey>>) -> Normalized {
    Normalized {
        columns: columns.unwrap_or_default(),
        rows: Vec::new(),
    }
}

// JSON first; anything that is not a JSON array or object is read as CSV
fn from_text(
    text: &str,
    columns: Option<Vec<ColumnKey>>,
    options: &FrameOptions,
) -> Result<Normalized> {
    if text.trim().is_empty() {
        return Ok(empty(columns));
    }
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(json) if json.is_array() || json.is_object() => {
            log::debug!("text input detected as JSON");
            let parsed = io::from_json_value(json)?;
            normalize(Some(parsed), columns, options)
        }
        Ok(_) => {
            log::debug!("text input is a JSON scalar, reading as CSV");
            normalize(Some(DataInput::Csv(text.to_string())), columns, options)
        }
        Err(err) => {
            log::debug!("text input is not JSON ({}), reading as CSV", err);
            normalize(Some(DataInput::Csv(text.to_string())), columns, options)
        }
    }
}

fn from_rows(rows: Vec<Vec<Value>>, columns: Option<Vec<ColumnKey>>) -> Result<Normalized> {
    let num_columns = rows.first().map_or(0, Vec::len);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != num_columns {
            return Err(Error::ShapeMismatch {
                context: format!("row {} length", i),
                expected: num_columns,
                found: row.len(),
            });
        }
    }

    let columns = match columns {
        Some(columns) if columns.len() != num_columns => {
            return Err(Error::ShapeMismatch {
                context: "supplied column count".to_string(),
                expected: num_columns,
                found: columns.len(),
            });
        }
        Some(columns) => columns,
        None => (0..num_columns).map(ColumnKey::Position).collect(),
    };

    let rows: Vec<Row> = rows
        .into_iter()
        .map(|row| columns.iter().cloned().zip(row).collect())
        .collect();
    Ok(Normalized { columns, rows })
}

pub(crate) fn from_records(records: Vec<Row>) -> Result<Normalized> {
    let columns: Vec<ColumnKey> = records
        .first()
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default();

    let known: HashSet<&ColumnKey> = columns.iter().collect();
    for (i, record) in records.iter().enumerate().skip(1) {
        if let Some(key) = record.keys().find(|key| !known.contains(key)) {
            return Err(Error::SchemaMismatch {
                record: i,
                key: key.to_string(),
            });
        }
    }

    // Missing keys become null so every row carries every column
    let rows: Vec<Row> = records
        .into_iter()
        .map(|mut record| {
            columns
                .iter()
                .map(|key| (key.clone(), record.remove(key).unwrap_or(Value::Null)))
                .collect()
        })
        .collect();
    Ok(Normalized { columns, rows })
}

fn from_column_map(
    map: IndexMap<ColumnKey, Vec<Value>>,
    ragged: RaggedColumns,
) -> Result<Normalized> {
    let row_count = map.values().map(Vec::len).min().unwrap_or(0);

    if ragged == RaggedColumns::Reject {
        let expected = map.values().map(Vec::len).max().unwrap_or(0);
        if let Some((key, values)) = map.iter().find(|(_, values)| values.len() != expected) {
            return Err(Error::ShapeMismatch {
                context: format!("column '{}' length", key),
                expected,
                found: values.len(),
            });
        }
    }

    let columns: Vec<ColumnKey> = map.keys().cloned().collect();
    let mut cells: Vec<_> = map.into_values().map(Vec::into_iter).collect();
    let rows: Vec<Row> = (0..row_count)
        .map(|_| {
            columns
                .iter()
                .zip(cells.iter_mut())
                .map(|(key, column)| (key.clone(), column.next().unwrap_or(Value::Null)))
                .collect()
        })
        .collect();
    Ok(Normalized { columns, rows })
}

// Restrict and reorder to the supplied columns
fn project(normalized: Normalized, columns: Option<Vec<ColumnKey>>) -> Result<Normalized> {
    let Some(columns) = columns else {
        return Ok(normalized);
    };
    if let Some(missing) = columns.iter().find(|c| !normalized.columns.contains(c)) {
        return Err(Error::ColumnNotFound(missing.to_string()));
    }

    let rows: Vec<Row> = normalized
        .rows
        .into_iter()
        .map(|mut row| {
            columns
                .iter()
                .map(|key| (key.clone(), row.remove(key).unwrap_or(Value::Null)))
                .collect()
        })
        .collect();
    Ok(Normalized { columns, rows })
}

pub(crate) fn ensure_unique(columns: &[ColumnKey]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    match columns.iter().find(|c| !seen.insert(*c)) {
        Some(duplicate) => Err(Error::DuplicateColumnName(duplicate.to_string())),
        None => Ok(()),
    }
}
