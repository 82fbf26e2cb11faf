use indexmap::IndexMap;
use serde_json::{Map, Value as JsonValue};

use crate::dataframe::DataInput;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// Parse JSON text into a structured input.
///
/// An array becomes row records (or a 2-D row array when its elements are
/// arrays); an object becomes a column mapping.
pub fn parse_json(text: &str) -> Result<DataInput> {
    let json_value: JsonValue = serde_json::from_str(text).map_err(Error::Json)?;
    from_json_value(json_value)
}

/// Convert an already parsed JSON document
pub fn from_json_value(json_value: JsonValue) -> Result<DataInput> {
    match json_value {
        JsonValue::Array(array) => read_array(array),
        JsonValue::Object(map) => read_column_oriented(map),
        other => Err(Error::InvalidInputShape(format!(
            "JSON document must be an array or an object, found {}",
            other
        ))),
    }
}

fn scalar(value: &JsonValue, location: impl FnOnce() -> String) -> Result<Value> {
    Value::from_json(value).ok_or_else(|| {
        Error::InvalidInputShape(format!("nested value at {} is not a scalar cell", location()))
    })
}

// An array of objects or an array of arrays
fn read_array(array: Vec<JsonValue>) -> Result<DataInput> {
    match array.first() {
        None => Ok(DataInput::Records(Vec::new())),
        Some(JsonValue::Array(_)) => {
            let mut rows = Vec::with_capacity(array.len());
            for (i, item) in array.iter().enumerate() {
                let JsonValue::Array(cells) = item else {
                    return Err(Error::InvalidInputShape(format!(
                        "element {} is not an array like element 0",
                        i
                    )));
                };
                let row = cells
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| scalar(cell, || format!("[{}][{}]", i, j)))
                    .collect::<Result<Vec<_>>>()?;
                rows.push(row);
            }
            Ok(DataInput::Rows(rows))
        }
        Some(JsonValue::Object(_)) => {
            let mut records = Vec::with_capacity(array.len());
            for (i, item) in array.iter().enumerate() {
                let JsonValue::Object(map) = item else {
                    return Err(Error::InvalidInputShape(format!(
                        "element {} is not an object like element 0",
                        i
                    )));
                };
                let mut row = Row::with_capacity(map.len());
                for (key, cell) in map {
                    row.insert(key.as_str(), scalar(cell, || format!("[{}].{}", i, key))?);
                }
                records.push(row);
            }
            Ok(DataInput::Records(records))
        }
        Some(other) => Err(Error::InvalidInputShape(format!(
            "array elements must be objects or arrays, found {}",
            other
        ))),
    }
}

// {"col": [v1, v2, ...], ...}
fn read_column_oriented(map: Map<String, JsonValue>) -> Result<DataInput> {
    let mut columns = IndexMap::with_capacity(map.len());
    for (key, value) in map {
        let JsonValue::Array(array) = value else {
            return Err(Error::InvalidInputShape(format!(
                "column '{}' must be an array",
                key
            )));
        };
        let values = array
            .iter()
            .enumerate()
            .map(|(i, cell)| scalar(cell, || format!("{}[{}]", key, i)))
            .collect::<Result<Vec<_>>>()?;
        columns.insert(ColumnKey::Name(key), values);
    }
    Ok(DataInput::Columns(columns))
}
