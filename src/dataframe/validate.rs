use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// Check numeric homogeneity: a column whose every value is a number must not
/// hold NaN. Columns with any non-number (null included) are not checked.
pub(crate) fn check_numeric_columns(columns: &[ColumnKey], rows: &[Row]) -> Result<()> {
    for column in columns {
        let values: Vec<Option<&Value>> = rows.iter().map(|row| row.get(column)).collect();
        let is_numeric = values.iter().all(|v| v.is_some_and(Value::is_number));
        if !is_numeric {
            continue;
        }

        let bad: Vec<Value> = values
            .into_iter()
            .flatten()
            .filter(|v| v.is_nan())
            .cloned()
            .collect();
        if !bad.is_empty() {
            return Err(Error::InvalidColumnData {
                column: column.to_string(),
                values: bad,
            });
        }
    }
    Ok(())
}
