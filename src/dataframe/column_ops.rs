//! Column-level operations: derived columns, renaming and row reshaping

use std::collections::HashMap;

use crate::dataframe::ingest::ensure_unique;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

impl DataFrame {
    /// Add a column computed from each row, or overwrite it in place when the
    /// name already exists.
    ///
    /// `f` runs once per row in row order. The result is validated like any
    /// new frame, so NaN in an otherwise numeric column fails here.
    ///
    /// # Example
    /// ```
    /// use rowframe::{DataFrame, Value};
    ///
    /// let df = DataFrame::from_columns([("age", vec![25, 35])]).unwrap();
    /// let df = df
    ///     .assign("group", |row| {
    ///         if row["age"].as_f64() > Some(30.0) { "old" } else { "young" }
    ///     })
    ///     .unwrap();
    /// assert_eq!(df.get_value(1, "group").unwrap(), &Value::from("old"));
    /// ```
    pub fn assign<K, F, V>(&self, column: K, mut f: F) -> Result<DataFrame>
    where
        K: Into<ColumnKey>,
        F: FnMut(&Row) -> V,
        V: Into<Value>,
    {
        self.try_assign(column, |row| Ok(f(row)))
    }

    /// Like [`DataFrame::assign`], but the first error from `f` aborts
    pub fn try_assign<K, F, V>(&self, column: K, mut f: F) -> Result<DataFrame>
    where
        K: Into<ColumnKey>,
        F: FnMut(&Row) -> Result<V>,
        V: Into<Value>,
    {
        let column = column.into();
        let mut rows = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let value: Value = f(row)?.into();
            let mut assigned = row.clone();
            assigned.insert(column.clone(), value);
            rows.push(assigned);
        }

        let mut columns = self.columns.clone();
        if !columns.contains(&column) {
            columns.push(column);
        }
        self.derive(rows, self.index.values().to_vec(), Some(columns))
    }

    /// Substitute column labels; values and column positions are unchanged.
    ///
    /// Columns missing from `mapping` keep their label. Mapping keys that are
    /// not columns are ignored unless the frame was built with
    /// `strict_rename`, in which case they fail with `ColumnNotFound`.
    ///
    /// # Errors
    /// `DuplicateColumnName` when two columns end up with the same label.
    pub fn rename<I, K1, K2>(&self, mapping: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = (K1, K2)>,
        K1: Into<ColumnKey>,
        K2: Into<ColumnKey>,
    {
        let mapping: HashMap<ColumnKey, ColumnKey> = mapping
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();

        if self.options.strict_rename {
            if let Some(unknown) = mapping.keys().find(|k| !self.columns.contains(k)) {
                return Err(Error::ColumnNotFound(unknown.to_string()));
            }
        }

        let renamed: Vec<ColumnKey> = self
            .columns
            .iter()
            .map(|c| mapping.get(c).unwrap_or(c).clone())
            .collect();
        ensure_unique(&renamed)?;

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(&renamed)
                    .map(|(old, new)| (new.clone(), row.get(old).cloned().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect();
        self.derive(rows, self.index.values().to_vec(), Some(renamed))
    }

    /// Map every row to a new record. Columns are inferred from the first
    /// result; a later result with a key the first lacks is a
    /// `SchemaMismatch`.
    pub fn transform<F>(&self, f: F) -> Result<DataFrame>
    where
        F: FnMut(&Row) -> Row,
    {
        let rows: Vec<Row> = self.rows.iter().map(f).collect();
        self.derive(rows, self.index.values().to_vec(), None)
    }
}
