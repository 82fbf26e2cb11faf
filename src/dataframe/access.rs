//! Read-only accessors

use crate::config::FrameOptions;
use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::index::{Index, IndexLabel};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

// Returned for any lookup on a frame that holds no data at all
static NULL: Value = Value::Null;

impl DataFrame {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `(row_count, column_count)`
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count(), self.column_count())
    }

    /// True when the frame has neither rows nor columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.columns.is_empty()
    }

    pub fn columns(&self) -> &[ColumnKey] {
        &self.columns
    }

    /// Column labels as strings; positions are printed as numbers
    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(ToString::to_string).collect()
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// The canonical rows, in table order
    pub fn data(&self) -> &[Row] {
        &self.rows
    }

    pub fn dtype(&self) -> Option<&str> {
        self.dtype.as_deref()
    }

    pub fn options(&self) -> &FrameOptions {
        &self.options
    }

    pub fn contains_column<K: Into<ColumnKey>>(&self, column: K) -> bool {
        self.columns.contains(&column.into())
    }

    pub(crate) fn require_column(&self, column: ColumnKey) -> Result<ColumnKey> {
        if self.columns.contains(&column) {
            Ok(column)
        } else {
            Err(Error::ColumnNotFound(column.to_string()))
        }
    }

    /// Cell at a row position and column.
    ///
    /// # Errors
    /// `ColumnNotFound` for an unknown column, `IndexOutOfRange` for a row
    /// outside `0..row_count`. A frame with no data returns null instead.
    pub fn get_value<K: Into<ColumnKey>>(&self, row: usize, column: K) -> Result<&Value> {
        if self.is_empty() {
            return Ok(&NULL);
        }
        let column = self.require_column(column.into())?;
        let record = self.row(row)?;
        // Rows always carry every column after normalization
        record.try_get(column)
    }

    /// Cell at the first row carrying `label` in the index
    pub fn loc<L, K>(&self, label: L, column: K) -> Result<&Value>
    where
        L: Into<IndexLabel>,
        K: Into<ColumnKey>,
    {
        if self.is_empty() {
            return Ok(&NULL);
        }
        let column = self.require_column(column.into())?;
        let label = label.into();
        let pos = self
            .index
            .get_loc(&label)
            .ok_or_else(|| Error::IndexLabelNotFound(label.to_string()))?;
        self.row(pos)?.try_get(column)
    }

    /// Row record at a position
    pub fn row(&self, row: usize) -> Result<&Row> {
        self.rows.get(row).ok_or(Error::IndexOutOfRange {
            index: row,
            size: self.rows.len(),
        })
    }

    /// One column's values in row order
    pub fn column_values<K: Into<ColumnKey>>(&self, column: K) -> Result<Vec<&Value>> {
        let column = self.require_column(column.into())?;
        self.rows.iter().map(|row| row.try_get(&column)).collect()
    }
}
