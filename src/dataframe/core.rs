//! The DataFrame container and its construction pipeline.

use std::str::FromStr;

use crate::config::FrameOptions;
use crate::dataframe::ingest::{self, DataInput};
use crate::dataframe::validate;
use crate::error::{Error, Result};
use crate::index::{Index, IndexLabel};
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// Row-oriented in-memory table.
///
/// A frame is fully built and validated at construction and never changes
/// afterwards; every transform returns a new frame built through the same
/// pipeline: normalization, index assignment, numeric validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataFrame {
    pub(crate) columns: Vec<ColumnKey>,
    pub(crate) rows: Vec<Row>,
    pub(crate) index: Index,
    pub(crate) dtype: Option<String>,
    pub(crate) options: FrameOptions,
}

impl DataFrame {
    /// Build a frame with default options.
    ///
    /// # Arguments
    /// * `data` - input in any supported shape; `None` gives an empty frame
    /// * `index` - row labels; defaults to `0..row_count`
    /// * `columns` - labels for 2-D row arrays, or a column selection for
    ///   every other shape
    /// * `dtype` - advisory type hint, stored but not enforced
    ///
    /// # Errors
    /// Any ingestion error, `IndexLengthMismatch` when `index` does not have
    /// one label per row, or `InvalidColumnData` when a numeric column
    /// holds NaN.
    pub fn new(
        data: Option<DataInput>,
        index: Option<Vec<IndexLabel>>,
        columns: Option<Vec<ColumnKey>>,
        dtype: Option<String>,
    ) -> Result<Self> {
        Self::with_options(data, index, columns, dtype, FrameOptions::default())
    }

    /// Build a frame with explicit options; derived frames inherit them
    pub fn with_options(
        data: Option<DataInput>,
        index: Option<Vec<IndexLabel>>,
        columns: Option<Vec<ColumnKey>>,
        dtype: Option<String>,
        options: FrameOptions,
    ) -> Result<Self> {
        let normalized = ingest::normalize(data, columns, &options)?;
        let row_count = normalized.rows.len();

        let index = match index {
            Some(labels) if labels.len() != row_count => {
                return Err(Error::IndexLengthMismatch {
                    expected: row_count,
                    found: labels.len(),
                });
            }
            Some(labels) => Index::new(labels),
            None => Index::from_range(0..row_count),
        };

        validate::check_numeric_columns(&normalized.columns, &normalized.rows)?;

        log::debug!(
            "built DataFrame: {} rows x {} columns",
            row_count,
            normalized.columns.len()
        );

        Ok(DataFrame {
            columns: normalized.columns,
            rows: normalized.rows,
            index,
            dtype,
            options,
        })
    }

    /// An empty frame: no rows, no columns
    pub fn empty() -> Self {
        Self::default()
    }

    /// From a 2-D row array with positional columns
    pub fn from_rows(rows: Vec<Vec<Value>>) -> Result<Self> {
        Self::new(Some(DataInput::Rows(rows)), None, None, None)
    }

    pub fn from_records(records: Vec<Row>) -> Result<Self> {
        Self::new(Some(DataInput::Records(records)), None, None, None)
    }

    /// From a column-oriented mapping; column order is kept
    pub fn from_columns<K, C, V>(columns: impl IntoIterator<Item = (K, C)>) -> Result<Self>
    where
        K: Into<ColumnKey>,
        C: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::new(Some(DataInput::columns(columns)), None, None, None)
    }

    pub fn from_csv(text: &str) -> Result<Self> {
        Self::new(Some(DataInput::Csv(text.to_string())), None, None, None)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Self::new(Some(DataInput::Json(text.to_string())), None, None, None)
    }

    /// Rebuild a frame from derived rows, keeping dtype and options.
    ///
    /// Goes through record ingestion so derived frames obey the same rules
    /// as constructed ones. `columns` of `None` infers them from the first row.
    pub(crate) fn derive(
        &self,
        rows: Vec<Row>,
        index: Vec<IndexLabel>,
        columns: Option<Vec<ColumnKey>>,
    ) -> Result<Self> {
        Self::with_options(
            Some(DataInput::Records(rows)),
            Some(index),
            columns,
            self.dtype.clone(),
            self.options.clone(),
        )
    }
}

/// Text input: JSON first, CSV second
impl FromStr for DataFrame {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::new(Some(DataInput::from(text)), None, None, None)
    }
}
