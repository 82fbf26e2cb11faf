//! Row-level operations: projection, filtering and row windows

use crate::dataframe::DataFrame;
use crate::error::Result;
use crate::row::Row;
use crate::value::{ColumnKey, Value};

impl DataFrame {
    /// Project every row to the named columns, in the given order.
    ///
    /// # Errors
    /// `ColumnNotFound` for a name that is not a column of this frame.
    pub fn select<I, K>(&self, columns: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = K>,
        K: Into<ColumnKey>,
    {
        let columns = columns
            .into_iter()
            .map(|c| self.require_column(c.into()))
            .collect::<Result<Vec<_>>>()?;

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|c| (c.clone(), row.get(c).cloned().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect();
        self.derive(rows, self.index.values().to_vec(), Some(columns))
    }

    /// Keep the rows for which `predicate` holds, in order.
    ///
    /// Index labels are kept in lock-step with the rows.
    pub fn filter<F>(&self, mut predicate: F) -> Result<DataFrame>
    where
        F: FnMut(&Row) -> bool,
    {
        let positions: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| predicate(row))
            .map(|(i, _)| i)
            .collect();
        self.take(&positions)
    }

    /// First `n` rows; saturates at the row count, `head(0)` is empty
    pub fn head(&self, n: usize) -> Result<DataFrame> {
        let n = n.min(self.row_count());
        let positions: Vec<usize> = (0..n).collect();
        self.take(&positions)
    }

    /// Last `n` rows; saturates at the row count, `tail(0)` is empty
    pub fn tail(&self, n: usize) -> Result<DataFrame> {
        let start = self.row_count().saturating_sub(n);
        let positions: Vec<usize> = (start..self.row_count()).collect();
        self.take(&positions)
    }

    /// `head` with the window size from the frame options
    pub fn preview_head(&self) -> Result<DataFrame> {
        self.head(self.options.window)
    }

    /// `tail` with the window size from the frame options
    pub fn preview_tail(&self) -> Result<DataFrame> {
        self.tail(self.options.window)
    }

    /// New frame over the rows at `positions`, with their index labels
    pub(crate) fn take(&self, positions: &[usize]) -> Result<DataFrame> {
        let rows: Vec<Row> = positions
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        let index = self.index.take(positions);
        self.derive(rows, index.values().to_vec(), Some(self.columns.clone()))
    }
}
