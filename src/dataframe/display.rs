//! Plain-text table rendering.
//!
//! Rendering only reads the frame; `head`/`tail` stay pure and callers
//! decide when to print.

use std::fmt::{self, Display};

use crate::dataframe::DataFrame;
use crate::index::Index;
use crate::row::Row;
use crate::value::{ColumnKey, Value};

/// Render rows as an aligned text table.
///
/// The first column holds the index labels when `index` is given. Numbers are
/// right-aligned, everything else left-aligned.
pub fn render_table(columns: &[ColumnKey], rows: &[Row], index: Option<&Index>) -> String {
    let mut header: Vec<String> = Vec::with_capacity(columns.len() + 1);
    if index.is_some() {
        header.push(String::new());
    }
    header.extend(columns.iter().map(ToString::to_string));

    let body: Vec<Vec<(String, bool)>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = Vec::with_capacity(header.len());
            if let Some(index) = index {
                let label = index.get_value(i).map(ToString::to_string).unwrap_or_default();
                cells.push((label, false));
            }
            for column in columns {
                let cell = match row.get(column) {
                    Some(value) => (value.to_string(), value.is_number()),
                    None => (Value::Null.to_string(), false),
                };
                cells.push(cell);
            }
            cells
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for cells in &body {
        for (width, (text, _)) in widths.iter_mut().zip(cells) {
            *width = (*width).max(text.chars().count());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<w$}", h, w = w))
        .collect();
    out.push_str(header_line.join(" | ").trim_end());
    out.push('\n');

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');

    for cells in &body {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|((text, numeric), &w)| {
                if *numeric {
                    format!("{:>w$}", text, w = w)
                } else {
                    format!("{:<w$}", text, w = w)
                }
            })
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

impl DataFrame {
    /// Text table of the whole frame, index included
    pub fn to_table_string(&self) -> String {
        render_table(&self.columns, &self.rows, Some(&self.index))
    }
}

impl Display for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_table_string())?;
        write!(f, "[{} rows x {} columns]", self.row_count(), self.column_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_alignment() {
        let df = DataFrame::from_columns([
            ("Name", vec![Value::from("Ankit"), Value::from("Bo")]),
            ("Age", vec![Value::from(23), Value::from(7)]),
        ])
        .unwrap();
        let table = df.to_table_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "  | Name  | Age");
        assert_eq!(lines[1], "--+-------+----");
        assert_eq!(lines[2], "0 | Ankit |  23");
        assert_eq!(lines[3], "1 | Bo    |   7");
    }

    #[test]
    fn test_display_footer() {
        let shown = DataFrame::empty().to_string();
        assert!(shown.ends_with("[0 rows x 0 columns]"));
    }
}
