//! RTF table layout engine
//!
//! Converts heterogeneous column width declarations into concrete,
//! page-fitting twip extents, then emits structurally correct table
//! markup: one `\cellx` boundary list per row, an optional header row,
//! and one row block per data row.
//!
//! # Architecture
//!
//! ```text
//! Column specs -> width classification -> normalization -> extents
//!                                                            |
//! Data rows ----> per-cell extraction -> decorated cells -> row blocks
//! ```
//!
//! # Example
//!
//! ```rust
//! use lexrtf::table::{Column, DataRow, Table};
//!
//! let columns = vec![
//!     Column::new(0.5, 0_usize).with_header("Item"),
//!     Column::new(0.5, 1_usize).with_header("Count"),
//! ];
//! let rows = vec![DataRow::positional(["Requests", "24"])];
//! let rtf = Table::new(columns, rows).render().unwrap();
//! assert!(rtf.contains("\\cellx4680\\cellx9360"));
//! ```

mod column;
mod layout;


use std::fmt::Write;

use indexmap::IndexMap;

use crate::data::constants::ERROR_MARKER;
use crate::utils::error::RtfResult;

// Re-export public API
pub use column::{Borders, Column, ColumnKey, ResolvedWidth, WidthSpec};
pub use layout::{cellx_markers, compute_extents, compute_widths};

/// One row of table data, either positional or key-indexed
#[derive(Debug, Clone)]
pub enum DataRow {
    /// Values addressed by position via [`ColumnKey::Index`]
    Positional(Vec<String>),
    /// Values addressed by name via [`ColumnKey::Name`]
    Keyed(IndexMap<String, String>),
}

impl DataRow {
    pub fn positional<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DataRow::Positional(values.into_iter().map(Into::into).collect())
    }

    pub fn keyed<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        DataRow::Keyed(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Extract the value a column displays. `None` means the row does not
    /// carry that field, including a key kind that does not match the row
    /// shape.
    fn value(&self, key: &ColumnKey) -> Option<&str> {
        match (self, key) {
            (DataRow::Positional(values), ColumnKey::Index(i)) => {
                values.get(*i).map(String::as_str)
            }
            (DataRow::Keyed(fields), ColumnKey::Name(name)) => {
                fields.get(name).map(String::as_str)
            }
            _ => None,
        }
    }
}

/// An RTF table: ordered columns, ordered data rows, and a left margin
/// offset in twips.
///
/// The table is immutable once constructed; extents are recomputed on
/// every [`Table::render`] call.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<DataRow>,
    left_margin: i32,
}

impl Table {
    pub fn new(columns: Vec<Column>, rows: Vec<DataRow>) -> Self {
        Table {
            columns,
            rows,
            left_margin: 0,
        }
    }

    /// Offset the usable width by a left margin, in twips
    pub fn with_left_margin(mut self, twips: i32) -> Self {
        self.left_margin = twips;
        self
    }

    /// Produce the RTF for the whole table.
    ///
    /// Configuration errors (invalid or mixed width specifications, no
    /// columns) abort the render. A row missing the field a column asks
    /// for is a local data error: that cell renders the `#ERR#` marker
    /// and the rest of the table is still produced.
    pub fn render(&self) -> RtfResult<String> {
        let extents = compute_extents(&self.columns, self.left_margin)?;
        let markers = cellx_markers(&extents);

        let mut row_blocks = Vec::with_capacity(self.rows.len() + 1);

        if self.has_headers() {
            row_blocks.push(format!(
                "{}{}{}{}",
                begin_row(),
                markers,
                self.header_block(),
                end_row()
            ));
        }

        for row in &self.rows {
            row_blocks.push(format!(
                "{}{}{}{}",
                begin_row(),
                markers,
                self.data_block(row),
                end_row()
            ));
        }

        Ok(format!("\n{}\n", row_blocks.join("\n")))
    }

    /// True if at least one column declares a header
    fn has_headers(&self) -> bool {
        self.columns.iter().any(|c| c.header.is_some())
    }

    /// One row block holding the column headers. Columns without a
    /// header contribute an empty cell so the grid stays aligned.
    fn header_block(&self) -> String {
        let mut cells = String::new();
        for column in &self.columns {
            let body = match &column.header {
                Some(header) => format!(
                    "{}{}",
                    decoration(column.header_font, column.header_color),
                    header
                ),
                None => String::new(),
            };
            cells.push_str(&cell_markup(column, &body));
        }
        format!("{{{}}}\n", cells)
    }

    /// One row block for a row of data
    fn data_block(&self, row: &DataRow) -> String {
        let mut cells = String::new();
        for column in &self.columns {
            let value = row.value(&column.key).unwrap_or(ERROR_MARKER);
            let body = format!(
                "{}{}",
                decoration(column.data_font, column.data_color),
                value
            );
            cells.push_str(&cell_markup(column, &body));
        }
        format!("{{{}}}\n", cells)
    }
}

/// RTF that opens a table row
fn begin_row() -> &'static str {
    "{\\trowd\\trgaph180\n"
}

/// RTF that closes a table row
fn end_row() -> &'static str {
    "\\row}\n"
}

/// Font/color control words prefixed to a cell body, with a trailing
/// space delimiter when any decoration is present
fn decoration(font: Option<usize>, color: Option<usize>) -> String {
    let mut rtf = String::new();
    if let Some(f) = font {
        let _ = write!(rtf, "\\f{}", f);
    }
    if let Some(c) = color {
        let _ = write!(rtf, "\\cf{}", c);
    }
    if !rtf.is_empty() {
        rtf.push(' ');
    }
    rtf
}

/// Wrap a cell body in the column's paragraph, alignment, and border
/// control words
fn cell_markup(column: &Column, body: &str) -> String {
    let mut cell = format!("{{\\pard\\q{}\\intbl", column.alignment.code());
    for side in column.borders.sides() {
        let _ = write!(cell, "\\brdr{}\\brdrs\\brdrw10\\brsp20", side);
    }
    let _ = write!(cell, " {}\\cell}}\n", body);
    cell
}
