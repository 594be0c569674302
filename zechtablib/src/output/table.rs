//! Table-ready data structures for LaTeX output.
//!
//! The data flow is:
//! 1. Entries (embedded, parsed, or generated)
//! 2. Interleaved groups (`layout::interleave`)
//! 3. LatexTable (formatted cells, ready to join)

use serde::{Deserialize, Serialize};

use crate::data::Entry;
use crate::layout::{interleave, LayoutOptions};
use crate::Result;

/// A single row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Entries in this row, in input order
    pub entries: Vec<Entry>,
    /// Entries formatted as `key<field_delimiter>value`
    pub cells: Vec<String>,
}

impl TableRow {
    fn from_entries(entries: Vec<Entry>, options: &LayoutOptions) -> Self {
        let cells = entries
            .iter()
            .map(|entry| entry.format_with(&options.field_delimiter))
            .collect();
        TableRow { entries, cells }
    }

    /// Join the cells with the entry delimiter.
    pub fn join(&self, options: &LayoutOptions) -> String {
        self.cells.join(&options.entry_delimiter)
    }
}

/// Table-ready entries.
///
/// Rows are the interleaved groups, so there are always exactly `stride`
/// of them (some possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexTable {
    /// Number of rows the entries were interleaved into
    pub stride: usize,
    /// Rows in output order
    pub rows: Vec<TableRow>,
}

impl LatexTable {
    /// Build a LatexTable from ordered entries.
    ///
    /// Validates the options, interleaves the entries, and formats
    /// each entry with the field delimiter.
    pub fn from_entries(entries: &[Entry], options: &LayoutOptions) -> Result<Self> {
        options.validate()?;

        let rows = interleave(entries, options.stride)?
            .into_iter()
            .map(|group| TableRow::from_entries(group, options))
            .collect();

        Ok(LatexTable {
            stride: options.stride,
            rows,
        })
    }

    /// Render the table body.
    ///
    /// Only the joining delimiters are taken from `options`; cells keep the
    /// field delimiter they were built with.
    pub fn render(&self, options: &LayoutOptions) -> String {
        let mut output = self
            .rows
            .iter()
            .map(|row| row.join(options))
            .collect::<Vec<_>>()
            .join(&options.row_separator);

        if options.trailing_newline {
            output.push('\n');
        }
        output
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of entries across all rows
    pub fn entry_count(&self) -> usize {
        self.rows.iter().map(|row| row.entries.len()).sum()
    }
}
