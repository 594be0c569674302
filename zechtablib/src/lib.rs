//! # zechtablib
//!
//! Zech logarithm tables over finite fields, laid out for LaTeX.
//!
//! ## Overview
//!
//! A Zech logarithm table lists, for every exponent `n` of a primitive
//! element `g`, the exponent `Z(n)` with `1 + g^n = g^Z(n)`. The library
//! ships the table for GF(5^3) and can generate the table for any small
//! GF(p^m). It also lays a table out as interleaved rows ready to be
//! pasted into a `tabular` environment.
//!
//! The pipeline has three stages:
//!
//! - **Data**: ordered `key -> value` entries (embedded, parsed, or generated)
//! - **Layout**: stride-based interleaving, entry `i` lands in row `i mod stride`
//! - **Output**: `LatexTable`, rendered with `&` columns and `\\` row breaks
//!
//! ## Example
//!
//! ```rust
//! use zechtablib::{embedded_entries, LatexTable, LayoutOptions};
//!
//! let entries = embedded_entries().unwrap();
//! let options = LayoutOptions::new();
//! let table = LatexTable::from_entries(&entries, &options).unwrap();
//!
//! assert_eq!(table.row_count(), 17);
//! assert_eq!(table.entry_count(), entries.len());
//!
//! let latex = table.render(&options);
//! assert!(latex.starts_with("Infinity & 0 & 16 & 24"));
//! ```
//!
//! Generating the same table from the field definition:
//!
//! ```rust
//! use zechtablib::{embedded_entries, ExtensionField};
//!
//! let field = ExtensionField::new(5, &[1, 0, 3, 2]).unwrap();
//! assert_eq!(field.zech_log_table(), embedded_entries().unwrap());
//! ```

pub mod data;
pub mod error;
pub mod field;
pub mod layout;
pub mod output;

pub use data::{embedded_entries, parse_line, parse_table, read_table, Entry, Key, GF125_ZECH_LOG};
pub use error::ZechtabError;
pub use field::{
    ExtensionField, FieldElement, OperationTable, PrimeField, MAX_FIELD_ORDER, MAX_TABLE_PRIME,
};
pub use layout::{interleave, LayoutOptions};
pub use output::{LatexTable, TableRow};

/// Result type for zechtablib operations
pub type Result<T> = std::result::Result<T, ZechtabError>;
