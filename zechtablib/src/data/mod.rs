//! Data: ordered `key -> value` entries.
//!
//! This module handles the first stage of the pipeline - getting the
//! entries to lay out. It provides:
//!
//! - **Entries**: `Key` (a number or `Infinity`) and `Entry` pairs
//! - **Embedded**: the GF(5^3) Zech logarithm table as a literal block
//! - **Parsing**: `key -> value` text tables from strings, files, or stdin
//!
//! ## Example
//!
//! ```rust
//! use zechtablib::data::{parse_table, Key};
//!
//! let entries = parse_table("Infinity -> 0\n0 -> 93\n").unwrap();
//! assert_eq!(entries[0].key, Key::Infinity);
//! assert_eq!(entries[1].value, Key::Finite(93));
//! ```

pub mod embedded;
pub mod entry;
pub mod parse;

pub use embedded::{embedded_entries, GF125_ZECH_LOG};
pub use entry::{Entry, Key};
pub use parse::{parse_line, parse_table, read_table};
