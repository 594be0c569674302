//! Output formatting: present entries as a LaTeX table body.
//!
//! This module handles the third and final stage of the pipeline -
//! turning interleaved entries into text. It provides:
//!
//! - **LatexTable**: Table-ready data structure, one row per interleaved group
//! - **TableRow**: Individual row with its entries and formatted cells
//!
//! LatexTable is a pure presentation layer. Row assignment happens in the
//! layout stage; this stage only formats and joins strings.

pub mod table;

pub use table::{LatexTable, TableRow};
