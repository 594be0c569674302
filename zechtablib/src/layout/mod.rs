//! Layout: arrange entries into interleaved rows.
//!
//! This module handles the second stage of the pipeline - deciding which
//! entry goes in which row. It provides:
//!
//! - **Options**: `LayoutOptions` (stride and delimiters), loadable from TOML
//! - **Interleaving**: `interleave`, entry `i` goes to row `i mod stride`
//!
//! ## Example
//!
//! ```rust
//! use zechtablib::layout::interleave;
//!
//! let rows = interleave(&[0, 1, 2, 3, 4], 2).unwrap();
//! assert_eq!(rows, vec![vec![0, 2, 4], vec![1, 3]]);
//! ```

pub mod interleave;
pub mod options;

pub use interleave::interleave;
pub use options::{LayoutOptions, DEFAULT_STRIDE, MAX_STRIDE};
