//! Layout options: stride and delimiters.
//!
//! Defaults produce a LaTeX `tabular` body: `key & value` cells joined by
//! ` & `, rows ended by ` \\` and a newline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ZechtabError;
use crate::Result;

/// Number of rows in the default layout.
pub const DEFAULT_STRIDE: usize = 17;

/// Largest accepted stride.
pub const MAX_STRIDE: usize = 1 << 16;

/// Options controlling how entries are laid out and joined.
///
/// Every field has a default, so a TOML config only needs the fields it
/// changes:
///
/// ```toml
/// stride = 5
/// row_separator = "\\\\\n"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Number of rows; entry `i` goes to row `i mod stride`
    pub stride: usize,
    /// Placed between an entry's key and value
    pub field_delimiter: String,
    /// Placed between entries of the same row
    pub entry_delimiter: String,
    /// Placed between rows
    pub row_separator: String,
    /// End the output with a newline
    pub trailing_newline: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            stride: DEFAULT_STRIDE,
            field_delimiter: " & ".to_string(),
            entry_delimiter: " & ".to_string(),
            row_separator: " \\\\\n".to_string(),
            trailing_newline: true,
        }
    }
}

impl LayoutOptions {
    /// Create options with the LaTeX defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rows
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Set the key/value delimiter
    pub fn field_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.field_delimiter = delimiter.into();
        self
    }

    /// Set the delimiter between entries of a row
    pub fn entry_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.entry_delimiter = delimiter.into();
        self
    }

    /// Set the separator between rows
    pub fn row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Enable or disable the final newline
    pub fn trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Check that the options can produce a table.
    pub fn validate(&self) -> Result<()> {
        if self.stride == 0 || self.stride > MAX_STRIDE {
            return Err(ZechtabError::InvalidStride(self.stride));
        }
        Ok(())
    }

    /// Parse options from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: LayoutOptions =
            toml::from_str(text).map_err(|e| ZechtabError::Config(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ZechtabError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}
