//! Parsing of `key -> value` text tables.
//!
//! The format is the one printed by `zechtab log-table`: one entry per
//! line, key and value separated by `->`, surrounding whitespace ignored.
//! Blank lines are skipped. Line numbers in errors are 1-based.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::entry::{Entry, Key};
use crate::error::ZechtabError;
use crate::Result;

const SEPARATOR: &str = "->";

/// Parse a single `key -> value` line.
pub fn parse_line(line: &str, line_no: usize) -> Result<Entry> {
    let (key, value) = line
        .split_once(SEPARATOR)
        .ok_or_else(|| ZechtabError::MalformedLine {
            line: line_no,
            content: line.to_string(),
        })?;

    Ok(Entry {
        key: parse_key(key, line_no)?,
        value: parse_key(value, line_no)?,
    })
}

fn parse_key(token: &str, line_no: usize) -> Result<Key> {
    token.parse().map_err(|_| ZechtabError::InvalidKey {
        line: line_no,
        token: token.trim().to_string(),
    })
}

/// Parse a whole table, preserving entry order.
pub fn parse_table(text: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut seen: HashMap<Key, usize> = HashMap::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let entry = parse_line(line, line_no)?;
        if seen.insert(entry.key, line_no).is_some() {
            return Err(ZechtabError::DuplicateKey {
                key: entry.key.to_string(),
                line: line_no,
            });
        }
        entries.push(entry);
    }

    debug!(entries = entries.len(), "parsed table");
    Ok(entries)
}

/// Read and parse a table from a file, or from stdin when `path` is `-`.
pub fn read_table(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();

    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| ZechtabError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| ZechtabError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    };

    parse_table(&text)
}
