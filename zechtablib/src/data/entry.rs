//! Core data structures for table entries.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Literal used for the exponent of zero.
pub const INFINITY: &str = "Infinity";

/// A logarithm: either a finite exponent or the sentinel for zero.
///
/// Ordering places every finite exponent before `Infinity`. Serializes as a
/// bare number or the string `"Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Finite exponent
    Finite(u64),
    /// Exponent of the zero element
    Infinity,
}

impl Key {
    /// The finite exponent, if any.
    pub fn finite(&self) -> Option<u64> {
        match self {
            Key::Finite(n) => Some(*n),
            Key::Infinity => None,
        }
    }
}

impl From<u64> for Key {
    fn from(n: u64) -> Self {
        Key::Finite(n)
    }
}

impl From<Option<u64>> for Key {
    fn from(n: Option<u64>) -> Self {
        n.map(Key::Finite).unwrap_or(Key::Infinity)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // pad() so width/alignment flags work for both variants
            Key::Finite(n) => f.pad(&n.to_string()),
            Key::Infinity => f.pad(INFINITY),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == INFINITY {
            return Ok(Key::Infinity);
        }
        s.parse::<u64>()
            .map(Key::Finite)
            .map_err(|_| format!("Unknown key: {}", s))
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Finite(n) => serializer.serialize_u64(*n),
            Key::Infinity => serializer.serialize_str(INFINITY),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(Key::Finite(n)),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// One `key -> value` row of a logarithm table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub key: Key,
    pub value: Key,
}

impl Entry {
    pub fn new(key: Key, value: Key) -> Self {
        Self { key, value }
    }

    /// Entry with finite key and value.
    pub fn finite(key: u64, value: u64) -> Self {
        Self::new(Key::Finite(key), Key::Finite(value))
    }

    /// Format as `key<delimiter>value`.
    pub fn format_with(&self, delimiter: &str) -> String {
        format!("{}{}{}", self.key, delimiter, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_str() {
        assert_eq!(Key::from_str("93").unwrap(), Key::Finite(93));
        assert_eq!(Key::from_str("  7 ").unwrap(), Key::Finite(7));
        assert_eq!(Key::from_str("Infinity").unwrap(), Key::Infinity);
        assert!(Key::from_str("infinity").is_err());
        assert!(Key::from_str("-1").is_err());
        assert!(Key::from_str("").is_err());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Finite(0).to_string(), "0");
        assert_eq!(Key::Infinity.to_string(), "Infinity");
        assert_eq!(format!("{:>3}", Key::Finite(7)), "  7");
    }

    #[test]
    fn test_key_ordering() {
        assert!(Key::Finite(123) < Key::Infinity);
        assert!(Key::Finite(1) < Key::Finite(2));
    }

    #[test]
    fn test_key_from_option() {
        assert_eq!(Key::from(Some(4u64)), Key::Finite(4));
        assert_eq!(Key::from(None), Key::Infinity);
    }

    #[test]
    fn test_key_serde() {
        assert_eq!(serde_json::to_string(&Key::Finite(93)).unwrap(), "93");
        assert_eq!(serde_json::to_string(&Key::Infinity).unwrap(), "\"Infinity\"");
        assert_eq!(serde_json::from_str::<Key>("17").unwrap(), Key::Finite(17));
        assert_eq!(serde_json::from_str::<Key>("\"Infinity\"").unwrap(), Key::Infinity);
        assert!(serde_json::from_str::<Key>("\"nope\"").is_err());
    }

    #[test]
    fn test_entry_format() {
        let entry = Entry::new(Key::Infinity, Key::Finite(0));
        assert_eq!(entry.to_string(), "Infinity -> 0");
        assert_eq!(entry.format_with(" & "), "Infinity & 0");
        assert_eq!(Entry::new(Key::Finite(62), Key::Infinity).format_with("&"), "62&Infinity");
    }
}
