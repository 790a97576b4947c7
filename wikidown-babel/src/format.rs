//! The `Format` trait
//!
//! A format is one end of a conversion. Wikitext is only ever read, Markdown
//! and the debug dumps are only ever written, so every implementation states
//! the [`Direction`]s it supports and leaves the other half to the defaults,
//! which fail with [`FormatError::NotSupported`].

use crate::error::FormatError;
use crate::ir::Document;
use std::collections::HashMap;
use std::fmt;

/// Which way a format can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Text → document tree
    Import,
    /// Document tree → text
    Export,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Import => f.write_str("parsing"),
            Direction::Export => f.write_str("serialization"),
        }
    }
}

/// A named text representation of the document tree.
pub trait Format: Send + Sync {
    /// Registry key, e.g. "wikitext" or "markdown".
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Extensions without the leading dot, used to detect the format of a file.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports(&self, direction: Direction) -> bool;

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(unsupported(self.name(), Direction::Import))
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(unsupported(self.name(), Direction::Export))
    }

    /// Serialize with `--extra-*` style parameters.
    ///
    /// Formats without parameters accept an empty map only.
    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        match options.keys().next() {
            None => self.serialize(doc),
            Some(key) => Err(unknown_option(self.name(), key)),
        }
    }
}

/// Error for a format used in a direction it does not support.
pub fn unsupported(format: &str, direction: Direction) -> FormatError {
    FormatError::NotSupported(format!("Format '{format}' does not support {direction}"))
}

/// Error for a parameter the format does not know.
pub fn unknown_option(format: &str, key: &str) -> FormatError {
    FormatError::NotSupported(format!("Format '{format}' does not support parameter '{key}'"))
}

/// Parse a byte-count parameter.
pub fn parse_byte_count(key: &str, value: &str) -> Result<usize, FormatError> {
    value.trim().parse().map_err(|_| {
        FormatError::SerializationError(format!(
            "Invalid value for '{key}': expected a byte count, got '{value}'"
        ))
    })
}
