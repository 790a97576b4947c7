//! Format lookup by name or file extension
//!
//! The registry owns one instance of every format. Formats are kept in name
//! order, so listings are stable and extension detection is deterministic
//! when two formats claim the same extension.

use crate::error::FormatError;
use crate::format::{unsupported, Direction, Format};
use crate::formats::{JsonFormat, MarkdownFormat, TreevizFormat, WikitextFormat};
use crate::ir::Document;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// wikitext, markdown, treeviz and json with their default limits.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(WikitextFormat::default());
        registry.register(MarkdownFormat::default());
        registry.register(TreevizFormat);
        registry.register(JsonFormat);
        registry
    }

    /// Add `format`, replacing any format registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|format| format.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Look up `name` and check that it can be used in `direction`.
    pub fn require(&self, name: &str, direction: Direction) -> Result<&dyn Format, FormatError> {
        let format = self.get(name)?;
        if format.supports(direction) {
            Ok(format)
        } else {
            Err(unsupported(name, direction))
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Names of every registered format, sorted.
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Formats usable in `direction`, in name order.
    pub fn formats(&self, direction: Direction) -> impl Iterator<Item = &dyn Format> + '_ {
        self.formats
            .values()
            .map(|format| format.as_ref())
            .filter(move |format| format.supports(direction))
    }

    /// Name of the format claiming the extension of `filename`.
    ///
    /// The comparison ignores ASCII case, so `Page.WIKI` is wikitext too.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension()?.to_str()?;
        self.formats
            .values()
            .find(|format| {
                format
                    .file_extensions()
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(extension))
            })
            .map(|format| format.name().to_string())
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        self.require(format, Direction::Import)?.parse(source)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &HashMap::new())
    }

    pub fn serialize_with_options(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.require(format, Direction::Export)?
            .serialize_with_options(doc, options)
    }

    /// Parse `source` as `from` and serialize the tree as `to`.
    ///
    /// Both formats are checked before any parsing happens.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let reader = self.require(from, Direction::Import)?;
        let writer = self.require(to, Direction::Export)?;
        let doc = reader.parse(source)?;
        writer.serialize_with_options(&doc, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
