//! Serialize a document and deliver the result
//!
//! The CLI either prints the converted text or writes it next to the input,
//! so a publish run ends in one of two [`Destination`]s. Writing to a file
//! creates missing parent directories.

use crate::error::FormatError;
use crate::ir::Document;
use crate::registry::FormatRegistry;
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the serialized text ends up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Returned to the caller.
    #[default]
    Memory,
    /// Written to this path.
    File(PathBuf),
}

/// A document, the format to write it in and where to put the result.
///
/// ```ignore
/// let spec = PublishSpec::new(&doc, "markdown")
///     .with_output_path("Page.md")
///     .with_option("link-capacity", "2048");
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    pub document: &'a Document,
    pub format: &'a str,
    pub destination: Destination,
    /// Passed to the format's `serialize_with_options`.
    pub options: HashMap<String, String>,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a Document, format: &'a str) -> Self {
        Self {
            document,
            format,
            destination: Destination::Memory,
            options: HashMap::new(),
        }
    }

    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.destination = Destination::File(path.as_ref().to_path_buf());
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options.extend(options);
        self
    }
}

/// What a successful publish produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishArtifact {
    InMemory(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
}

/// Publish with [`FormatRegistry::with_defaults`].
pub fn publish(spec: PublishSpec<'_>) -> Result<PublishResult, FormatError> {
    publish_with_registry(spec, &FormatRegistry::with_defaults())
}

/// Publish with a registry whose formats carry caller-chosen limits.
///
/// Nothing touches the disk unless serialization succeeded, so a capacity
/// error never leaves a truncated file behind.
pub fn publish_with_registry(
    spec: PublishSpec<'_>,
    registry: &FormatRegistry,
) -> Result<PublishResult, FormatError> {
    let text = registry.serialize_with_options(spec.document, spec.format, &spec.options)?;

    let artifact = match spec.destination {
        Destination::Memory => PublishArtifact::InMemory(text),
        Destination::File(path) => {
            write_file(&path, &text)?;
            debug!("wrote {} bytes to {}", text.len(), path.display());
            PublishArtifact::File(path)
        }
    };
    Ok(PublishResult { artifact })
}

fn write_file(path: &Path, text: &str) -> Result<(), FormatError> {
    let io_error = |err: std::io::Error| {
        FormatError::SerializationError(format!("cannot write {}: {err}", path.display()))
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, text).map_err(io_error)
}
