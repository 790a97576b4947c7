//! Markdown format implementation
//!
//! Export only. The serializer writes Markdown text directly; there is no
//! intermediate Markdown AST.
//!
//! # Element Mapping Table
//!
//! | Node                  | Markdown                              | Notes                                      |
//! |-----------------------|---------------------------------------|--------------------------------------------|
//! | Heading               | `#`×level + space                     |                                            |
//! | Paragraph             | text + blank line                     | Empty paragraphs are dropped               |
//! | HorizontalRule        | `---`                                 |                                            |
//! | BulletListItem        | `* ` indented two spaces per level    |                                            |
//! | NumberedListItem      | `1. ` indented three spaces per level | Markdown renumbers                         |
//! | DefinitionList        | `<dl>`, `<dt>`, `<dd>`                | No native Markdown equivalent              |
//! | Preformatted          | `<pre>` block                         |                                            |
//! | BlockTemplate         | `<pre>{{...}}</pre>`                  | Not expanded                               |
//! | InlineTemplate        | `<code>{{...}}</code>`                | Not expanded                               |
//! | Table                 | pipe table                            | Caption becomes a bold line above          |
//! | Emphasis / Strong     | `_..._` / `**...**`                   | Strong-and-emphasis is `**_..._**`         |
//! | InternalLink          | `[label](Target.md)`                  |                                            |
//! | ExternalLink          | `[label](url)`                        |                                            |
//! | Media, GalleryItem    | `![label](File:x.png)`                | Non-image media become plain links         |
//!
//! # Lossy Conversions
//!
//! - Media options between the target and the caption (`thumb`, `200px`) are dropped
//! - A table whose first row has no header cells gets an empty header row
//! - Indentation runs (`::`) flatten into a single definition description

pub mod output;
pub mod serializer;

pub use output::{Output, DEFAULT_LINK_CAPACITY, DEFAULT_OUTPUT_CAPACITY};
pub use serializer::RenderOptions;

use crate::error::FormatError;
use crate::format::{parse_byte_count, unknown_option, Direction, Format};
use crate::ir::Document;
use std::collections::HashMap;

/// Format implementation for Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormat {
    options: RenderOptions,
}

impl MarkdownFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Markdown format with explicit capacity limits
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "CommonMark Markdown with GFM pipe tables"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Export
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_with_options(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut render = self.options;
        for (key, value) in options {
            match key.as_str() {
                "output-capacity" => render.output_capacity = parse_byte_count(key, value)?,
                "link-capacity" => render.link_capacity = parse_byte_count(key, value)?,
                _ => return Err(unknown_option(self.name(), key)),
            }
        }
        serializer::serialize_with_options(doc, &render)
    }
}
