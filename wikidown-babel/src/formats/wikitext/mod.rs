//! MediaWiki wikitext format
//!
//! Import only: wikitext is parsed into the document tree and the other
//! formats take it from there.
//!
//! # Element Mapping Table
//!
//! | Wikitext                  | Node                                   | Notes                                   |
//! |---------------------------|----------------------------------------|-----------------------------------------|
//! | `== Title ==`             | Heading (level = run of `=` minus one) | Capped at 6                             |
//! | `----`                    | HorizontalRule                         | Longer runs are consumed                |
//! | `* item` / `# item`       | BulletList / NumberedList + items      | Marker run length is the depth          |
//! | `; term` / `: text`       | DefinitionList + term / description    |                                         |
//! | leading space             | Preformatted                           |                                         |
//! | `{{...}}` on its own line | BlockTemplate                          | Content kept verbatim                   |
//! | `<gallery>`               | Gallery + one item per line            |                                         |
//! | `{\|` ... `\|}`           | Table, TableCaption, TableRow          | Cells are inline nodes                  |
//! | `''` `'''` `'''''`        | Emphasis, Strong, StrongEmphasis       | Never nested within each other          |
//! | `[[Page\|label]]`         | InternalLink                           |                                         |
//! | `[[File:x.png\|label]]`   | Media                                  | Also `Image:`                           |
//! | `[url label]`             | ExternalLink                           |                                         |
//! | `<nowiki>...</nowiki>`    | Text                                   | No markup recognised inside             |
//!
//! # Lossy Conversions
//!
//! - Table, row and cell attributes are dropped (table attributes survive as
//!   a text child of the table, which no serializer renders)
//! - Template arguments are never expanded
//! - HTML tags other than `<nowiki>` and `<gallery>` pass through as text

mod blocks;
mod inlines;
pub mod parser;

pub use parser::{ParseOptions, DEFAULT_MAX_DEPTH, DEFAULT_TEXT_BUFFER_CAPACITY};

use crate::error::FormatError;
use crate::format::{Direction, Format};
use crate::ir::Document;

/// Format implementation for MediaWiki wikitext
#[derive(Debug, Clone, Default)]
pub struct WikitextFormat {
    options: ParseOptions,
}

impl WikitextFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wikitext format with explicit parser options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

impl Format for WikitextFormat {
    fn name(&self) -> &str {
        "wikitext"
    }

    fn description(&self) -> &str {
        "MediaWiki wikitext markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["wiki", "wikitext", "mediawiki"]
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Import
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_with_options(source, &self.options)
    }
}
