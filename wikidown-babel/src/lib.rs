//! MediaWiki wikitext to Markdown conversion
//!
//!     This crate parses wikitext into a typed document tree and renders that tree as
//!     Markdown. It is a pure lib, it powers wikidown-cli but is shell agnostic: no code
//!     here prints to the terminal or exits the process. Diagnostics go through the `log` facade and
//!     the binary decides where they end up.
//!
//! Architecture
//!
//!     Two passes, with the tree in between:
//!
//!     1. Parsing (./formats/wikitext): a single forward scan. At every position a block
//!        close pass, a block open pass, an inline open pass and an inline close pass run
//!        in that order; whatever none of them claims is literal text.
//!     2. Rendering (./formats/markdown): a recursive walk that dispatches on node kind.
//!        Links are resolved here, not in the parser: the link's children are rendered
//!        first, and the flattened text is split into target and label afterwards.
//!
//!     The tree (./ir) is an arena: nodes live in one Vec and point at each other by index.
//!     Parent and sibling links are for traversal only; the arena owns every node.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── publish.rs              # Serialize + write in one call
//!     ├── source.rs               # Input bytes → parser input
//!     ├── formats
//!     │   ├── wikitext            # Parser (import only)
//!     │   ├── markdown            # Serializer and bounded output (export only)
//!     │   ├── treeviz             # Tree dump for debugging
//!     │   └── json                # Tree as JSON
//!     ├── ir                      # Document tree
//!     └── common                  # Link splitting and escaping
//!
//! Bounded buffers
//!
//!     Every buffer that grows with the input has a hard cap: the parsed input
//!     (source::load_source truncates), each link definition, and the rendered output.
//!     Going past the output or link cap is an error (FormatError::CapacityExhausted),
//!     never a silent truncation.
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── mod.rs
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod common;
pub mod error;
pub mod format;
pub mod formats;
pub mod ir;
pub mod publish;
pub mod registry;
pub mod source;

pub use error::FormatError;
pub use format::Format;
pub use ir::Document;
pub use registry::FormatRegistry;

/// Converts wikitext to Markdown with the default parse and render options.
///
/// # Example
///
/// ```
/// let markdown = wikidown_babel::convert("== Intro ==\n\nSee [[Main Page|home]].").unwrap();
/// assert_eq!(markdown, "# Intro\n\nSee [home](Main Page.md).\n\n");
/// ```
pub fn convert(source: &str) -> Result<String, FormatError> {
    let doc = formats::wikitext::parser::parse_from_wikitext(source)?;
    formats::markdown::serializer::serialize_to_markdown(&doc)
}
