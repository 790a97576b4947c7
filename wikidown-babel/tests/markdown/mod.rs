//! Markdown format tests
//!
//! End-to-end wikitext → Markdown conversion. Exact strings where the output is
//! short, Comrak ASTs where the structure is what matters.

mod blocks;
mod capacity;
mod documents;
mod headings;
mod inline;
mod links;
mod lists;
mod tables;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};

/// Convert with the default limits.
pub fn convert(source: &str) -> String {
    wikidown_babel::convert(source).unwrap()
}

/// Convert and parse the result with Comrak, tables enabled.
pub fn to_comrak_ast<'a>(source: &str, arena: &'a Arena<AstNode<'a>>) -> &'a AstNode<'a> {
    let md = convert(source);
    let mut options = Options::default();
    options.extension.table = true;
    parse_document(arena, &md, &options)
}

/// Concatenated text below `node`.
pub fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    for descendant in node.descendants() {
        if let NodeValue::Text(text) = &descendant.data.borrow().value {
            out.push_str(text);
        }
    }
    out
}
