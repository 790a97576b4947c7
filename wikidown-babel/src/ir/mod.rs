//! Intermediate Representation (IR): the typed tree built by the wikitext
//! parser and folded into Markdown by the serializer.

pub mod document;
pub mod nodes;

pub use document::Document;
pub use nodes::{BlockKind, InlineKind, Node, NodeId, NodeKind};
