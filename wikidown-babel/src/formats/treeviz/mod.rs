//! Treeviz formatter for the document tree
//!
//! A visual dump of the tree built by the wikitext parser, one node per line:
//!
//! <prefix><connector> <icon> <label>
//!
//! Block labels show the kind name (plus level or depth where the kind has
//! one); text leaves show their text, truncated to 30 characters with
//! newlines shown as `↵`.
//!
//! Example:
//!
//! ⧉ Document (7 nodes)
//! ├─ § Heading (level 1)
//! │ └─ ◦  Title
//! └─ ¶ Paragraph
//!   ├─ ◦ Some
//!   ├─ 𝐁 Strong
//!   │ └─ ◦ bold
//!   └─ ◦  text.

use super::icons::get_icon;
use crate::error::FormatError;
use crate::format::{unknown_option, Direction, Format};
use crate::ir::{BlockKind, Document, NodeId, NodeKind};
use std::collections::HashMap;

const LABEL_WIDTH: usize = 30;

fn truncate(text: &str) -> String {
    let flat = text.replace('\n', "↵");
    if flat.chars().count() <= LABEL_WIDTH {
        flat
    } else {
        let cut: String = flat.chars().take(LABEL_WIDTH - 1).collect();
        format!("{cut}…")
    }
}

fn label(doc: &Document, id: NodeId, show_index: bool) -> String {
    let kind = doc.kind(id);
    let mut label = match kind {
        NodeKind::Inline(_) if doc.node(id).is_text() => truncate(doc.text(id)),
        NodeKind::Block(BlockKind::Heading) => {
            format!("{} (level {})", kind.name(), doc.subtype(id))
        }
        NodeKind::Block(BlockKind::BulletListItem | BlockKind::NumberedListItem) => {
            format!("{} (depth {})", kind.name(), doc.subtype(id))
        }
        _ => kind.name().to_string(),
    };
    if show_index {
        label.push_str(&format!(" #{}", id.index()));
    }
    label
}

fn format_node(doc: &Document, id: NodeId, prefix: &str, is_last: bool, show_index: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!(
        "{prefix}{connector} {} {}\n",
        get_icon(doc.kind(id)),
        label(doc, id, show_index)
    );
    let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "│ " });
    output.push_str(&format_children(doc, id, &child_prefix, show_index));
    output
}

fn format_children(doc: &Document, id: NodeId, prefix: &str, show_index: bool) -> String {
    let children = doc.children(id);
    children
        .iter()
        .enumerate()
        .map(|(i, &child)| format_node(doc, child, prefix, i == children.len() - 1, show_index))
        .collect()
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_indexed(doc, false)
}

/// Like [`to_treeviz_str`], with `#<index>` after every label when `show_index` is set.
pub fn to_treeviz_str_indexed(doc: &Document, show_index: bool) -> String {
    let mut out = format!(
        "{} Document ({} nodes)\n",
        get_icon(NodeKind::Root),
        doc.len() - 1
    );
    out.push_str(&format_children(doc, doc.root(), "", show_index));
    out
}

/// Debug dump of the parsed tree. Takes one parameter, `show-index`.
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Parsed tree, one node per line"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Export
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut show_index = false;
        for (key, value) in options {
            match key.as_str() {
                "show-index" => show_index = value.eq_ignore_ascii_case("true"),
                _ => return Err(unknown_option(self.name(), key)),
            }
        }
        Ok(to_treeviz_str_indexed(doc, show_index))
    }
}
