//! Block-level open and close rules.
//!
//! `close` is asked about the nearest block ancestor of the current node;
//! `open` is asked about the current node when it is a block container.
//! Both consume the markup they recognise and leave the cursor untouched
//! otherwise.

use super::parser::Cursor;
use crate::ir::{BlockKind, Document, NodeId, NodeKind};

/// Line starts that end a paragraph.
const PARAGRAPH_TERMINATORS: &[&str] = &[
    "\n\n",
    "\n----",
    "\n==",
    "\n*",
    "\n#",
    "\n:",
    "\n;",
    "\n{|",
    "\n<gallery",
];

/// Line starts that end every list kind.
const LIST_TERMINATORS: &[&str] = &["\n\n", "\n----", "\n=="];

/// What a matching close rule does to the parse state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closing {
    /// Current moves to the closed block's parent.
    Close,
    /// The item and its list both close.
    CloseParent,
    /// The block closes and a fresh sibling of the given kind becomes current.
    Sibling(BlockKind),
}

/// A block recognised by the open pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Opening<'s> {
    pub kind: BlockKind,
    pub subtype: usize,
    /// Text attached to the new block itself (table attributes).
    pub text: Option<&'s str>,
    /// A first child opened together with its container.
    pub child: Option<(BlockKind, usize)>,
}

impl<'s> Opening<'s> {
    pub(crate) fn new(kind: BlockKind) -> Self {
        Opening {
            kind,
            subtype: 0,
            text: None,
            child: None,
        }
    }

    fn with_subtype(mut self, subtype: usize) -> Self {
        self.subtype = subtype;
        self
    }

    fn with_child(mut self, kind: BlockKind, subtype: usize) -> Self {
        self.child = Some((kind, subtype));
        self
    }
}

fn starts_with_any(rest: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| rest.starts_with(p))
}

/// A template that opens right after a newline and closes on the same line.
fn template_on_own_line(rest: &str) -> bool {
    match rest.strip_prefix("\n{{") {
        Some(after) => {
            let line = after.split('\n').next().unwrap_or("");
            line.trim_end().ends_with("}}")
        }
        None => false,
    }
}

fn paragraph_ends(rest: &str) -> bool {
    starts_with_any(rest, PARAGRAPH_TERMINATORS) || template_on_own_line(rest)
}

fn list_ends(rest: &str) -> bool {
    starts_with_any(rest, LIST_TERMINATORS)
}

/// Check whether the block `kind` ends at the cursor.
///
/// `subtype` is the block's own subtype and `current` the kind of the node
/// the parser is currently filling, which may be an inline inside the block.
pub(crate) fn close(
    kind: BlockKind,
    subtype: usize,
    current: NodeKind,
    cursor: &mut Cursor<'_>,
) -> Option<Closing> {
    let rest = cursor.rest();
    match kind {
        BlockKind::Paragraph => paragraph_ends(rest).then_some(Closing::Close),
        BlockKind::Heading => {
            let marks = "=".repeat(subtype + 1);
            if cursor.eat(&marks) {
                cursor.take_line();
                Some(Closing::Close)
            } else if rest.starts_with('\n') {
                Some(Closing::Close)
            } else {
                None
            }
        }
        BlockKind::HorizontalRule => {
            (rest.is_empty() || rest.starts_with('\n')).then_some(Closing::Close)
        }
        BlockKind::Template => {
            if current != NodeKind::Inline(crate::ir::InlineKind::Template) && cursor.eat("}}") {
                Some(Closing::Close)
            } else {
                None
            }
        }
        BlockKind::BulletList | BlockKind::NumberedList | BlockKind::DefinitionList => {
            list_ends(rest).then_some(Closing::Close)
        }
        BlockKind::BulletListItem => list_item_close(rest, "\n*"),
        BlockKind::NumberedListItem => list_item_close(rest, "\n#"),
        BlockKind::DefinitionTerm => {
            if rest.starts_with("\n:") || rest.starts_with("\n;") {
                Some(Closing::Close)
            } else if rest.starts_with('\n') {
                Some(Closing::CloseParent)
            } else {
                None
            }
        }
        BlockKind::DefinitionDescription => {
            if list_ends(rest) {
                Some(Closing::CloseParent)
            } else if rest.starts_with("\n:") || rest.starts_with("\n;") {
                Some(Closing::Close)
            } else if rest.starts_with('\n') {
                Some(Closing::CloseParent)
            } else {
                None
            }
        }
        BlockKind::Preformatted => {
            (rest.starts_with('\n') && !rest.starts_with("\n ")).then_some(Closing::Close)
        }
        BlockKind::Gallery => cursor.eat("</gallery>").then_some(Closing::Close),
        BlockKind::GalleryItem => {
            if rest.starts_with("</gallery>") {
                Some(Closing::Close)
            } else if rest.starts_with('\n') {
                if rest.trim_start_matches('\n').starts_with("</gallery>") {
                    Some(Closing::Close)
                } else {
                    Some(Closing::Sibling(BlockKind::GalleryItem))
                }
            } else {
                None
            }
        }
        BlockKind::Table => cursor.eat("|}").then_some(Closing::Close),
        BlockKind::TableCaption => rest.starts_with('\n').then_some(Closing::Close),
        BlockKind::TableRow => {
            starts_with_any(rest, &["\n|-", "|}", "\n|}"]).then_some(Closing::Close)
        }
    }
}

fn list_item_close(rest: &str, next_item: &str) -> Option<Closing> {
    if list_ends(rest) {
        Some(Closing::CloseParent)
    } else if rest.starts_with(next_item) {
        Some(Closing::Close)
    } else {
        None
    }
}

/// Try to open a block under `current` at the cursor.
pub(crate) fn open<'s>(
    doc: &Document,
    current: NodeId,
    cursor: &mut Cursor<'s>,
) -> Option<Opening<'s>> {
    match doc.kind(current) {
        NodeKind::Root => open_at_root(cursor),
        NodeKind::Block(BlockKind::BulletList) => {
            list_item(cursor, b'*').map(|depth| Opening::new(BlockKind::BulletListItem).with_subtype(depth))
        }
        NodeKind::Block(BlockKind::NumberedList) => {
            list_item(cursor, b'#').map(|depth| Opening::new(BlockKind::NumberedListItem).with_subtype(depth))
        }
        NodeKind::Block(BlockKind::DefinitionList) => definition_item(cursor).map(Opening::new),
        NodeKind::Block(BlockKind::Table) => table_part(doc, current, cursor),
        // gallery items are only ever synthesized by the close pass
        NodeKind::Block(BlockKind::Gallery) => None,
        NodeKind::Block(_) | NodeKind::Inline(_) => None,
    }
}

/// Top-level blocks, in priority order.
fn open_at_root<'s>(cursor: &mut Cursor<'s>) -> Option<Opening<'s>> {
    if cursor.eat("{|") {
        let attributes = cursor.take_line().trim();
        let mut opening = Opening::new(BlockKind::Table);
        if !attributes.is_empty() {
            opening.text = Some(attributes);
        }
        return Some(opening);
    }
    if cursor.eat("{{") {
        return Some(Opening::new(BlockKind::Template));
    }
    if let Some(depth) = list_item(cursor, b'*') {
        return Some(Opening::new(BlockKind::BulletList).with_child(BlockKind::BulletListItem, depth));
    }
    if let Some(item) = definition_item(cursor) {
        return Some(Opening::new(BlockKind::DefinitionList).with_child(item, 0));
    }
    if open_gallery(cursor) {
        return Some(Opening::new(BlockKind::Gallery).with_child(BlockKind::GalleryItem, 0));
    }
    if cursor.starts_with("==") {
        let run = cursor.run_of(b'=');
        let level = (run - 1).min(6);
        cursor.advance(level + 1);
        return Some(Opening::new(BlockKind::Heading).with_subtype(level));
    }
    if cursor.eat("----") {
        let extra = cursor.run_of(b'-');
        cursor.advance(extra);
        return Some(Opening::new(BlockKind::HorizontalRule));
    }
    if let Some(depth) = list_item(cursor, b'#') {
        return Some(
            Opening::new(BlockKind::NumberedList).with_child(BlockKind::NumberedListItem, depth),
        );
    }
    if cursor.eat(" ") {
        return Some(Opening::new(BlockKind::Preformatted));
    }
    Some(Opening::new(BlockKind::Paragraph))
}

/// Consume a list marker run, returning its length as the item depth.
fn list_item(cursor: &mut Cursor<'_>, marker: u8) -> Option<usize> {
    let depth = cursor.run_of(marker);
    if depth == 0 {
        return None;
    }
    cursor.advance(depth);
    Some(depth)
}

fn definition_item(cursor: &mut Cursor<'_>) -> Option<BlockKind> {
    if cursor.eat(";") {
        return Some(BlockKind::DefinitionTerm);
    }
    let run = cursor.run_of(b':');
    if run > 0 {
        cursor.advance(run);
        return Some(BlockKind::DefinitionDescription);
    }
    None
}

/// `<gallery>` or `<gallery attr="...">`, followed by any newlines.
fn open_gallery(cursor: &mut Cursor<'_>) -> bool {
    let rest = cursor.rest();
    let Some(after) = rest.strip_prefix("<gallery") else {
        return false;
    };
    if !(after.starts_with('>') || after.starts_with(' ')) {
        return false;
    }
    let Some(end) = after.find('>') else {
        return false;
    };
    cursor.advance("<gallery".len() + end + 1);
    cursor.skip_newlines();
    true
}

fn table_part<'s>(doc: &Document, table: NodeId, cursor: &mut Cursor<'s>) -> Option<Opening<'s>> {
    if cursor.eat("|+") {
        return Some(Opening::new(BlockKind::TableCaption));
    }
    if cursor.eat("|-") {
        // row attributes are dropped
        cursor.take_line();
        return Some(Opening::new(BlockKind::TableRow));
    }

    // the first row may start without a `|-` separator
    let has_row = doc
        .children(table)
        .iter()
        .any(|&c| doc.kind(c) == NodeKind::Block(BlockKind::TableRow));
    if has_row {
        return None;
    }
    let starts_cell = match cursor.peek(0) {
        Some(b'!') => true,
        Some(b'|') => !matches!(cursor.peek(1), Some(b'}' | b'-' | b'+')),
        _ => false,
    };
    starts_cell.then(|| Opening::new(BlockKind::TableRow))
}
