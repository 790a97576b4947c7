//! Inline open and close rules.

use super::parser::Cursor;
use crate::ir::{BlockKind, InlineKind, NodeKind};

/// Try to open an inline node under `current` at the cursor.
///
/// Apostrophe runs are tried longest first. Media is tested before the
/// generic internal link, since both start with `[[`; only the brackets are
/// consumed so the `File:` prefix stays part of the target.
pub(crate) fn open(current: NodeKind, cursor: &mut Cursor<'_>) -> Option<InlineKind> {
    if !current.is_emphasis_family() {
        if cursor.eat("'''''") {
            return Some(InlineKind::StrongEmphasis);
        }
        if cursor.eat("'''") {
            return Some(InlineKind::Strong);
        }
        if cursor.eat("''") {
            return Some(InlineKind::Emphasis);
        }
    }

    if cursor.starts_with("[[File:") || cursor.starts_with("[[Image:") {
        cursor.advance(2);
        return Some(InlineKind::Media);
    }
    if cursor.eat("[[") {
        return Some(InlineKind::InternalLink);
    }
    if cursor.eat("[") {
        return Some(InlineKind::ExternalLink);
    }
    if cursor.eat("{{") {
        return Some(InlineKind::Template);
    }

    if current == NodeKind::Block(BlockKind::TableRow) {
        return table_cell(cursor);
    }
    None
}

fn table_cell(cursor: &mut Cursor<'_>) -> Option<InlineKind> {
    if cursor.eat("\n!") || cursor.eat("!!") || cursor.eat("!") {
        return Some(InlineKind::TableHeader);
    }
    if cursor.eat("||") {
        return Some(InlineKind::TableCell);
    }
    let not_table_markup = |b: Option<u8>| !matches!(b, Some(b'}' | b'-' | b'+'));
    if cursor.starts_with("\n|") && not_table_markup(cursor.peek(2)) {
        cursor.advance(2);
        return Some(InlineKind::TableCell);
    }
    if cursor.starts_with("|") && not_table_markup(cursor.peek(1)) {
        cursor.advance(1);
        return Some(InlineKind::TableCell);
    }
    None
}

/// Check whether the inline node `kind` ends at the cursor, consuming its
/// closing delimiter. Cells close without consuming, so the next cell
/// marker is still there for the open pass.
pub(crate) fn close(kind: InlineKind, cursor: &mut Cursor<'_>) -> bool {
    match kind {
        InlineKind::Text => false,
        InlineKind::Emphasis => cursor.eat("''"),
        InlineKind::Strong => cursor.eat("'''"),
        InlineKind::StrongEmphasis => cursor.eat("'''''"),
        InlineKind::Template => cursor.eat("}}"),
        InlineKind::InternalLink | InlineKind::Media => cursor.eat("]]"),
        InlineKind::ExternalLink => cursor.eat("]"),
        InlineKind::TableCell => cursor.starts_with("\n") || cursor.starts_with("||"),
        InlineKind::TableHeader => {
            cursor.starts_with("\n") || cursor.starts_with("||") || cursor.starts_with("!!")
        }
    }
}
