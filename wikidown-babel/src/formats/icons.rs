//! Icon mapping for the treeviz format

use crate::ir::{BlockKind, InlineKind, NodeKind};

/// Get the Unicode icon for a node kind
///
/// Returns a single Unicode character that visually represents the node kind,
/// for quick visual identification in tree dumps.
pub fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Root => "⧉",
        NodeKind::Block(kind) => match kind {
            BlockKind::Paragraph => "¶",
            BlockKind::Heading => "§",
            BlockKind::HorizontalRule => "⎯",
            BlockKind::Template => "⦃",
            BlockKind::BulletList | BlockKind::NumberedList => "☰",
            BlockKind::BulletListItem | BlockKind::NumberedListItem => "•",
            BlockKind::DefinitionList => "≔",
            BlockKind::DefinitionTerm => "⊤",
            BlockKind::DefinitionDescription => "➔",
            BlockKind::Preformatted => "𝒱",
            BlockKind::Gallery => "▦",
            BlockKind::GalleryItem => "▫",
            BlockKind::Table => "⊞",
            BlockKind::TableCaption => "⊤",
            BlockKind::TableRow => "↵",
        },
        NodeKind::Inline(kind) => match kind {
            InlineKind::Text => "◦",
            InlineKind::Emphasis => "𝐼",
            InlineKind::Strong => "𝐁",
            InlineKind::StrongEmphasis => "𝑩",
            InlineKind::Template => "ƒ",
            InlineKind::InternalLink => "#",
            InlineKind::ExternalLink => "⊕",
            InlineKind::Media => "▫",
            InlineKind::TableHeader => "◫",
            InlineKind::TableCell => "□",
        },
    }
}
