//! Node kinds and the node record stored in the document arena.

/// Index of a node inside its [`Document`](super::Document) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Block-level node kinds. Each occupies its own region of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    /// `subtype` holds the level, 1 to 6.
    Heading,
    HorizontalRule,
    /// A `{{...}}` template standing on its own block.
    Template,
    BulletList,
    /// `subtype` holds the nesting depth.
    BulletListItem,
    NumberedList,
    /// `subtype` holds the nesting depth.
    NumberedListItem,
    DefinitionList,
    DefinitionTerm,
    DefinitionDescription,
    Preformatted,
    Gallery,
    GalleryItem,
    Table,
    TableCaption,
    TableRow,
}

/// Inline node kinds, found in the flow of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineKind {
    Text,
    Emphasis,
    Strong,
    StrongEmphasis,
    /// A `{{...}}` template inside running text.
    Template,
    InternalLink,
    ExternalLink,
    Media,
    TableHeader,
    TableCell,
}

/// Type tag of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Block(BlockKind),
    Inline(InlineKind),
}

impl NodeKind {
    pub const TEXT: NodeKind = NodeKind::Inline(InlineKind::Text);

    /// Root and every block kind are block-level; inline kinds are not.
    pub fn is_block_level(self) -> bool {
        !matches!(self, NodeKind::Inline(_))
    }

    /// Whether the block-open pass may fire while a node of this kind is current.
    pub fn accepts_block_children(self) -> bool {
        matches!(
            self,
            NodeKind::Root
                | NodeKind::Block(
                    BlockKind::BulletList
                        | BlockKind::NumberedList
                        | BlockKind::DefinitionList
                        | BlockKind::Gallery
                        | BlockKind::Table
                )
        )
    }

    /// Emphasis, strong and strong-and-emphasis never nest within each other.
    pub fn is_emphasis_family(self) -> bool {
        matches!(
            self,
            NodeKind::Inline(InlineKind::Emphasis | InlineKind::Strong | InlineKind::StrongEmphasis)
        )
    }

    pub fn is_link(self) -> bool {
        matches!(
            self,
            NodeKind::Inline(InlineKind::InternalLink | InlineKind::ExternalLink)
        )
    }

    pub fn is_table_cell(self) -> bool {
        matches!(
            self,
            NodeKind::Inline(InlineKind::TableHeader | InlineKind::TableCell)
        )
    }

    /// Stable display name, used by the debug formats.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Root => "Root",
            NodeKind::Block(kind) => match kind {
                BlockKind::Paragraph => "Paragraph",
                BlockKind::Heading => "Heading",
                BlockKind::HorizontalRule => "HorizontalRule",
                BlockKind::Template => "BlockTemplate",
                BlockKind::BulletList => "BulletList",
                BlockKind::BulletListItem => "BulletListItem",
                BlockKind::NumberedList => "NumberedList",
                BlockKind::NumberedListItem => "NumberedListItem",
                BlockKind::DefinitionList => "DefinitionList",
                BlockKind::DefinitionTerm => "DefinitionTerm",
                BlockKind::DefinitionDescription => "DefinitionDescription",
                BlockKind::Preformatted => "Preformatted",
                BlockKind::Gallery => "Gallery",
                BlockKind::GalleryItem => "GalleryItem",
                BlockKind::Table => "Table",
                BlockKind::TableCaption => "TableCaption",
                BlockKind::TableRow => "TableRow",
            },
            NodeKind::Inline(kind) => match kind {
                InlineKind::Text => "Text",
                InlineKind::Emphasis => "Emphasis",
                InlineKind::Strong => "Strong",
                InlineKind::StrongEmphasis => "StrongEmphasis",
                InlineKind::Template => "InlineTemplate",
                InlineKind::InternalLink => "InternalLink",
                InlineKind::ExternalLink => "ExternalLink",
                InlineKind::Media => "Media",
                InlineKind::TableHeader => "TableHeader",
                InlineKind::TableCell => "TableCell",
            },
        }
    }
}

/// A single node of the document tree.
///
/// Children are owned through the arena; `parent` and `next_sibling` are
/// traversal links only.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    /// Heading level or list depth; 0 for kinds without a numeric parameter.
    pub subtype: usize,
    /// Only present on text leaves.
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
    /// Distance from the root, which sits at 0.
    pub depth: usize,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, subtype: usize) -> Self {
        Node {
            kind,
            subtype,
            text: None,
            children: Vec::new(),
            parent: None,
            next_sibling: None,
            depth: 0,
        }
    }

    pub fn is_block_level(&self) -> bool {
        self.kind.is_block_level()
    }

    pub fn accepts_block_children(&self) -> bool {
        self.kind.accepts_block_children()
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::TEXT
    }

    pub fn last_child(&self) -> Option<NodeId> {
        self.children.last().copied()
    }
}
