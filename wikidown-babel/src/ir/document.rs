//! The document arena.
//!
//! Nodes live in a single `Vec` and refer to each other by [`NodeId`]. The
//! arena owns every node, so the whole tree is released in one drop and the
//! parent/sibling links never take part in ownership.

use super::nodes::{Node, NodeId, NodeKind};

/// A parsed wikitext document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document holding only the root node.
    pub fn new() -> Self {
        Document {
            nodes: vec![Node::new(NodeKind::Root, 0)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> NodeKind {
        self.nodes[id.0].kind
    }

    pub fn subtype(&self, id: NodeId) -> usize {
        self.nodes[id.0].subtype
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].next_sibling
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].last_child()
    }

    pub fn depth(&self, id: NodeId) -> usize {
        self.nodes[id.0].depth
    }

    /// Number of nodes in the arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root()).is_empty()
    }

    /// Create a node and make it the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, kind: NodeKind, subtype: usize) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(kind, subtype);
        node.parent = Some(parent);
        node.depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(node);

        if let Some(previous) = self.nodes[parent.0].last_child() {
            self.nodes[previous.0].next_sibling = Some(id);
        }
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Append literal text under `parent`.
    ///
    /// Extends the trailing text leaf when there is one, so a contiguous run
    /// of literal characters always ends up in a single node.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        if text.is_empty() {
            return;
        }
        let leaf = match self.last_child(parent) {
            Some(last) if self.nodes[last.0].is_text() => last,
            _ => self.append(parent, NodeKind::TEXT, 0),
        };
        self.nodes[leaf.0]
            .text
            .get_or_insert_with(String::new)
            .push_str(text);
    }

    /// Text stored on a text leaf, empty for every other node.
    pub fn text(&self, id: NodeId) -> &str {
        self.nodes[id.0].text.as_deref().unwrap_or("")
    }

    /// Nearest block-level node, starting with `id` itself.
    pub fn block_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if self.kind(current).is_block_level() {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    /// Next sibling of `id` that is a table cell or header, skipping stray text.
    pub fn next_cell_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.next_sibling(id);
        while let Some(sibling) = cursor {
            if self.kind(sibling).is_table_cell() {
                return Some(sibling);
            }
            cursor = self.next_sibling(sibling);
        }
        None
    }

    /// Whether any descendant of `id` is an internal or external link.
    pub fn contains_link(&self, id: NodeId) -> bool {
        self.descendants(id).any(|node| self.kind(node).is_link())
    }

    /// Concatenated text of every leaf below `id`.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::from(self.text(id));
        for node in self.descendants(id) {
            out.push_str(self.text(node));
        }
        out
    }

    /// Every node below `id` in document order, `id` itself excluded.
    ///
    /// Walks with an explicit stack, so arbitrarily deep trees are fine.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev());
            Some(next)
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
