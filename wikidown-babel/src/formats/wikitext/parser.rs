//! Wikitext parsing (wikitext → IR)
//!
//! A single forward scan over the source. At every position the parser runs,
//! in order: the block close pass, the block open pass, the inline open pass
//! and the inline close pass (see `blocks.rs` and `inlines.rs`). When none of
//! them changes the state, one literal character moves into the text buffer.
//! The buffer is flushed into the current node at every state transition, so
//! each run of literal characters becomes exactly one text leaf.

use super::blocks::{self, Closing};
use super::inlines;
use crate::error::FormatError;
use crate::ir::{BlockKind, Document, NodeId, NodeKind};
use log::{debug, trace};

/// Default bound of the literal text buffer, in bytes.
pub const DEFAULT_TEXT_BUFFER_CAPACITY: usize = 8192;

/// Default limit on how far below the root a node may be opened.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Knobs for the wikitext parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// The text buffer is flushed once it holds this many bytes. This only
    /// splits the flushing work; the resulting text leaf is not split.
    pub text_buffer_capacity: usize,
    /// Opening a node deeper than this fails with
    /// [`FormatError::NestingTooDeep`]. Every later pass walks the tree
    /// recursively, so this bounds their stack use.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            text_buffer_capacity: DEFAULT_TEXT_BUFFER_CAPACITY,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse wikitext into a document tree with the default options.
pub fn parse_from_wikitext(source: &str) -> Result<Document, FormatError> {
    parse_with_options(source, &ParseOptions::default())
}

/// Parse wikitext into a document tree.
pub fn parse_with_options(source: &str, options: &ParseOptions) -> Result<Document, FormatError> {
    Parser::new(source, options).run()
}

/// Read position over the source text.
///
/// Markup delimiters are all ASCII, so byte-based advancing over a matched
/// delimiter always lands on a char boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Cursor<'s> {
    pub(crate) fn new(src: &'s str) -> Self {
        Cursor { src, pos: 0 }
    }

    pub(crate) fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    pub(crate) fn remaining(&self) -> usize {
        self.src.len() - self.pos
    }

    pub(crate) fn starts_with(&self, pattern: &str) -> bool {
        self.rest().starts_with(pattern)
    }

    /// Byte at `offset` from the current position.
    pub(crate) fn peek(&self, offset: usize) -> Option<u8> {
        self.rest().as_bytes().get(offset).copied()
    }

    /// Consume `pattern` if the input continues with it.
    pub(crate) fn eat(&mut self, pattern: &str) -> bool {
        if self.starts_with(pattern) {
            self.pos += pattern.len();
            true
        } else {
            false
        }
    }

    /// Length of the run of `marker` at the current position.
    pub(crate) fn run_of(&self, marker: u8) -> usize {
        self.rest().bytes().take_while(|&b| b == marker).count()
    }

    pub(crate) fn advance(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.src.len());
    }

    pub(crate) fn skip_newlines(&mut self) {
        let count = self.run_of(b'\n');
        self.pos += count;
    }

    /// Consume up to and including the next newline, returning the line
    /// without its terminator.
    pub(crate) fn take_line(&mut self) -> &'s str {
        let rest = self.rest();
        let end = rest.find('\n').unwrap_or(rest.len());
        self.pos += end;
        self.eat("\n");
        &rest[..end]
    }

    pub(crate) fn next_char(&self) -> Option<char> {
        self.rest().chars().next()
    }
}

struct Parser<'s> {
    doc: Document,
    cursor: Cursor<'s>,
    current: NodeId,
    buffer: String,
    buffer_capacity: usize,
    max_depth: usize,
    nowiki: bool,
}

impl<'s> Parser<'s> {
    fn new(source: &'s str, options: &ParseOptions) -> Self {
        let doc = Document::new();
        let current = doc.root();
        Parser {
            doc,
            cursor: Cursor::new(source),
            current,
            buffer: String::new(),
            buffer_capacity: options.text_buffer_capacity.max(4),
            max_depth: options.max_depth,
            nowiki: false,
        }
    }

    fn run(mut self) -> Result<Document, FormatError> {
        loop {
            if self.nowiki {
                if self.cursor.eat("</nowiki>") {
                    self.nowiki = false;
                    continue;
                }
                match self.cursor.next_char() {
                    // newlines inside nowiki must not end any block
                    Some('\n') => self.consume_char(' ', 1),
                    Some(ch) => self.consume_char(ch, ch.len_utf8()),
                    None => break,
                }
                continue;
            }

            let closed = self.close_blocks()?;
            let opened = self.open_block()?;
            if closed || opened {
                continue;
            }

            if self.cursor.eat("<nowiki/>") {
                continue;
            }
            if self.cursor.eat("<nowiki>") {
                self.nowiki = true;
                continue;
            }

            let inline_opened = self.open_inlines()?;
            let inline_closed = self.close_inlines();
            if inline_opened || inline_closed {
                continue;
            }

            match self.cursor.next_char() {
                Some(ch) => self.consume_char(ch, ch.len_utf8()),
                None => break,
            }
        }

        self.flush();
        debug!(
            "parsed {} bytes of wikitext into {} nodes",
            self.cursor.src.len(),
            self.doc.len()
        );
        Ok(self.doc)
    }

    fn consume_char(&mut self, ch: char, width: usize) {
        if self.buffer.len() + ch.len_utf8() > self.buffer_capacity {
            self.flush();
        }
        self.buffer.push(ch);
        self.cursor.advance(width);
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.doc.append_text(self.current, &self.buffer);
            self.buffer.clear();
        }
    }

    /// Close every block whose terminator matches at the current position.
    fn close_blocks(&mut self) -> Result<bool, FormatError> {
        let mut changed = false;

        while self.doc.kind(self.current) != NodeKind::Root {
            let block = self.doc.block_ancestor(self.current).ok_or_else(|| {
                FormatError::InvariantViolation(format!(
                    "node {} has no block-level ancestor",
                    self.current.index()
                ))
            })?;
            let kind = match self.doc.kind(block) {
                NodeKind::Block(kind) => kind,
                // inline content left directly under the root, nothing to close
                NodeKind::Root => break,
                NodeKind::Inline(_) => {
                    return Err(FormatError::InvariantViolation(format!(
                        "block ancestor {} is an inline node",
                        block.index()
                    )))
                }
            };

            let current_kind = self.doc.kind(self.current);
            let subtype = self.doc.subtype(block);
            let Some(closing) = blocks::close(kind, subtype, current_kind, &mut self.cursor) else {
                break;
            };
            trace!("closing {} ({closing:?})", self.doc.kind(block).name());

            self.cursor.skip_newlines();
            self.flush();

            let parent = self.parent_of(block)?;
            self.current = match closing {
                Closing::Close => parent,
                Closing::CloseParent => self.parent_of(parent)?,
                Closing::Sibling(sibling) => self.append(parent, NodeKind::Block(sibling), 0)?,
            };
            changed = true;
        }

        Ok(changed)
    }

    fn parent_of(&self, id: NodeId) -> Result<NodeId, FormatError> {
        self.doc.parent(id).ok_or_else(|| {
            FormatError::InvariantViolation(format!(
                "{} node {} has no parent",
                self.doc.kind(id).name(),
                id.index()
            ))
        })
    }

    /// Append a node, refusing to go deeper than `max_depth`.
    fn append(&mut self, parent: NodeId, kind: NodeKind, subtype: usize) -> Result<NodeId, FormatError> {
        if self.doc.depth(parent) >= self.max_depth {
            return Err(FormatError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(self.doc.append(parent, kind, subtype))
    }

    /// Open a new block under the current container, if one starts here.
    fn open_block(&mut self) -> Result<bool, FormatError> {
        if !self.doc.kind(self.current).accepts_block_children() {
            return Ok(false);
        }
        let at_root = self.doc.kind(self.current) == NodeKind::Root;
        if at_root {
            // a stray newline between blocks carries no meaning
            self.cursor.skip_newlines();
        }

        let opening = match self.cursor.remaining() {
            0 => None,
            // too short for any markup opener
            1 => at_root.then(|| blocks::Opening::new(BlockKind::Paragraph)),
            _ => blocks::open(&self.doc, self.current, &mut self.cursor),
        };
        let Some(opening) = opening else {
            return Ok(false);
        };
        trace!("opening {:?} (subtype {})", opening.kind, opening.subtype);

        self.flush();
        let node = self.append(self.current, NodeKind::Block(opening.kind), opening.subtype)?;
        if let Some(text) = opening.text {
            self.doc.append_text(node, text);
        }
        self.current = node;

        if let Some((child, subtype)) = opening.child {
            self.current = self.append(node, NodeKind::Block(child), subtype)?;
        }
        Ok(true)
    }

    fn open_inlines(&mut self) -> Result<bool, FormatError> {
        let mut changed = false;
        while let Some(kind) = inlines::open(self.doc.kind(self.current), &mut self.cursor) {
            self.flush();
            self.current = self.append(self.current, NodeKind::Inline(kind), 0)?;
            changed = true;
        }
        Ok(changed)
    }

    fn close_inlines(&mut self) -> bool {
        let mut changed = false;
        while let NodeKind::Inline(kind) = self.doc.kind(self.current) {
            if !inlines::close(kind, &mut self.cursor) {
                break;
            }
            self.flush();
            match self.doc.parent(self.current) {
                Some(parent) => self.current = parent,
                None => break,
            }
            changed = true;
        }
        changed
    }
}
