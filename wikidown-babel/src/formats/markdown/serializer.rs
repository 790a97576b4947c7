//! Markdown serialization (wikitext tree → Markdown export)
//!
//! A single recursive walk. Root concatenates its children; every other node
//! dispatches on its block or inline kind and wraps its children in that
//! kind's delimiters. Content that has to be trimmed or re-split first (list
//! items, headings, links) is rendered into a scratch buffer and then written
//! to the output in one piece.

use super::output::{Output, DEFAULT_LINK_CAPACITY, DEFAULT_OUTPUT_CAPACITY};
use crate::common::links::{escape_destination, is_image, split_external, split_internal};
use crate::error::FormatError;
use crate::ir::{BlockKind, Document, InlineKind, NodeId, NodeKind};
use log::{debug, warn};

/// Capacity limits for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Hard cap of the rendered document, in bytes.
    pub output_capacity: usize,
    /// Hard cap of a single link definition, in bytes.
    pub link_capacity: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            output_capacity: DEFAULT_OUTPUT_CAPACITY,
            link_capacity: DEFAULT_LINK_CAPACITY,
        }
    }
}

/// Serialize a document to Markdown with the default limits
pub fn serialize_to_markdown(doc: &Document) -> Result<String, FormatError> {
    serialize_with_options(doc, &RenderOptions::default())
}

/// Serialize a document to Markdown
pub fn serialize_with_options(
    doc: &Document,
    options: &RenderOptions,
) -> Result<String, FormatError> {
    let mut out = Output::new(options.output_capacity);
    render_into(doc, options, &mut out)?;
    debug!("rendered {} bytes of markdown", out.len());
    Ok(out.into_string())
}

/// Render a document into a caller-provided buffer.
///
/// Scratch buffers are bounded by `options`, the final text by `out`'s own
/// capacity. On error `out` holds the output of every fully rendered node
/// written before the failing write.
pub fn render_into(
    doc: &Document,
    options: &RenderOptions,
    out: &mut Output,
) -> Result<(), FormatError> {
    Renderer { doc, options }.render(doc.root(), out)
}

struct Renderer<'d> {
    doc: &'d Document,
    options: &'d RenderOptions,
}

impl Renderer<'_> {
    fn render(&self, id: NodeId, out: &mut Output) -> Result<(), FormatError> {
        match self.doc.kind(id) {
            NodeKind::Root => self.render_children(id, out),
            NodeKind::Block(kind) => self.render_block(kind, id, out),
            NodeKind::Inline(kind) => self.render_inline(kind, id, out),
        }
    }

    fn render_children(&self, id: NodeId, out: &mut Output) -> Result<(), FormatError> {
        for &child in self.doc.children(id) {
            self.render(child, out)?;
        }
        Ok(())
    }

    /// Children rendered into a scratch buffer.
    fn scratch(&self, id: NodeId) -> Result<String, FormatError> {
        let mut scratch = Output::new(self.options.output_capacity);
        self.render_children(id, &mut scratch)?;
        Ok(scratch.into_string())
    }

    fn trimmed(&self, id: NodeId) -> Result<String, FormatError> {
        Ok(self.scratch(id)?.trim().to_string())
    }

    fn render_block(&self, kind: BlockKind, id: NodeId, out: &mut Output) -> Result<(), FormatError> {
        match kind {
            BlockKind::Paragraph => {
                let content = self.trimmed(id)?;
                if content.is_empty() {
                    return Ok(());
                }
                out.write(&format!("{content}\n\n"))
            }
            BlockKind::Heading => {
                let level = self.doc.subtype(id).clamp(1, 6);
                let content = self.trimmed(id)?;
                out.write(&format!("{} {content}\n\n", "#".repeat(level)))
            }
            BlockKind::HorizontalRule => {
                out.write("---\n\n")?;
                let stray = self.trimmed(id)?;
                if stray.is_empty() {
                    Ok(())
                } else {
                    out.write(&format!("{stray}\n\n"))
                }
            }
            BlockKind::Template => {
                let content = self.scratch(id)?;
                out.write(&format!("<pre>{{{{{content}}}}}</pre>\n\n"))
            }
            BlockKind::BulletList | BlockKind::NumberedList => {
                self.render_children(id, out)?;
                out.write("\n")
            }
            BlockKind::BulletListItem => {
                let indent = "  ".repeat(self.doc.subtype(id).saturating_sub(1));
                let content = self.trimmed(id)?;
                out.write(&format!("{indent}* {content}\n"))
            }
            BlockKind::NumberedListItem => {
                let indent = "   ".repeat(self.doc.subtype(id).saturating_sub(1));
                let content = self.trimmed(id)?;
                out.write(&format!("{indent}1. {content}\n"))
            }
            BlockKind::DefinitionList => {
                out.write("<dl>\n")?;
                self.render_children(id, out)?;
                out.write("</dl>\n\n")
            }
            BlockKind::DefinitionTerm => {
                let content = self.trimmed(id)?;
                out.write(&format!("<dt>{content}</dt>\n"))
            }
            BlockKind::DefinitionDescription => {
                let content = self.trimmed(id)?;
                out.write(&format!("<dd>{content}</dd>\n"))
            }
            BlockKind::Preformatted => {
                let content = self.scratch(id)?.replace("\n ", "\n");
                out.write(&format!("<pre>\n{content}\n</pre>\n\n"))
            }
            BlockKind::Gallery => {
                self.render_children(id, out)?;
                out.write("\n")
            }
            BlockKind::GalleryItem => {
                if let Some(link) = self.resolve_link(InlineKind::Media, id)? {
                    out.write(&format!("{link}\n"))?;
                }
                Ok(())
            }
            BlockKind::Table => self.render_table(id, out),
            BlockKind::TableCaption => {
                let content = self.trimmed(id)?;
                out.write(&format!("**{content}**\n\n"))
            }
            BlockKind::TableRow => self.render_row(id, out),
        }
    }

    fn render_inline(&self, kind: InlineKind, id: NodeId, out: &mut Output) -> Result<(), FormatError> {
        match kind {
            InlineKind::Text => out.write(self.doc.text(id)),
            InlineKind::Emphasis => self.wrap(id, "_", "_", out),
            InlineKind::Strong => self.wrap(id, "**", "**", out),
            InlineKind::StrongEmphasis => self.wrap(id, "**_", "_**", out),
            InlineKind::Template => self.wrap(id, "<code>{{", "}}</code>", out),
            InlineKind::InternalLink | InlineKind::ExternalLink | InlineKind::Media => {
                if let Some(link) = self.resolve_link(kind, id)? {
                    out.write(&link)?;
                }
                Ok(())
            }
            InlineKind::TableHeader | InlineKind::TableCell => {
                let content = self.trimmed(id)?.replace('|', "\\|");
                let separator = if self.doc.next_cell_sibling(id).is_some() {
                    " | "
                } else {
                    " |"
                };
                out.write(&format!("{content}{separator}"))
            }
        }
    }

    fn wrap(&self, id: NodeId, open: &str, close: &str, out: &mut Output) -> Result<(), FormatError> {
        out.write(open)?;
        self.render_children(id, out)?;
        out.write(close)
    }

    /// Build the Markdown for a link node, or `None` when its definition is
    /// empty.
    fn resolve_link(&self, kind: InlineKind, id: NodeId) -> Result<Option<String>, FormatError> {
        let mut scratch = Output::new(self.options.link_capacity);
        self.render_children(id, &mut scratch)?;
        let definition = scratch.as_str();
        if definition.trim().is_empty() {
            warn!(
                "empty {} definition at node {}, skipped",
                NodeKind::Inline(kind).name(),
                id.index()
            );
            return Ok(None);
        }

        let link = match kind {
            InlineKind::ExternalLink => {
                let parts = split_external(definition);
                format!("[{}]({})", parts.label, escape_destination(parts.target))
            }
            InlineKind::Media => {
                let parts = split_internal(definition);
                let destination = escape_destination(parts.target);
                if !is_image(parts.target) {
                    format!("[{}]({destination})", parts.label)
                } else if self.doc.contains_link(id) {
                    // a link inside alt text does not render, so the label moves below
                    format!("![{}]({destination})\n\n**{}**", parts.target, parts.label)
                } else {
                    format!("![{}]({destination})", parts.label)
                }
            }
            _ => {
                let parts = split_internal(definition);
                format!("[{}]({}.md)", parts.label, escape_destination(parts.target))
            }
        };
        Ok(Some(link))
    }

    fn cells(&self, row: NodeId) -> Vec<NodeId> {
        self.doc
            .children(row)
            .iter()
            .copied()
            .filter(|&c| self.doc.kind(c).is_table_cell())
            .collect()
    }

    fn render_row(&self, row: NodeId, out: &mut Output) -> Result<(), FormatError> {
        if self.cells(row).is_empty() {
            return Ok(());
        }
        out.write("| ")?;
        for cell in self.cells(row) {
            self.render(cell, out)?;
        }
        out.write("\n")
    }

    /// Rows in order, with the `| --- |` rule after the first one. A first row
    /// without header cells gets an empty header row in front of it, since
    /// Markdown tables cannot start with a body row.
    fn render_table(&self, table: NodeId, out: &mut Output) -> Result<(), FormatError> {
        let mut has_body = false;

        for &child in self.doc.children(table) {
            match self.doc.kind(child) {
                NodeKind::Block(BlockKind::TableCaption) => self.render(child, out)?,
                NodeKind::Block(BlockKind::TableRow) => {
                    let cells = self.cells(child);
                    if cells.is_empty() {
                        continue;
                    }
                    if has_body {
                        self.render_row(child, out)?;
                        continue;
                    }
                    let columns = cells.len();
                    let rule = format!("|{}\n", " --- |".repeat(columns));
                    let is_header = cells
                        .iter()
                        .any(|&c| self.doc.kind(c) == NodeKind::Inline(InlineKind::TableHeader));
                    if is_header {
                        self.render_row(child, out)?;
                        out.write(&rule)?;
                    } else {
                        out.write(&format!("|{}\n", "  |".repeat(columns)))?;
                        out.write(&rule)?;
                        self.render_row(child, out)?;
                    }
                    has_body = true;
                }
                // table attributes and stray text
                _ => {}
            }
        }

        if has_body {
            out.write("\n")?;
        }
        Ok(())
    }
}
