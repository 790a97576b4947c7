//! JSON dump of the document tree
//!
//! Each node becomes `{"kind", "subtype", "text", "children"}`; empty fields
//! are omitted. Meant for debugging and for tooling that wants the parsed
//! structure rather than the Markdown rendering.

use crate::error::FormatError;
use crate::format::{unknown_option, Direction, Format};
use crate::ir::{Document, NodeId};
use serde::Serialize;
use std::collections::HashMap;

/// Serializable view of one node and its subtree
#[derive(Debug, Serialize)]
pub struct JsonNode<'a> {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "is_zero")]
    pub subtype: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode<'a>>,
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl<'a> JsonNode<'a> {
    pub fn from_document(doc: &'a Document) -> Self {
        Self::from_node(doc, doc.root())
    }

    fn from_node(doc: &'a Document, id: NodeId) -> Self {
        let node = doc.node(id);
        JsonNode {
            kind: node.kind.name(),
            subtype: node.subtype,
            text: node.text.as_deref(),
            children: node
                .children
                .iter()
                .map(|&child| Self::from_node(doc, child))
                .collect(),
        }
    }
}

pub fn to_json_str(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let view = JsonNode::from_document(doc);
    let json = if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    };
    json.map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}

/// Format implementation for the JSON tree dump
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports(&self, direction: Direction) -> bool {
        direction == Direction::Export
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        to_json_str(doc, true)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut pretty = true;
        for (key, value) in options {
            match key.as_str() {
                "pretty" => pretty = value.to_lowercase() != "false",
                _ => return Err(unknown_option(self.name(), key)),
            }
        }
        to_json_str(doc, pretty)
    }
}
