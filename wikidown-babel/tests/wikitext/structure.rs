use wikidown_babel::ir::{BlockKind, InlineKind, NodeId, NodeKind};
use wikidown_babel::{Document, FormatRegistry};

fn parse(source: &str) -> Document {
    FormatRegistry::with_defaults()
        .parse(source, "wikitext")
        .unwrap()
}

fn kinds(doc: &Document, id: NodeId) -> Vec<NodeKind> {
    doc.children(id).iter().map(|&c| doc.kind(c)).collect()
}

/// Walking down from the root reaches every node once, and each child
/// points back at the node that lists it.
fn assert_tree_consistent(doc: &Document) {
    let mut seen = 0;
    let mut stack = vec![doc.root()];
    while let Some(id) = stack.pop() {
        seen += 1;
        for &child in doc.children(id) {
            assert_eq!(doc.parent(child), Some(id));
            stack.push(child);
        }
    }
    assert_eq!(seen, doc.len());
}

#[test]
fn test_top_level_blocks_in_order() {
    let doc = parse("== H ==\nText\n----\n* a\n\n# b\n\n; t\n\n {{T}}");
    assert_eq!(
        kinds(&doc, doc.root()),
        vec![
            NodeKind::Block(BlockKind::Heading),
            NodeKind::Block(BlockKind::Paragraph),
            NodeKind::Block(BlockKind::HorizontalRule),
            NodeKind::Block(BlockKind::BulletList),
            NodeKind::Block(BlockKind::NumberedList),
            NodeKind::Block(BlockKind::DefinitionList),
            NodeKind::Block(BlockKind::Preformatted),
        ]
    );
    assert_tree_consistent(&doc);
}

#[test]
fn test_list_items_record_depth() {
    let doc = parse("* a\n*** c");
    let list = doc.children(doc.root())[0];
    let depths: Vec<usize> = doc.children(list).iter().map(|&i| doc.subtype(i)).collect();
    assert_eq!(depths, vec![1, 3]);
}

#[test]
fn test_table_rows_and_cells() {
    let doc = parse("{|\n! A !! B\n|-\n| 1 || 2\n|}");
    let table = doc.children(doc.root())[0];
    assert_eq!(
        kinds(&doc, table),
        vec![
            NodeKind::Block(BlockKind::TableRow),
            NodeKind::Block(BlockKind::TableRow),
        ]
    );
    let header = doc.children(table)[0];
    assert_eq!(
        kinds(&doc, header),
        vec![
            NodeKind::Inline(InlineKind::TableHeader),
            NodeKind::Inline(InlineKind::TableHeader),
        ]
    );
    let body = doc.children(table)[1];
    assert_eq!(
        kinds(&doc, body),
        vec![
            NodeKind::Inline(InlineKind::TableCell),
            NodeKind::Inline(InlineKind::TableCell),
        ]
    );
    assert_tree_consistent(&doc);
}

#[test]
fn test_media_keeps_file_prefix_in_definition() {
    let doc = parse("[[File:a.png|cap]]");
    let para = doc.children(doc.root())[0];
    let media = doc.children(para)[0];
    assert_eq!(doc.kind(media), NodeKind::Inline(InlineKind::Media));
    assert_eq!(doc.text_content(media), "File:a.png|cap");
}

#[test]
fn test_link_inside_image_caption_is_nested() {
    let doc = parse("[[File:map.png|See [[Atlas]]]]");
    let para = doc.children(doc.root())[0];
    let media = doc.children(para)[0];
    assert!(doc.contains_link(media));
    assert_tree_consistent(&doc);
}
