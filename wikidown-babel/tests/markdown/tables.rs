//! Tables

use super::{collect_text, convert, to_comrak_ast};
use comrak::nodes::NodeValue;
use comrak::Arena;

const TABLE: &str = "{| class=\"wikitable\"\n|+ Caption\n|-\n! A !! B\n|-\n| 1 || 2\n|}";

#[test]
fn test_table_with_header_and_caption() {
    assert_eq!(
        convert(TABLE),
        "**Caption**\n\n| A | B |\n| --- | --- |\n| 1 | 2 |\n\n"
    );
}

#[test]
fn test_table_without_header_gets_empty_header_row() {
    assert_eq!(
        convert("{|\n| a || b\n|}"),
        "|  |  |\n| --- | --- |\n| a | b |\n\n"
    );
}

#[test]
fn test_cells_on_separate_lines() {
    assert_eq!(
        convert("{|\n|-\n| a\n| b\n|}"),
        "|  |  |\n| --- | --- |\n| a | b |\n\n"
    );
}

#[test]
fn test_pipes_in_cells_are_escaped() {
    assert_eq!(
        convert("{|\n! A\n|-\n| x<nowiki>|</nowiki>y\n|}"),
        "| A |\n| --- |\n| x\\|y |\n\n"
    );
}

#[test]
fn test_caption_only_table() {
    assert_eq!(
        convert("{|\n|+ Just a caption\n|}"),
        "**Just a caption**\n\n"
    );
}

#[test]
fn test_caption_then_header_without_body() {
    assert_eq!(
        convert("{|\n|+ Caption\n! A\n|}"),
        "**Caption**\n\n| A |\n| --- |\n\n"
    );
}

#[test]
fn test_table_attributes_are_dropped() {
    assert_eq!(
        convert("{| class=\"wikitable\" style=\"width:100%\"\n! H\n|}"),
        "| H |\n| --- |\n\n"
    );
}

#[test]
fn test_table_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast(TABLE, &arena);

    let table = root
        .children()
        .find(|c| matches!(c.data.borrow().value, NodeValue::Table(_)))
        .expect("table node");
    let rows: Vec<_> = table.children().collect();
    assert_eq!(rows.len(), 2);
    assert!(matches!(rows[0].data.borrow().value, NodeValue::TableRow(true)));
    assert_eq!(collect_text(rows[0]), "AB");
    assert_eq!(collect_text(rows[1]), "12");
}
