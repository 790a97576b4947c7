//! Bullet, numbered and definition lists

use super::{collect_text, convert, to_comrak_ast};
use comrak::nodes::{ListType, NodeValue};
use comrak::Arena;

#[test]
fn test_bullet_list() {
    assert_eq!(convert("* a\n* b"), "* a\n* b\n\n");
}

#[test]
fn test_nested_bullets_indent_two_spaces_per_level() {
    assert_eq!(convert("* a\n** b\n* c"), "* a\n  * b\n* c\n\n");
}

#[test]
fn test_nested_numbers_indent_three_spaces_per_level() {
    assert_eq!(
        convert("# one\n## two\n# three"),
        "1. one\n   1. two\n1. three\n\n"
    );
}

#[test]
fn test_blank_line_ends_list() {
    assert_eq!(convert("* a\n\nafter"), "* a\n\nafter\n\n");
}

#[test]
fn test_paragraph_ends_before_list() {
    assert_eq!(convert("Intro\n* a"), "Intro\n\n* a\n\n");
}

#[test]
fn test_definition_list() {
    assert_eq!(
        convert("; Term\n: Definition\n\nAfter"),
        "<dl>\n<dt>Term</dt>\n<dd>Definition</dd>\n</dl>\n\nAfter\n\n"
    );
}

#[test]
fn test_indent_run_is_a_single_description() {
    assert_eq!(convert(":: indented"), "<dl>\n<dd>indented</dd>\n</dl>\n\n");
}

#[test]
fn test_nested_list_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("* a\n** b\n* c", &arena);

    let list = root.first_child().expect("list");
    assert!(matches!(
        &list.data.borrow().value,
        NodeValue::List(l) if matches!(l.list_type, ListType::Bullet)
    ));
    let items: Vec<_> = list.children().collect();
    assert_eq!(items.len(), 2);

    let nested = items[0]
        .children()
        .find(|c| matches!(c.data.borrow().value, NodeValue::List(_)))
        .expect("nested list under the first item");
    assert_eq!(collect_text(nested), "b");
    assert_eq!(collect_text(items[1]), "c");
}

#[test]
fn test_numbered_list_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("# one\n# two\n# three", &arena);

    let list = root.first_child().expect("list");
    assert!(matches!(
        &list.data.borrow().value,
        NodeValue::List(l) if matches!(l.list_type, ListType::Ordered)
    ));
    assert_eq!(list.children().count(), 3);
}
