//! Emphasis, templates and nowiki

use super::{convert, to_comrak_ast};
use comrak::nodes::NodeValue;
use comrak::Arena;

#[test]
fn test_emphasis_family() {
    assert_eq!(convert("''it''"), "_it_\n\n");
    assert_eq!(convert("'''bold'''"), "**bold**\n\n");
    assert_eq!(convert("'''''both'''''"), "**_both_**\n\n");
}

#[test]
fn test_emphasis_does_not_nest() {
    assert_eq!(
        convert("'''bold ''inner'' bold'''"),
        "**bold ''inner'' bold**\n\n"
    );
}

#[test]
fn test_unterminated_emphasis_closes_at_end_of_input() {
    assert_eq!(convert("''open"), "_open_\n\n");
}

#[test]
fn test_inline_template_is_kept_as_code() {
    assert_eq!(
        convert("See {{cite|x}} here"),
        "See <code>{{cite|x}}</code> here\n\n"
    );
}

#[test]
fn test_nowiki_content_is_literal() {
    assert_eq!(
        convert("<nowiki>''not'' [[x]]</nowiki> text"),
        "''not'' [[x]] text\n\n"
    );
}

#[test]
fn test_nowiki_newlines_become_spaces() {
    assert_eq!(convert("<nowiki>a\nb</nowiki>"), "a b\n\n");
}

#[test]
fn test_self_closing_nowiki_is_dropped() {
    assert_eq!(convert("a<nowiki/>''b''"), "a_b_\n\n");
}

#[test]
fn test_multibyte_text_survives() {
    assert_eq!(convert("Größe ''ü'' → 日本"), "Größe _ü_ → 日本\n\n");
}

#[test]
fn test_emphasis_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("''a'' and '''b'''", &arena);

    let mut emph = 0;
    let mut strong = 0;
    for node in root.descendants() {
        match node.data.borrow().value {
            NodeValue::Emph => emph += 1,
            NodeValue::Strong => strong += 1,
            _ => {}
        }
    }
    assert_eq!((emph, strong), (1, 1));
}
