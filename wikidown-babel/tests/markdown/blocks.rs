//! Preformatted text, rules, block templates and galleries

use super::{convert, to_comrak_ast};
use comrak::nodes::NodeValue;
use comrak::Arena;

#[test]
fn test_preformatted_strips_leading_space() {
    assert_eq!(
        convert(" code line\n more\nafter"),
        "<pre>\ncode line\nmore\n</pre>\n\nafter\n\n"
    );
}

#[test]
fn test_horizontal_rule_between_paragraphs() {
    assert_eq!(convert("a\n----\nb"), "a\n\n---\n\nb\n\n");
}

#[test]
fn test_horizontal_rule_keeps_stray_text() {
    assert_eq!(convert("------ tail"), "---\n\ntail\n\n");
}

#[test]
fn test_block_template_is_kept_verbatim() {
    assert_eq!(
        convert("{{Infobox|name=X}}\nText"),
        "<pre>{{Infobox|name=X}}</pre>\n\nText\n\n"
    );
}

#[test]
fn test_template_on_own_line_ends_paragraph() {
    assert_eq!(
        convert("Intro\n{{Navbox}}\nOutro"),
        "Intro\n\n<pre>{{Navbox}}</pre>\n\nOutro\n\n"
    );
}

#[test]
fn test_gallery_items_resolve_as_media() {
    assert_eq!(
        convert("<gallery>\nFile:a.png|Alpha\nFile:b.pdf|Beta\n</gallery>"),
        "![Alpha](File:a.png)\n[Beta](File:b.pdf)\n\n"
    );
}

#[test]
fn test_gallery_with_attributes() {
    assert_eq!(
        convert("<gallery mode=\"packed\">\nFile:a.png\n</gallery>"),
        "![File:a.png](File:a.png)\n\n"
    );
}

#[test]
fn test_horizontal_rule_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("a\n----\nb", &arena);

    let kinds: Vec<&str> = root
        .children()
        .map(|c| match c.data.borrow().value {
            NodeValue::Paragraph => "p",
            NodeValue::ThematicBreak => "hr",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["p", "hr", "p"]);
}
