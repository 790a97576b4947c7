//! Internal, external and media links

use super::{collect_text, convert, to_comrak_ast};
use comrak::nodes::NodeValue;
use comrak::Arena;
use std::collections::HashMap;
use wikidown_babel::{FormatError, FormatRegistry};

#[test]
fn test_internal_link_targets_markdown_file() {
    assert_eq!(convert("[[Page]]"), "[Page](Page.md)\n\n");
    assert_eq!(convert("[[Page|Label]]"), "[Label](Page.md)\n\n");
    assert_eq!(
        convert("See [[Main Page|home]] now."),
        "See [home](Main Page.md) now.\n\n"
    );
}

#[test]
fn test_parentheses_in_destination_are_escaped() {
    assert_eq!(
        convert("[[Foo (bar)|Foo]]"),
        "[Foo](Foo %28bar%29.md)\n\n"
    );
    assert_eq!(
        convert("[https://example.com/a_(b) site]"),
        "[site](https://example.com/a_%28b%29)\n\n"
    );
}

#[test]
fn test_external_link_without_label_uses_url() {
    assert_eq!(
        convert("[https://example.com]"),
        "[https://example.com](https://example.com)\n\n"
    );
}

#[test]
fn test_media_drops_options_and_keeps_caption() {
    assert_eq!(
        convert("[[File:cat.png|thumb|A cat]]"),
        "![A cat](File:cat.png)\n\n"
    );
    assert_eq!(convert("[[Image:x.JPG|Pic]]"), "![Pic](Image:x.JPG)\n\n");
}

#[test]
fn test_media_without_image_extension_is_a_plain_link() {
    assert_eq!(
        convert("[[File:report.pdf|Report]]"),
        "[Report](File:report.pdf)\n\n"
    );
}

#[test]
fn test_empty_link_is_skipped() {
    assert_eq!(convert("a [[]] b"), "a  b\n\n");
    assert_eq!(convert("a [] b"), "a  b\n\n");
}

#[test]
fn test_external_link_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("Visit [https://example.com/x Example] today", &arena);

    let mut links = Vec::new();
    for node in root.descendants() {
        if let NodeValue::Link(link) = &node.data.borrow().value {
            links.push((link.url.clone(), collect_text(node)));
        }
    }
    assert_eq!(
        links,
        vec![("https://example.com/x".to_string(), "Example".to_string())]
    );
}

#[test]
fn test_image_in_comrak_ast() {
    let arena = Arena::new();
    let root = to_comrak_ast("[[File:cat.png|A cat]]", &arena);

    let images: Vec<String> = root
        .descendants()
        .filter_map(|node| match &node.data.borrow().value {
            NodeValue::Image(link) => Some(link.url.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(images, vec!["File:cat.png".to_string()]);
}

#[test]
fn test_link_capacity_option_through_registry() {
    let registry = FormatRegistry::with_defaults();
    let doc = registry.parse("[[A rather long target]]", "wikitext").unwrap();

    let mut options = HashMap::new();
    options.insert("link-capacity".to_string(), "4".to_string());
    assert_eq!(
        registry.serialize_with_options(&doc, "markdown", &options),
        Err(FormatError::CapacityExhausted { capacity: 4 })
    );

    options.insert("link-capacity".to_string(), "64".to_string());
    assert_eq!(
        registry.serialize_with_options(&doc, "markdown", &options),
        Ok("[A rather long target](A rather long target.md)\n\n".to_string())
    );
}
