//! Heading levels and heading boundaries

use super::{collect_text, convert, to_comrak_ast};
use comrak::nodes::NodeValue;
use comrak::Arena;

#[test]
fn test_heading_level_is_marker_run_minus_one() {
    assert_eq!(convert("== Two =="), "# Two\n\n");
    assert_eq!(convert("=== Three ==="), "## Three\n\n");
    assert_eq!(convert("====== Six ======"), "##### Six\n\n");
}

#[test]
fn test_heading_level_is_capped_at_six() {
    assert_eq!(convert("======= Deep ======="), "###### Deep\n\n");
}

#[test]
fn test_heading_drops_rest_of_line_after_closing_marks() {
    assert_eq!(convert("== A == trailing\nBody"), "# A\n\nBody\n\n");
}

#[test]
fn test_unbalanced_closing_marks_stay_in_text() {
    assert_eq!(convert("==== Mismatched =="), "### Mismatched ==\n\n");
}

#[test]
fn test_heading_ends_paragraph() {
    assert_eq!(convert("Text\n== H =="), "Text\n\n# H\n\n");
}

#[test]
fn test_heading_with_inline_markup() {
    assert_eq!(convert("== ''A'' and [[B]] =="), "# _A_ and [B](B.md)\n\n");
}

#[test]
fn test_heading_levels_in_comrak_ast() {
    let src = "== One ==\n=== Two ===\n==== Three ====\nBody";

    let arena = Arena::new();
    let root = to_comrak_ast(src, &arena);

    let mut headings = Vec::new();
    for child in root.children() {
        if let NodeValue::Heading(heading) = &child.data.borrow().value {
            headings.push((heading.level, collect_text(child)));
        }
    }
    assert_eq!(
        headings,
        vec![
            (1, "One".to_string()),
            (2, "Two".to_string()),
            (3, "Three".to_string()),
        ]
    );
}
