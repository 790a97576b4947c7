//! Whole-page conversions

use super::convert;
use insta::assert_snapshot;
use wikidown_babel::formats::markdown::serializer::serialize_to_markdown;
use wikidown_babel::formats::wikitext::parser::parse_with_options;
use wikidown_babel::formats::wikitext::DEFAULT_MAX_DEPTH;
use wikidown_babel::formats::ParseOptions;
use wikidown_babel::FormatError;

const PAGE: &str = r#"== History ==
The '''city''' was founded in [[1850]].

=== Timeline ===
* [[1850]]: founded
* 1900: ''expanded''
** Harbour built

{| class="wikitable"
! Year !! Event
|-
| 1850 || Founded
|}

See also [https://example.org the archive].
"#;

#[test]
fn test_history_page() {
    assert_snapshot!(convert(PAGE), @r###"
# History

The **city** was founded in [1850](1850.md).

## Timeline

* [1850](1850.md): founded
* 1900: _expanded_
  * Harbour built

| Year | Event |
| --- | --- |
| 1850 | Founded |

See also [the archive](https://example.org).
"###);
}

#[test]
fn test_text_buffer_capacity_does_not_change_output() {
    let small = ParseOptions {
        text_buffer_capacity: 4,
        ..ParseOptions::default()
    };
    let doc = parse_with_options(PAGE, &small).unwrap();
    assert_eq!(serialize_to_markdown(&doc).unwrap(), convert(PAGE));
}

#[test]
fn test_deeply_nested_markup_is_an_error() {
    assert_eq!(
        wikidown_babel::convert(&"[[".repeat(50_000)),
        Err(FormatError::NestingTooDeep {
            limit: DEFAULT_MAX_DEPTH
        })
    );
}

#[test]
fn test_nesting_up_to_the_limit_renders() {
    let source = format!("{}x{}", "[[".repeat(40), "]]".repeat(40));
    assert!(wikidown_babel::convert(&source).is_ok());
}

#[test]
fn test_trailing_single_character_paragraph() {
    assert_eq!(convert("x\n\ny"), "x\n\ny\n\n");
    assert_eq!(convert("== A ==\nb"), "# A\n\nb\n\n");
}

#[test]
fn test_empty_input_renders_nothing() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n\n"), "");
}
