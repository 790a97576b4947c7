//! Bounded output
//!
//! Rendering into an output that is too small must fail cleanly: the error
//! names the exhausted capacity and nothing is written past it. An output of
//! exactly the rendered size must succeed.

use proptest::prelude::*;
use wikidown_babel::formats::markdown::serializer::{render_into, serialize_with_options};
use wikidown_babel::formats::markdown::Output;
use wikidown_babel::formats::wikitext::parser::parse_from_wikitext;
use wikidown_babel::formats::RenderOptions;
use wikidown_babel::FormatError;

const PAGE: &str = "== Title ==\n\nSome '''bold''' text with [[Link|a link]].\n\n* one\n* two\n\n{|\n! A !! B\n|-\n| 1 || 2\n|}";

fn assert_bounded(source: &str) -> Result<(), TestCaseError> {
    let doc = parse_from_wikitext(source).unwrap();
    let options = RenderOptions::default();
    let full = serialize_with_options(&doc, &options).unwrap();

    for capacity in 0..full.len() {
        let mut out = Output::new(capacity);
        let result = render_into(&doc, &options, &mut out);
        prop_assert_eq!(result, Err(FormatError::CapacityExhausted { capacity }));
        prop_assert!(out.len() <= capacity);
        prop_assert!(full.starts_with(out.as_str()));
    }

    let mut out = Output::new(full.len());
    prop_assert_eq!(render_into(&doc, &options, &mut out), Ok(()));
    prop_assert_eq!(out.as_str(), full.as_str());
    Ok(())
}

#[test]
fn test_every_short_capacity_fails_on_known_page() {
    assert_bounded(PAGE).unwrap();
}

#[test]
fn test_zero_capacity_on_empty_input_succeeds() {
    let doc = parse_from_wikitext("").unwrap();
    let mut out = Output::new(0);
    assert_eq!(render_into(&doc, &RenderOptions::default(), &mut out), Ok(()));
    assert!(out.is_empty());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_output_never_exceeds_capacity(source in "[a-z '=*#:;|!{}\\[\\]\n-]{0,48}") {
        assert_bounded(&source)?;
    }

    #[test]
    fn prop_rendering_is_deterministic(source in "[a-zé '=*#|{}\\[\\]\n]{0,64}") {
        let doc = parse_from_wikitext(&source).unwrap();
        let first = serialize_with_options(&doc, &RenderOptions::default()).unwrap();
        let second = serialize_with_options(&doc, &RenderOptions::default()).unwrap();
        prop_assert_eq!(first, second);
    }
}
