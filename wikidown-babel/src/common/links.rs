//! Helpers for turning link definitions into Markdown link parts.
//!
//! A link definition is the rendered content between a link's delimiters:
//! `Page|label` for internal links and media, `https://example.org label`
//! for external links. These functions are pure string work; the serializer
//! decides what to write.

/// Image file extensions, compared case-insensitively against the target.
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg", ".tiff"];

/// Target and label of a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub target: &'a str,
    pub label: &'a str,
}

/// Split an internal link or media definition.
///
/// The target is everything before the first `|`, the label everything after
/// the last `|`, so media options in between (`thumb`, `200px`) are dropped.
/// Both parts are trimmed; an absent or blank label falls back to the target.
///
/// # Example
///
/// ```
/// use wikidown_babel::common::links::split_internal;
///
/// let parts = split_internal("File:Cat.jpg|thumb|A cat");
/// assert_eq!(parts.target, "File:Cat.jpg");
/// assert_eq!(parts.label, "A cat");
/// ```
pub fn split_internal(definition: &str) -> LinkParts<'_> {
    let (target, label) = match (definition.find('|'), definition.rfind('|')) {
        (Some(first), Some(last)) => (definition[..first].trim(), definition[last + 1..].trim()),
        _ => (definition.trim(), ""),
    };
    LinkParts {
        target,
        label: if label.is_empty() { target } else { label },
    }
}

/// Split an external link definition at its first space.
///
/// The run of spaces after the URL is skipped; without a space the label is
/// the URL itself.
pub fn split_external(definition: &str) -> LinkParts<'_> {
    let definition = definition.trim();
    let (target, label) = match definition.find(' ') {
        Some(space) => (&definition[..space], definition[space..].trim_start_matches(' ')),
        None => (definition, ""),
    };
    LinkParts {
        target,
        label: if label.is_empty() { target } else { label },
    }
}

/// Whether a link target names an image file.
pub fn is_image(target: &str) -> bool {
    let lower = target.trim_end().to_ascii_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Escape a link destination for Markdown.
///
/// Only parentheses are escaped; they would otherwise end the destination.
pub fn escape_destination(target: &str) -> String {
    let mut escaped = String::with_capacity(target.len());
    for ch in target.chars() {
        match ch {
            '(' => escaped.push_str("%28"),
            ')' => escaped.push_str("%29"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
