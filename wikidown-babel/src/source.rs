//! Turning raw input bytes into parser input.

use log::warn;

/// Default cap on the number of input bytes that are parsed.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 500_000;

/// Decode `bytes` as wikitext source, keeping at most `max_bytes` of it.
///
/// Oversized input is truncated, not rejected: the cut lands on the last char
/// boundary at or below the limit and a warning is logged. Invalid UTF-8 is
/// replaced with U+FFFD.
pub fn load_source(bytes: &[u8], max_bytes: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.len() <= max_bytes {
        return text.into_owned();
    }

    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    warn!(
        "input is {} bytes, truncated to the first {} bytes",
        text.len(),
        end
    );
    text[..end].to_string()
}
