//! Ampersand escaping and small encoding helpers.

use std::borrow::Cow;

use memchr::memchr;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a named entity of the shape `&xxxx;`. A line carrying one is
/// treated as already escaped and left alone wholesale, rather than
/// risking double-escaping.
static ENTITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[a-z]{4};").unwrap());

/// Escape bare `&` to `&#38;`.
///
/// Skips the whole line when it already contains a four-letter named
/// entity; lines without any `&` are returned borrowed.
pub fn escape_ampersands(line: &str) -> Cow<'_, str> {
    if memchr(b'&', line.as_bytes()).is_none() {
        return Cow::Borrowed(line);
    }
    if ENTITY_RE.is_match(line) {
        return Cow::Borrowed(line);
    }
    Cow::Owned(line.replace('&', "&#38;"))
}

/// Escape raw text for an HTML text context. Used for strings that
/// never ride through the inline pipeline (the article title).
pub fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

/// Make a pipeline-processed value safe for a double-quoted attribute.
/// Ampersands are already entity-escaped by the time attribute values
/// are assembled, so only the quote itself needs rewriting.
pub fn attr_value(value: &str) -> String {
    value.replace('"', "&quot;")
}
