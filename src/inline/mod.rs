//! The inline transformer: an ordered cascade of text substitutions.
//!
//! Pass order is load-bearing — later passes must never re-match text
//! an earlier pass produced. Highlight spans inserted by the prose
//! analyzer are shielded behind sentinel tokens for the whole cascade.

pub mod emphasis;
pub mod links;
pub mod quotes;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape;
use crate::Options;

const SPAN_OPEN: char = '\u{E000}';
const SPAN_CLOSE: char = '\u{E001}';

static SPAN_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?span[^>]*>").unwrap());

/// Apply every inline pass to one line of already-classified content.
///
/// Order: ampersand escaping, horizontal rules, em-dashes, double then
/// single smart quotes, strong emphasis (sentinel), plain emphasis,
/// images, links, footnote references, comment lines.
pub fn transform(line: &str, options: &Options) -> String {
    let (line, shielded) = shield_spans(line);

    let line = escape::escape_ampersands(&line).into_owned();
    let line = quotes::rules_and_dashes(&line);
    let line = quotes::smart_quotes(&line);

    let mut stash = emphasis::StrongStash::default();
    let line = emphasis::strong(&line, &mut stash);
    let line = emphasis::em(&line);
    let line = emphasis::restore(&line, &stash);

    let line = links::images(&line, options);
    let line = links::links(&line, options);
    let line = links::footnote_refs(&line);
    let line = links::comments(&line);

    restore_spans(&line, &shielded)
}

/// Lift `<span …>`/`</span>` tags out of the line so no pass can
/// corrupt them (single-quoted class attributes would otherwise be
/// rewritten by the smart-quote pass).
fn shield_spans(line: &str) -> (String, Vec<String>) {
    let mut shielded = Vec::new();
    let out = SPAN_TAG_RE
        .replace_all(line, |caps: &regex::Captures| {
            let token = format!("{SPAN_OPEN}{}{SPAN_CLOSE}", shielded.len());
            shielded.push(caps[0].to_string());
            token
        })
        .into_owned();
    (out, shielded)
}

fn restore_spans(line: &str, shielded: &[String]) -> String {
    let mut line = line.to_string();
    for (i, tag) in shielded.iter().enumerate() {
        let token = format!("{SPAN_OPEN}{i}{SPAN_CLOSE}");
        line = line.replace(&token, tag);
    }
    line
}
