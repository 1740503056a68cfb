//! Strong and plain emphasis.
//!
//! Strong spans are lifted out behind sentinel tokens before the
//! single-asterisk pass runs, so its delimiters can never re-match
//! text the strong pass already rewrote. The tokens are private-use
//! characters no other pass can touch.

use once_cell::sync::Lazy;
use regex::Regex;

const STRONG_OPEN: char = '\u{E100}';
const STRONG_CLOSE: char = '\u{E101}';

static STRONG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\*\*[\w:".+'\s|#\\&=,$!?;\-\[\]]+\*\*"#).unwrap());
static EM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\*[\w:".+'\s|#\\&=,$!?;\-\[\]]+\*"#).unwrap());

/// Rewritten strong spans parked behind sentinel tokens.
#[derive(Debug, Default)]
pub struct StrongStash {
    spans: Vec<String>,
}

/// Replace `**…**` pairs with sentinel tokens, stashing the rendered
/// `<strong>` span for [`restore`].
pub fn strong(line: &str, stash: &mut StrongStash) -> String {
    let matches: Vec<String> = STRONG_RE
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect();
    let mut line = line.to_string();
    for m in matches {
        let token = format!("{STRONG_OPEN}{}{STRONG_CLOSE}", stash.spans.len());
        let rendered = m
            .replacen("**", "<strong>", 1)
            .replacen("**", "</strong> ", 1)
            .trim()
            .to_string();
        stash.spans.push(rendered);
        line = line.replace(&m, &token);
    }
    line
}

/// Render `*…*` pairs as `<em>` spans.
pub fn em(line: &str) -> String {
    let matches: Vec<String> = EM_RE
        .find_iter(line)
        .map(|m| m.as_str().to_string())
        .collect();
    let mut line = line.to_string();
    for m in matches {
        let rendered = m
            .replacen('*', "<em>", 1)
            .replacen('*', "</em> ", 1)
            .trim()
            .to_string();
        line = line.replace(&m, &rendered);
    }
    line
}

/// Swap stashed strong spans back in for their sentinel tokens.
pub fn restore(line: &str, stash: &StrongStash) -> String {
    let mut line = line.to_string();
    for (i, span) in stash.spans.iter().enumerate() {
        let token = format!("{STRONG_OPEN}{i}{STRONG_CLOSE}");
        line = line.replace(&token, span);
    }
    line
}
