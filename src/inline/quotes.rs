//! Horizontal rules, dashes, and typographic quote substitution.

use once_cell::sync::Lazy;
use regex::Regex;

/// Styled rule emitted for a `---` line.
const HR_TAG: &str = "<hr style='margin:50px auto;width:50%;border:0;\
border-bottom:1px dashed #ccc;background:#999;' />";

// Quote context classes. An opening double quote needs a preceding
// separator and a following word-ish character; a closing one is the
// mirror image. End of line counts as a right boundary; start of line
// deliberately does not (a quote opening a line stays straight).
static OPEN_DQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\s<>\\*/\[(\-]+"[\[\w%#\\*<>]+"#).unwrap());
static CLOSE_DQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[)\w+.]+"(?:[\s)\]<>.*\-,]|$)"#).unwrap());
static CONTRACTION_SQ: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+'[\w+|\s]").unwrap());
static OPEN_SQ: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s(]'\w+").unwrap());

/// Replace a leading `---` rule, then spaced em-dashes.
pub fn rules_and_dashes(line: &str) -> String {
    let mut line = line.to_string();
    if line.starts_with("---") {
        line = line.replace("---", HR_TAG);
    }
    if line.contains("--") {
        line = line.replace("--", "&#160;&#8212;&#160;");
    }
    line
}

/// Convert straight quotes to typographic entities, left to right,
/// replacing one quote character per matched span.
pub fn smart_quotes(line: &str) -> String {
    let mut line = line.to_string();
    line = substitute(&line, &OPEN_DQ, '"', "&#8220;", false);
    line = substitute(&line, &CLOSE_DQ, '"', "&#8221;", false);
    line = substitute(&line, &CONTRACTION_SQ, '\'', "&#8217;", true);
    line = substitute(&line, &OPEN_SQ, '\'', "&#8216;", false);
    line
}

/// For every regex match, rewrite the quote character inside the
/// matched span (first occurrence, or all for contractions) and swap
/// the rewritten span back into the line.
fn substitute(line: &str, re: &Regex, quote: char, entity: &str, all: bool) -> String {
    let matches: Vec<String> = re.find_iter(line).map(|m| m.as_str().to_string()).collect();
    let mut line = line.to_string();
    for m in matches {
        let rewritten = if all {
            m.replace(quote, entity)
        } else {
            m.replacen(quote, entity, 1)
        };
        line = line.replace(&m, &rewritten);
    }
    line
}
