//! Per-paragraph prose statistics and highlight spans.
//!
//! Runs before block classification so the `<span>` highlights it
//! inserts ride through the inline transformer untouched (the
//! transformer shields existing span tags from its own passes).

pub mod phrases;

use memchr::memchr_iter;
use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};

pub use phrases::{BE_VERBS, EXCLUDED_WORDS, OVERUSED_PHRASES};

/// Counters for one paragraph (one processed body line).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphStats {
    /// Words on the line: space separators + hyphen separators + 1.
    pub words: usize,
    /// Occurrences of overused phrases.
    pub overused: usize,
    /// Distinct words that crossed the three-occurrence threshold.
    pub repeated: usize,
    /// Flagged copulas and `-ly` adverbs, counted per token.
    pub avoid: usize,
}

/// Monotonic totals across one generation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub words: usize,
    pub overused: usize,
    pub repeated: usize,
    pub avoid: usize,
    pub paragraphs: usize,
}

impl DocumentStats {
    /// Integer average words per paragraph; 0 for an empty document.
    pub fn average_words(&self) -> usize {
        if self.paragraphs == 0 {
            0
        } else {
            self.words / self.paragraphs
        }
    }
}

/// Separator-based word count: spaces plus hyphens plus one, so
/// hyphenated compounds count as multiple words.
pub fn word_count(line: &str) -> usize {
    let bytes = line.as_bytes();
    memchr_iter(b' ', bytes).count() + memchr_iter(b'-', bytes).count() + 1
}

/// Analyze one line: return it with highlight spans inserted, plus its
/// paragraph counters. Document totals are updated in place.
pub fn analyze(line: &str, doc: &mut DocumentStats) -> (String, ParagraphStats) {
    let mut para = ParagraphStats {
        words: word_count(line),
        ..ParagraphStats::default()
    };
    doc.words += para.words;
    doc.paragraphs += 1;

    let mut out = line.to_string();

    // Overused phrases. The document total re-adds the paragraph's
    // running counter on every phrase hit, so paragraphs with several
    // distinct overused phrases count more than their plain sum.
    for (phrase, re) in OVERUSED_PHRASES.iter().zip(phrases::OVERUSED_RES.iter()) {
        let Some(m) = re.find(&out) else { continue };
        para.overused += out.to_lowercase().matches(phrase).count();
        doc.overused += para.overused;

        let matched = m.as_str().to_string();
        let wrapped = format!(" <span class='replace'>{}</span> ", matched.trim());
        out = out.replace(&matched, &wrapped);

        // A leading-capital match also rewrites its lowercase repeats
        // elsewhere on the line.
        let lowered = matched.to_lowercase();
        if lowered != matched {
            let wrapped = format!(" <span class='replace'>{}</span> ", lowered.trim());
            out = out.replace(&lowered, &wrapped);
        }
    }

    // Repetition and avoid-word passes tokenize the original line but
    // substitute into the annotated one.
    let mut counts: FxHashMap<String, u32> = FxHashMap::default();
    let mut wrapped_avoid: FxHashSet<String> = FxHashSet::default();
    for token in line.split(' ') {
        let stripped: String = token
            .replace("'s", "")
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        if stripped.is_empty() {
            continue;
        }
        let lower = stripped.to_lowercase();

        if !EXCLUDED_WORDS.contains(&lower) {
            let n = counts.entry(lower.clone()).or_insert(0);
            *n += 1;
            // The third occurrence wraps every bounded occurrence on
            // the line, earlier ones included.
            if *n == 3 {
                out = wrap_word(&out, &stripped, &format!("repeat {stripped}"));
                para.repeated += 1;
                doc.repeated += 1;
            }
        }

        if BE_VERBS.contains(&lower.as_str()) || lower.ends_with("ly") {
            if wrapped_avoid.insert(lower) {
                out = wrap_word(&out, &stripped, "avoid");
            }
            para.avoid += 1;
            doc.avoid += 1;
        }
    }

    (out, para)
}

/// Wrap every bounded occurrence of `word` in a highlight span. The
/// right boundary accepts end of line; the left one does not, so a
/// line can never come to start with a span (the classifier would read
/// that as raw HTML).
fn wrap_word(line: &str, word: &str, class: &str) -> String {
    let re = Regex::new(&format!(r"([^\w]){}([^\w]|$)", regex::escape(word))).unwrap();
    re.replace_all(line, |caps: &regex::Captures| {
        format!(
            "{}<span class='{}'>{}</span>{}",
            &caps[1], class, word, &caps[2]
        )
    })
    .into_owned()
}
