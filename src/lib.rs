//! proofmark: live Markdown proofing preview with prose diagnostics.
//!
//! Converts a line-oriented Markdown dialect into an HTML preview and
//! annotates the prose with writing-quality highlights: overused
//! phrases, words repeated three or more times in a paragraph, and
//! weak words (copulas and `-ly` adverbs).
//!
//! # Design Principles
//! - Line at a time: no AST, one pass, bounded lookback of three blocks
//! - Regex cascade: classification and inline rewriting are ordered
//!   pattern tables, compiled once
//! - Degrade to passthrough: markup that doesn't match renders as-is;
//!   only missing files are fatal

pub mod analysis;
pub mod block;
pub mod document;
pub mod error;
pub mod escape;
pub mod inline;
pub mod render;
pub mod template;
pub mod watch;

use std::path::PathBuf;

// Re-export primary types
pub use analysis::{DocumentStats, ParagraphStats};
pub use block::{BlockKind, Classifier, History};
pub use document::{generate, generate_file, Generated};
pub use error::Error;
pub use render::HtmlWriter;
pub use template::Template;

/// Site-specific rendering options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory that `{path}` series directives resolve against.
    pub content_dir: PathBuf,
    /// Canonical media host; image URLs under it are rewritten to the
    /// local static-asset path. `None` leaves image URLs alone.
    pub media_host: Option<String>,
    /// Prefix for local article links derived from `.txt`/`.htm`
    /// targets.
    pub article_base: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("Content/System"),
            media_host: None,
            article_base: "/blog".to_string(),
        }
    }
}

/// Render a body fragment: classify every line, join the fragments
/// with newlines, and close whatever construct is still open.
///
/// This is the markup pipeline without the prose analyzer or the
/// template; [`document::generate`] is the full pass.
///
/// # Example
/// ```
/// let options = proofmark::Options::default();
/// let html = proofmark::render_fragment("# Hello", &options).unwrap();
/// assert_eq!(html, "<h1>Hello</h1>");
/// ```
pub fn render_fragment(input: &str, options: &Options) -> Result<String, Error> {
    let mut classifier = Classifier::new(options);
    let mut parts = Vec::new();
    for line in input.split('\n') {
        parts.push(classifier.classify_and_render(line)?);
    }
    let mut out = parts.join("\n");
    out.push_str(&classifier.finish());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(input: &str) -> String {
        render_fragment(input, &Options::default()).unwrap()
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render("Hello, world."), "<p>Hello, world.</p>");
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6 {
            let input = format!("{} Heading", "#".repeat(level));
            let html = render(&input);
            assert_eq!(html, format!("<h{level}>Heading</h{level}>"));
        }
    }

    #[test]
    fn test_unordered_list_run() {
        let html = render("* First item\n* Second item");
        assert_eq!(
            html,
            "<ul start='1'>\n<li>First item</li>\n<li>Second item</li></ul>"
        );
    }

    #[test]
    fn test_list_closed_by_following_heading() {
        let html = render("* only item\n# After");
        assert_eq!(
            html,
            "<ul start='1'>\n<li>only item</li>\n<h1>After</h1></ul>\n"
        );
    }

    #[test]
    fn test_blockquote_open_and_close() {
        let html = render("> quoted words\nplain follow-up text");
        assert_eq!(
            html,
            "<blockquote>\n<p>quoted words</p>\n</blockquote><p>plain follow-up text</p>"
        );
    }

    #[test]
    fn test_emphasis_inside_paragraph() {
        let html = render("both **bold** and *slanted* text");
        assert_eq!(
            html,
            "<p>both <strong>bold</strong> and <em>slanted</em> text</p>"
        );
    }

    #[test]
    fn test_empty_input_is_empty() {
        assert_eq!(render(""), "");
    }
}
