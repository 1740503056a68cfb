//! HTML output writer for the preview document.

use crate::analysis::ParagraphStats;
use crate::escape;

/// Accumulates the output document: template head, the `<article>`
/// body with per-paragraph stat blocks and fragments, template tail.
///
/// # Example
/// ```
/// use proofmark::render::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.article_start();
/// writer.title("My Draft");
/// writer.article_end();
/// assert_eq!(writer.as_str(), "<article><h2>My Draft</h2>\n</article>");
/// ```
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Pre-allocate for an input of the given size. Preview HTML runs
    /// well past the source length once stat blocks are added.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len * 2 + 256),
        }
    }

    /// Write raw, pre-rendered HTML.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Write the opening `<article>` tag.
    #[inline]
    pub fn article_start(&mut self) {
        self.out.push_str("<article>");
    }

    /// Write the closing `</article>` tag.
    #[inline]
    pub fn article_end(&mut self) {
        self.out.push_str("</article>");
    }

    /// Write the document title. The title line never passes through
    /// the inline pipeline, so it is escaped for text context here.
    pub fn title(&mut self, title: &str) {
        self.out.push_str("<h2>");
        self.out.push_str(&escape::text(title));
        self.out.push_str("</h2>\n");
    }

    /// Write the floating per-paragraph statistics block.
    pub fn stats_block(&mut self, stats: &ParagraphStats) {
        self.out.push_str(&format!(
            "<div class='floating_stats'><div>Word count: {}</div>\
             <div>Overused phrase: {}</div>\
             <div>Repeated: {}; Avoid: {}</div></div>",
            stats.words, stats.overused, stats.repeated, stats.avoid
        ));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
