//! The HTML template collaborator.
//!
//! A template is one file split by a divider comment into a head
//! fragment (written verbatim before the article) and a tail fragment
//! whose `{}` placeholders receive the document statistics in order:
//! timestamp, timestamp, word count, paragraph count, average words
//! per paragraph, overused total, repeated total, avoid total.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Marker separating the template's head and tail fragments.
pub const DIVIDER: &str = "<!--Divider-->";

/// Placeholder filled positionally in the tail fragment.
const PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone)]
pub struct Template {
    pub head: String,
    pub tail: String,
}

impl Template {
    /// Split template text on the divider marker.
    pub fn parse(text: &str) -> Option<Self> {
        let (head, tail) = text.split_once(DIVIDER)?;
        Some(Self {
            head: head.to_string(),
            tail: tail.to_string(),
        })
    }

    /// Load and parse a template file. A template without the divider
    /// is unusable and reported as such.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::parse(&text).ok_or_else(|| Error::MalformedTemplate {
            path: path.to_path_buf(),
        })
    }

    /// Fill the tail's placeholders left to right. Extra placeholders
    /// stay as written; extra values are dropped.
    pub fn fill_tail(&self, values: &[&str]) -> String {
        let mut out = self.tail.clone();
        for value in values {
            if !out.contains(PLACEHOLDER) {
                break;
            }
            out = out.replacen(PLACEHOLDER, value, 1);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_divider() {
        let t = Template::parse("<html><!--Divider--></html>").unwrap();
        assert_eq!(t.head, "<html>");
        assert_eq!(t.tail, "</html>");
    }

    #[test]
    fn parse_without_divider_fails() {
        assert!(Template::parse("<html></html>").is_none());
    }

    #[test]
    fn fill_is_positional() {
        let t = Template::parse("<!--Divider-->a={} b={} c={}").unwrap();
        assert_eq!(t.fill_tail(&["1", "2", "3"]), "a=1 b=2 c=3");
    }

    #[test]
    fn fill_leaves_extra_placeholders() {
        let t = Template::parse("<!--Divider-->{} and {}").unwrap();
        assert_eq!(t.fill_tail(&["x"]), "x and {}");
    }
}
