//! Images, links, footnote references, and comment lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::escape;
use crate::Options;

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]+)\]\(([^)]+)\)").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static FOOTNOTE_REF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\^([0-9]+)\]").unwrap());

/// Typographic entities stripped out of local article slugs.
const TYPOGRAPHIC_ENTITIES: [&str; 4] = ["&#8220;", "&#8221;", "&#8216;", "&#8217;"];

/// Render `![alt](url "title")` image syntax. URLs under the canonical
/// media host are mapped onto the local static-asset path, keeping only
/// the filename. The title is optional; the quotes around it may
/// already have been rewritten by the smart-quote pass.
pub fn images(line: &str, options: &Options) -> String {
    let captures: Vec<(String, String, String)> = IMAGE_RE
        .captures_iter(line)
        .map(|c| (c[0].to_string(), c[1].to_string(), c[2].to_string()))
        .collect();
    let mut line = line.to_string();
    for (whole, alt, inner) in captures {
        let inner = inner.trim();
        let (url, title) = split_title(inner);
        let mut url = url.to_string();
        if let Some(host) = &options.media_host {
            if url.starts_with(host.as_str()) {
                let filename = url.rsplit('/').next().unwrap_or("");
                url = format!("/Static/Images/{filename}");
            }
        }
        let mut tag = format!(
            "<div class=\"image\"><img src=\"{url}\" alt=\"{}\"",
            escape::attr_value(&alt)
        );
        if let Some(title) = title {
            tag.push_str(&format!(" title=\"{}\"", escape::attr_value(&title)));
        }
        tag.push_str("></div>");
        line = line.replace(&whole, &tag);
    }
    line
}

/// Render `[text](url "title")` link syntax.
///
/// `.txt` targets become clean local article paths; an empty URL
/// derives its slug from the link text; relative `.htm` targets map
/// into the article base; anything else passes through verbatim.
pub fn links(line: &str, options: &Options) -> String {
    let captures: Vec<(String, String, String)> = LINK_RE
        .captures_iter(line)
        .map(|c| (c[0].to_string(), c[1].to_string(), c[2].to_string()))
        .collect();
    let mut line = line.to_string();
    for (whole, text, inner) in captures {
        // Image syntax already consumed by the image pass; a leftover
        // `![..](..)` shape must not be re-linked.
        if let Some(pos) = line.find(&whole) {
            if pos > 0 && line.as_bytes()[pos - 1] == b'!' {
                continue;
            }
        }
        let inner = inner.trim();
        let (url, title) = split_title(inner);
        let url = url.replace('&', "&amp;");
        let anchor = render_anchor(&text, &url, title.as_deref(), options);
        line = line.replace(&whole, &anchor);
    }
    line
}

fn render_anchor(text: &str, url: &str, title: Option<&str>, options: &Options) -> String {
    let absolute = url.starts_with("http://") || url.starts_with("https://");
    let title_attr = title
        .map(|t| format!(" title=\"{}\"", escape::attr_value(t)))
        .unwrap_or_default();

    if url.ends_with(".txt") {
        let mut slug = url[..url.len() - 4].replace(' ', "-");
        for entity in TYPOGRAPHIC_ENTITIES {
            slug = slug.replace(entity, "");
        }
        let slug = slug.to_lowercase();
        let href = if absolute {
            slug
        } else {
            format!(
                "{}/{}",
                options.article_base.trim_end_matches('/'),
                slug.trim_start_matches('/')
            )
        };
        format!("<a class=\"local\" href=\"{href}\"{title_attr}>{text}</a>")
    } else if url.is_empty() {
        let slug = text
            .replace("<em>", "")
            .replace("</em>", "")
            .replace(' ', "-");
        format!("<a class=\"local\" href=\"{slug}\">{text}</a>")
    } else if !absolute && url.ends_with(".htm") {
        let slug = url[..url.len() - 4].replace(' ', "-").to_lowercase();
        let href = format!(
            "{}/{}",
            options.article_base.trim_end_matches('/'),
            slug.trim_start_matches('/')
        );
        format!("<a href=\"{href}\"{title_attr}>{text}</a>")
    } else {
        format!("<a href=\"{url}\"{title_attr}>{text}</a>")
    }
}

/// Split an optional quoted title off the tail of a link/image target.
/// Accepts straight quotes or the smart-quoted `&#8220;…&#8221;` pair.
fn split_title(inner: &str) -> (&str, Option<String>) {
    if let Some(start) = inner.find(" &#8220;") {
        let title = inner[start + 8..].trim_end();
        let title = title.strip_suffix("&#8221;").unwrap_or(title);
        return (inner[..start].trim_end(), Some(title.to_string()));
    }
    if let Some(start) = inner.find(" \"") {
        let title = inner[start + 2..].trim_end();
        let title = title.strip_suffix('"').unwrap_or(title);
        return (inner[..start].trim_end(), Some(title.to_string()));
    }
    (inner, None)
}

/// Render `[^N]` footnote references as superscript anchors, the
/// reciprocal of the footnote definition's back-reference.
pub fn footnote_refs(line: &str) -> String {
    FOOTNOTE_REF_RE
        .replace_all(
            line,
            "<sup id=\"fnref$1\"><a href=\"#fn$1\" rel=\"footnote\">$1</a></sup>",
        )
        .into_owned()
}

/// Turn a `//` comment line into an HTML comment.
pub fn comments(line: &str) -> String {
    if line.starts_with("//") {
        let mut out = line.replace("//", "<!--");
        out.push_str(" -->");
        out
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> Options {
        Options {
            media_host: Some("http://example.net/".to_string()),
            ..Options::default()
        }
    }

    #[test]
    fn image_with_title() {
        let out = images(
            "![A harbor](http://other.org/pics/harbor.jpg \"Boats at dawn\")",
            &opts(),
        );
        assert_eq!(
            out,
            "<div class=\"image\"><img src=\"http://other.org/pics/harbor.jpg\" \
             alt=\"A harbor\" title=\"Boats at dawn\"></div>"
        );
    }

    #[test]
    fn image_without_title() {
        let out = images("![A harbor](harbor.jpg)", &opts());
        assert_eq!(
            out,
            "<div class=\"image\"><img src=\"harbor.jpg\" alt=\"A harbor\"></div>"
        );
    }

    #[test]
    fn image_on_media_host_rewritten() {
        let out = images("![pic](http://example.net/img/2020/pic.png)", &opts());
        assert!(out.contains("src=\"/Static/Images/pic.png\""), "{out}");
    }

    #[test]
    fn image_with_smart_quoted_title() {
        let out = images("![pic](pic.png &#8220;The title&#8221;)", &opts());
        assert!(out.contains("title=\"The title\""), "{out}");
    }

    #[test]
    fn txt_link_becomes_local_article() {
        let out = links("see [the essay](My Essay.txt)", &opts());
        assert_eq!(
            out,
            "see <a class=\"local\" href=\"/blog/my-essay\">the essay</a>"
        );
    }

    #[test]
    fn empty_url_slugs_from_text() {
        let out = links("see [<em>That</em> Essay]()", &opts());
        assert_eq!(
            out,
            "see <a class=\"local\" href=\"That-Essay\"><em>That</em> Essay</a>"
        );
    }

    #[test]
    fn relative_htm_maps_into_article_base() {
        let out = links("[old page](Old Page.htm)", &opts());
        assert_eq!(out, "<a href=\"/blog/old-page\">old page</a>");
    }

    #[test]
    fn absolute_url_passes_through() {
        let out = links("[site](https://example.org/a?b=1)", &opts());
        assert_eq!(out, "<a href=\"https://example.org/a?b=1\">site</a>");
    }

    #[test]
    fn relative_unknown_suffix_untouched() {
        let out = links("[doc](files/doc.pdf)", &opts());
        assert_eq!(out, "<a href=\"files/doc.pdf\">doc</a>");
    }

    #[test]
    fn link_title_emitted() {
        let out = links("[site](https://example.org \"Front page\")", &opts());
        assert_eq!(
            out,
            "<a href=\"https://example.org\" title=\"Front page\">site</a>"
        );
    }

    #[test]
    fn footnote_reference_anchor() {
        assert_eq!(
            footnote_refs("as noted[^3] before"),
            "as noted<sup id=\"fnref3\"><a href=\"#fn3\" rel=\"footnote\">3</a></sup> before"
        );
    }

    #[test]
    fn comment_line() {
        assert_eq!(comments("// draft note"), "<!-- draft note -->");
    }

    #[test]
    fn non_comment_line_untouched() {
        assert_eq!(comments("path // not at start"), "path // not at start");
    }
}
