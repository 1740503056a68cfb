use std::fs;

use proofmark::{render_fragment, Options};

fn options_for(dir: &tempfile::TempDir) -> Options {
    Options {
        content_dir: dir.path().to_path_buf(),
        ..Options::default()
    }
}

#[test]
fn series_directive_inlines_the_index_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("learning series"),
        "[Part One](part one.txt)\n[Part Two](part two.txt)",
    )
    .unwrap();

    let html = render_fragment("{learning series}", &options_for(&dir)).unwrap();
    assert!(
        html.starts_with("<ul style=\"border:1px dashed gray\" id=\"series_index\">"),
        "{html}"
    );
    assert!(
        html.contains("<li><p><a class=\"local\" href=\"/blog/part-one\">Part One</a></p></li>"),
        "{html}"
    );
    assert!(
        html.contains("<a class=\"local\" href=\"/blog/part-two\">Part Two</a>"),
        "{html}"
    );
    assert!(html.ends_with("</ul>"), "{html}");
}

#[test]
fn each_index_line_gets_its_own_li() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("s"), "[A One](a.txt)\n[B Two](b.txt)\n[C Three](c.txt)").unwrap();

    let html = render_fragment("{s}", &options_for(&dir)).unwrap();
    assert_eq!(html.matches("    <li>").count(), 3, "{html}");
}

#[test]
fn missing_series_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_fragment("{never written}", &options_for(&dir)).unwrap_err();
    assert!(err.to_string().contains("never written"), "{err}");
}

#[test]
fn nested_directives_are_not_expanded() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("outer list"), "{inner list}").unwrap();

    let html = render_fragment("{outer list}", &options_for(&dir)).unwrap();
    // The inner directive renders literally instead of recursing.
    assert!(html.contains("<li>{inner list}</li>"), "{html}");
}

#[test]
fn surrounding_document_continues_after_series() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("s list"), "[Part One](one.txt)").unwrap();

    let input = "{s list}\nprose continues here";
    let html = render_fragment(input, &options_for(&dir)).unwrap();
    assert!(html.contains("</ul>\n<p>prose continues here</p>"), "{html}");
}
