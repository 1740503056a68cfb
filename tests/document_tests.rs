use proofmark::{generate, Options, Template};

fn template() -> Template {
    Template::parse(
        "<html>\n<!--Divider-->\n<footer>built {} / {} | words {} | paras {} | \
         avg {} | overused {} | repeated {} | avoid {}</footer>",
    )
    .unwrap()
}

#[test]
fn full_document_shape() {
    let src = "T\n=\n\nplain words here\n";
    let out = generate(src, &template(), &Options::default(), "TS").unwrap();
    assert_eq!(
        out.html,
        "<html>\n<article><h2>T</h2>\n\n\
         <div class='floating_stats'><div>Word count: 3</div>\
         <div>Overused phrase: 0</div>\
         <div>Repeated: 0; Avoid: 0</div></div>\n\
         <p>plain words here</p>\n</article>\n\
         <footer>built TS / TS | words 3 | paras 1 | avg 3 | \
         overused 0 | repeated 0 | avoid 0</footer>"
    );
}

#[test]
fn stats_block_precedes_each_paragraph() {
    let src = "Title Line\n====\n\nfirst paragraph text\nsecond paragraph text\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert_eq!(out.html.matches("<div class='floating_stats'>").count(), 2);
    assert_eq!(out.stats.paragraphs, 2);
}

#[test]
fn open_list_closed_before_article_end() {
    let src = "T\n=\n\n* item one\n* item two\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert!(out.html.contains("</ul>\n</article>"), "{}", out.html);
}

#[test]
fn title_is_escaped_for_text() {
    let src = "Tea & Trouble\n====\n\nbody text here\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert!(out.html.contains("<h2>Tea &amp; Trouble</h2>"), "{}", out.html);
}

#[test]
fn zero_paragraph_document_reports_zero_average() {
    let src = "Only Title\n====\n\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert_eq!(out.stats.paragraphs, 0);
    assert!(out.html.contains("avg 0"), "{}", out.html);
    assert!(out.html.contains("<article><h2>Only Title</h2>"), "{}", out.html);
}

#[test]
fn spaceless_lines_produce_no_output() {
    let src = "T\n=\n\nlonelyword\nan actual sentence\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert!(!out.html.contains("lonelyword"), "{}", out.html);
    assert_eq!(out.stats.paragraphs, 1);
}

#[test]
fn analyzer_and_markup_combine_in_body() {
    let src = "T\n=\n\nShe said **hello** and *waved* quickly.\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert!(
        out.html.contains(
            "<p>She said <strong>hello</strong> and <em>waved</em> \
             <span class='avoid'>quickly</span>.</p>"
        ),
        "{}",
        out.html
    );
    assert!(out.html.contains("Repeated: 0; Avoid: 1"), "{}", out.html);
    assert!(out.html.contains("avoid 1</footer>"), "{}", out.html);
}

#[test]
fn document_overused_total_is_sum_of_single_phrase_paragraphs() {
    let src = "T\n=\n\nWe should utilize the parts.\nThey also utilize the rest.\n";
    let out = generate(src, &template(), &Options::default(), "t").unwrap();
    assert_eq!(out.stats.overused, 2);
    assert!(out.html.contains("overused 2"), "{}", out.html);
}
