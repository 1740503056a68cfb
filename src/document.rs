//! The generation pass: source text in, preview document out.

use std::fs;
use std::path::Path;

use memchr::memchr;

use crate::analysis::{self, DocumentStats};
use crate::block::Classifier;
use crate::error::Error;
use crate::render::HtmlWriter;
use crate::template::Template;
use crate::Options;

/// One generated preview document.
#[derive(Debug)]
pub struct Generated {
    pub html: String,
    pub stats: DocumentStats,
}

/// Run one full generation pass over source text.
///
/// The first source line is the title; the separator line and the
/// blank after it are discarded. Body lines without a single space are
/// skipped outright — they carry no prose worth counting.
pub fn generate(
    source: &str,
    template: &Template,
    options: &Options,
    timestamp: &str,
) -> Result<Generated, Error> {
    let mut lines = source.split('\n');
    let title = lines.next().unwrap_or("").trim_end();
    lines.next();
    lines.next();

    let mut writer = HtmlWriter::with_capacity_for(source.len());
    writer.write_str(&template.head);
    writer.article_start();
    writer.title(title);

    let mut classifier = Classifier::new(options);
    let mut stats = DocumentStats::default();

    for line in lines {
        if memchr(b' ', line.as_bytes()).is_none() {
            continue;
        }
        let (annotated, para) = analysis::analyze(line, &mut stats);
        let fragment = classifier.classify_and_render(&annotated)?;
        writer.newline();
        writer.stats_block(&para);
        writer.newline();
        writer.write_str(&fragment);
    }
    writer.write_str(&classifier.finish());
    writer.newline();
    writer.article_end();

    let average = stats.average_words().to_string();
    let words = stats.words.to_string();
    let paragraphs = stats.paragraphs.to_string();
    let overused = stats.overused.to_string();
    let repeated = stats.repeated.to_string();
    let avoid = stats.avoid.to_string();
    writer.write_str(&template.fill_tail(&[
        timestamp,
        timestamp,
        words.as_str(),
        paragraphs.as_str(),
        average.as_str(),
        overused.as_str(),
        repeated.as_str(),
        avoid.as_str(),
    ]));

    Ok(Generated {
        html: writer.into_string(),
        stats,
    })
}

/// Read the source and template files, generate, and truncate-write
/// the output file. Returns the document statistics.
pub fn generate_file(
    source_path: &Path,
    template_path: &Path,
    output_path: &Path,
    options: &Options,
    timestamp: &str,
) -> Result<DocumentStats, Error> {
    let source = fs::read_to_string(source_path).map_err(|e| Error::read(source_path, e))?;
    let template = Template::load(template_path)?;
    let generated = generate(&source, &template, options, timestamp)?;
    fs::write(output_path, &generated.html).map_err(|e| Error::write(output_path, e))?;
    Ok(generated.stats)
}
