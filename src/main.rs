//! proofmark CLI - watch a text file and regenerate its HTML preview.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;

use proofmark::watch::{self, Paths};
use proofmark::Options;

#[derive(Parser)]
#[command(
    name = "proofmark",
    about = "Live Markdown proofing preview with prose-quality diagnostics",
    version
)]
struct Cli {
    /// Source text file to preview
    source: PathBuf,

    /// HTML template containing a <!--Divider--> marker
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output HTML file, truncated and rewritten on every build
    #[arg(long, default_value = "index.html")]
    output: PathBuf,

    /// Directory that {path} series directives resolve against
    #[arg(long, default_value = "Content/System")]
    content_dir: PathBuf,

    /// Canonical media host whose image URLs map to local static assets
    #[arg(long)]
    media_host: Option<String>,

    /// Build once and exit instead of watching
    #[arg(long)]
    once: bool,

    /// Polling interval in seconds
    #[arg(long, default_value_t = 1)]
    interval: u64,
}

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(1);
    });

    if !cli.source.is_file() {
        eprintln!("{} is not a readable file", cli.source.display());
        process::exit(1);
    }

    let options = Options {
        content_dir: cli.content_dir,
        media_host: cli.media_host,
        ..Options::default()
    };
    let paths = Paths {
        source: cli.source,
        template: cli.template,
        output: cli.output,
    };

    let result = if cli.once {
        println!("Building...");
        proofmark::generate_file(
            &paths.source,
            &paths.template,
            &paths.output,
            &options,
            &watch::timestamp(),
        )
        .map(|_| ())
    } else {
        watch::watch(&paths, &options, Duration::from_secs(cli.interval))
    };

    if let Err(e) = result {
        eprintln!("proofmark: {e}");
        process::exit(1);
    }
}
