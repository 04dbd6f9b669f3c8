//! Command-line wrapper: joins its arguments into one HTML blob (or treats
//! them as a path with `--file`), extracts text and prints it to stdout.
//!
//! Always exits 0 once extraction has run; failures print a diagnostic to
//! stderr and an empty line to stdout.

use byehtml::{process, ExtractionResult};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "byehtml", version, about = "Strip HTML down to plain text")]
struct Cli {
    /// HTML text (words are joined with single spaces), or a path with --file.
    /// Everything from the first word on is input, hyphens included.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,

    /// Treat the input as a file path (`.gz` files are decompressed)
    #[arg(short, long)]
    file: bool,

    /// Extraction strategy: none, dom-strip, density-based, generic-extractor
    #[arg(short, long, default_value = "dom-strip")]
    strategy: String,

    /// Put a period before every line break
    #[arg(short = 'p', long)]
    force_period: bool,

    /// Time limit in seconds; 0 disables it
    #[arg(short, long, default_value_t = 5.0)]
    timeout: f64,

    /// Print the full result as JSON instead of the bare text
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if cli.words.is_empty() {
        println!("USAGE: byehtml <TEXT>");
        return;
    }

    let input = cli.words.join(" ");
    let result = process(&input, cli.file, &cli.strategy, cli.force_period, cli.timeout);
    report(&result, cli.json);
}

fn report(result: &ExtractionResult, json: bool) {
    for warning in result.warnings() {
        eprintln!("{warning}");
    }
    if let Some(diagnostic) = result.diagnostic() {
        eprintln!("{diagnostic}");
    }

    if json {
        println!("{}", serde_json::to_string(result).unwrap_or_default());
    } else {
        println!("{}", result.text());
    }
}
