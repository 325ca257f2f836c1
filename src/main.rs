//! specmd - ReSpec HTML to Markdown converter

use std::fs;
use std::process::ExitCode;

use clap::Parser;

use specmd::{ConvertOptions, ReferenceTable, convert, parse_document};

#[derive(Parser)]
#[command(name = "specmd")]
#[command(version, about = "Convert ReSpec-style HTML specifications to kramdown Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    specmd index.html index.md        Convert a specification
    specmd index.html                 Write the Markdown to stdout
    specmd -p preamble.md index.html index.md
                                      Insert a title block after the front matter")]
struct Cli {
    /// Input ReSpec HTML file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output Markdown file (stdout when omitted)
    #[arg(value_name = "OUTPUT")]
    output: Option<String>,

    /// JSON table mapping citation labels to display text
    #[arg(short, long, value_name = "FILE", default_value = "references.json")]
    references: String,

    /// Markdown file inserted verbatim after the front matter
    #[arg(short, long, value_name = "FILE")]
    preamble: Option<String>,

    /// Wrap column for paragraph text (0 disables wrapping)
    #[arg(short, long, default_value_t = specmd::markdown::DEFAULT_WIDTH)]
    width: usize,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = fs::read_to_string(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let root = parse_document(&source).map_err(|e| e.to_string())?;
    let refs = ReferenceTable::load(&cli.references)
        .map_err(|e| format!("{}: {e}", cli.references))?;
    let preamble = match &cli.preamble {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| format!("{path}: {e}"))?),
        None => None,
    };

    let options = ConvertOptions {
        preamble,
        width: cli.width,
    };
    let markdown = convert(&root, &refs, &options).map_err(|e| e.to_string())?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &markdown).map_err(|e| format!("{path}: {e}"))?;
            if !cli.quiet {
                eprintln!("Wrote {path}");
            }
        }
        None => print!("{markdown}"),
    }
    Ok(())
}
