//! codeformat - highlight source code into HTML from the command line

use std::env;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process;

use codeformat::{
    BlockFormatter, Config, HighlightError, HighlightOptions, Highlighter, Language, Result,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// What to do with the input
#[derive(Debug, Default)]
enum Mode {
    /// The whole input is one code body
    #[default]
    Code,
    /// Rewrite `[code:...]` blocks in rich text
    Blocks,
    /// Rewrite bare `[code]` blocks
    Simple,
}

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    mode: Mode,
    language: Option<String>,
    line_numbers: bool,
    alternate: bool,
    title: String,
    path: Option<String>,
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the stderr tracing subscriber, filtered by RUST_LOG
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("codeformat=warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    // Only fails if a subscriber is already set
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run() -> Result<()> {
    let Some(args) = parse_args(env::args().skip(1))? else {
        return Ok(());
    };

    let config = Config::load()?;
    let highlighter = Highlighter::with_config(config)?;
    let input = read_input(args.path.as_deref())?;

    let output = match args.mode {
        Mode::Blocks => BlockFormatter::new(&highlighter)?.format_text(&input).into_owned(),
        Mode::Simple => BlockFormatter::new(&highlighter)?
            .format_text_simple(&input)
            .into_owned(),
        Mode::Code => {
            let tag = args.language.as_deref().unwrap_or("c#");
            let options = HighlightOptions::new(Language::from_tag(tag), input)
                .with_line_numbers(args.line_numbers)
                .with_alternate(args.alternate)
                .with_title(args.title);
            highlighter
                .highlight(&options)
                .ok_or_else(|| HighlightError::Usage(format!("unsupported language: {tag}")))?
        }
    };

    println!("{}", output);
    Ok(())
}

/// Parse arguments; `None` means help or version was printed
fn parse_args(mut iter: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut args = Args::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                print_version();
                return Ok(None);
            }
            "--lang" | "-l" => {
                let tag = iter
                    .next()
                    .ok_or_else(|| HighlightError::Usage("--lang needs a value".to_string()))?;
                args.language = Some(tag);
            }
            "--title" | "-t" => {
                args.title = iter
                    .next()
                    .ok_or_else(|| HighlightError::Usage("--title needs a value".to_string()))?;
            }
            "--line-numbers" | "-n" => args.line_numbers = true,
            "--alt" | "-a" => args.alternate = true,
            "--blocks" => args.mode = Mode::Blocks,
            "--simple" => args.mode = Mode::Simple,
            other if other.starts_with('-') && other != "-" => {
                return Err(HighlightError::Usage(format!("unknown option {other}")));
            }
            path => args.path = Some(path.to_string()),
        }
    }

    Ok(Some(args))
}

/// Read the input file, or stdin for no path or `-`
fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

fn print_usage() {
    println!("codeformat {} - source code to highlighted HTML", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: codeformat [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes HTML to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang TAG       Language: c#, vb, js, html, xml, msh, sql (default c#)");
    println!("  -n, --line-numbers   Number each line");
    println!("  -a, --alt            Stripe alternate lines");
    println!("  -t, --title TEXT     Caption above the block");
    println!("      --blocks         Rewrite [code:lang;ln=on;alt=on;title]...[/code] blocks");
    println!("      --simple         Rewrite bare [code]...[/code] blocks");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Settings are read from ~/.codeformat.toml; RUST_LOG controls logging.");
}

fn print_version() {
    println!("codeformat {}", env!("CARGO_PKG_VERSION"));
}
