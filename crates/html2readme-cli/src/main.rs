// Command-line interface for html2readme
//
// Reads an HTML file (typically the project container element copied from the
// browser inspector), converts it to Markdown and strips the page boilerplate.
//
// Usage:
//  html2readme <input>                    - Print the README to stdout
//  html2readme <input> -o README.md       - Write the README to a file
//  html2readme <input> --in-place         - Replace the input file with the README
//  html2readme <input> --no-clean         - Skip the cleanup rules
//  html2readme <input> --rules extension  - Use the browser-extension rule set
//
// Nothing is written when conversion fails, so the input is never left half
// rewritten.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use html2readme::{ReadmeService, Rules};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "html2readme",
    version,
    about = "Convert a copied HTML project page into a clean README.md"
)]
struct Cli {
    /// HTML file to convert
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Write the Markdown to this file instead of stdout
    #[arg(short, long, value_name = "PATH", conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Overwrite INPUT with the Markdown
    #[arg(short, long)]
    in_place: bool,

    /// Output the raw conversion without applying cleanup rules
    #[arg(long, conflicts_with = "rules")]
    no_clean: bool,

    /// Cleanup rule set to apply
    #[arg(long, value_enum, default_value_t = RuleSet::Readme)]
    rules: RuleSet,

    /// Log each cleanup rule as it is applied
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RuleSet {
    /// Strip project-page boilerplate down to requirements and tasks
    Readme,
    /// Tidy task metadata and code fences, keep every section
    Extension,
}

impl RuleSet {
    fn rules(self) -> Rules {
        match self {
            RuleSet::Readme => Rules::readme(),
            RuleSet::Extension => Rules::extension(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let html = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    tracing::info!(path = %cli.input.display(), bytes = html.len(), "read input");

    let service = ReadmeService::with_rules(cli.rules.rules());
    let markdown = if cli.no_clean {
        service.convert(&html)
    } else {
        service
            .readme(&html)
            .context("Cleanup failed; no output was written")?
    };

    let destination = if cli.in_place {
        Some(cli.input.as_path())
    } else {
        cli.output.as_deref()
    };

    match destination {
        Some(path) => write_output(path, &markdown),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{markdown}").context("Failed to write to stdout")?;
            Ok(())
        }
    }
}

fn write_output(path: &Path, markdown: &str) -> Result<()> {
    fs::write(path, markdown).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote readme");
    Ok(())
}
