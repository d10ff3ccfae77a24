/*!
Main binary for content2tokens.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::generate;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colored::Colorize;
use std::fs;
use std::io::stdout;
use std::path::{Path, PathBuf};

use content2tokens::commands;
use content2tokens::flatten::token_sets;
use content2tokens::input::{DocumentFormat, load_collection, load_document};
use content2tokens::merge::merge;
use content2tokens::token::Collection;
use content2tokens::wrap::wrap;

/// Content file read when no path is given on the command line.
const DEFAULT_INPUT: &str = "content.json";

/// Flatten a nested content document into Tokens Studio token sets.
#[derive(Parser)]
#[command(name = "c2t", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Path to the content document. Defaults to `content.json`
    input: Option<PathBuf>,
    #[arg(value_name = "LOCALE")]
    /// Optional locale prefix prepended to every token key (e.g., "EN")
    locale: Option<String>,
    /// Token collection file the flattened sets are appended to
    #[arg(short, long, default_value = "content_tokens_studio.json")]
    output: PathBuf,
    /// Do not pretty-print the JSON output, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

/// Available subcommands for `c2t`
#[derive(Subcommand)]
enum Commands {
    /// Rewrite a JSON content file in place, wrapping every string leaf as
    /// a `{"value": ...}` object
    Wrap {
        #[arg(value_name = "FILE")]
        /// Path to the content document. Defaults to `content.json`
        input: Option<PathBuf>,
    },
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for c2t to the output directory if specified,
    /// else the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

/// Entry point for main binary.
///
/// Parses the command line arguments and runs the requested operation; with
/// no subcommand, flattens the content document and appends the resulting
/// token sets to the collection file. Errors propagate with context and
/// exit with a failure status.
fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    match &args.command {
        Some(Commands::Generate(cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                generate(*shell, &mut cmd, "c2t", &mut stdout().lock());
            }
            GenerateCommand::Man { output_dir } => {
                commands::generate::generate_man_pages(Args::command(), output_dir.clone())?;
            }
        },
        Some(Commands::Wrap { input }) => {
            let input = input.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
            wrap_in_place(&input)?;
        }
        None => append(&args)?,
    }

    Ok(())
}

/// Flatten the content document and append its token sets to the
/// collection file.
fn append(args: &Args) -> Result<()> {
    let input = args
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    if let Some(locale) = &args.locale {
        println!("Using locale prefix: {locale}");
    }

    let document = load_document(&input)?;
    // Load the target before flattening so a broken collection aborts the
    // run without touching anything on disk.
    let mut collection = load_collection(&args.output)?;

    let sets = token_sets(&document, args.locale.as_deref());
    for report in merge(&mut collection, sets) {
        if report.extended {
            println!(
                "Added {} tokens to existing '{}' set",
                report.tokens, report.set
            );
        } else {
            println!("Added new '{}' set with {} tokens", report.set, report.tokens);
        }
    }

    write_collection(&args.output, &collection, args.compact)?;
    println!(
        "{}",
        format!(
            "Converted and appended '{}' to {}",
            input.display(),
            args.output.display()
        )
        .green()
    );
    Ok(())
}

fn write_collection(path: &Path, collection: &Collection, compact: bool) -> Result<()> {
    let mut serialized = if compact {
        serde_json::to_string(collection)
    } else {
        serde_json::to_string_pretty(collection)
    }
    .context("serialize token collection")?;
    serialized.push('\n');
    fs::write(path, serialized).with_context(|| format!("failed to write {}", path.display()))
}

/// Rewrite a content file in place with every string leaf wrapped as a
/// `{"value": ...}` object.
fn wrap_in_place(path: &Path) -> Result<()> {
    anyhow::ensure!(
        DocumentFormat::from_path(path)? == DocumentFormat::Json,
        "wrap rewrites files in place and only supports JSON input"
    );

    let document = load_document(path)?;
    let wrapped = wrap(document);
    let mut serialized =
        serde_json::to_string_pretty(&wrapped).context("serialize wrapped content")?;
    serialized.push('\n');
    fs::write(path, serialized).with_context(|| format!("failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("Wrapped string leaves in '{}'", path.display()).green()
    );
    Ok(())
}
