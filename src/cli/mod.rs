//! Command-line interface for tree-tally
//!
//! A single flat command: count the given paths and print per-file and
//! total report lines.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::load_config;
use crate::domain::Mask;
use crate::render::ConsoleReporter;
use crate::scan::{process_roots, IgnoreFilter};

/// Streaming line, word, character, and byte counts for files and directory trees
#[derive(Parser)]
#[command(name = "tree-tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files and/or directories to count
    #[arg(value_name = "PATHS")]
    paths: Vec<PathBuf>,

    /// Report line counts
    #[arg(short = 'l', long)]
    lines: bool,

    /// Report word counts
    #[arg(short = 'w', long)]
    words: bool,

    /// Report character counts
    #[arg(short = 'm', long)]
    characters: bool,

    /// Report byte counts
    #[arg(short = 'c', long)]
    bytes: bool,

    /// File extension to ignore, leading dot included (repeatable)
    #[arg(short = 'i', long = "ignore-extension", value_name = "EXT")]
    ignore_extensions: Vec<String>,

    /// Exact file or directory name to ignore (repeatable)
    #[arg(short = 'n', long = "ignore-name", value_name = "NAME")]
    ignore_names: Vec<String>,

    /// Explicit config file (TOML or YAML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Roots are validated up front; entries that disappear once the
    // traversal is underway are skipped silently instead.
    for path in &cli.paths {
        if !path.exists() {
            anyhow::bail!("Path does not exist: {}", path.display());
        }
    }

    let working_dir = std::env::current_dir()?;
    let config = load_config(&working_dir, cli.config.as_deref())?;

    let mask = Mask::from_flags(cli.lines, cli.words, cli.characters, cli.bytes);

    let mut ignored_extensions = config.ignored_extensions;
    ignored_extensions.extend(cli.ignore_extensions);
    let mut ignored_names = config.ignored_names;
    ignored_names.extend(cli.ignore_names);
    let filter = IgnoreFilter::new(ignored_extensions, ignored_names);

    let stdout = io::stdout();
    let mut reporter = ConsoleReporter::new(stdout.lock());
    process_roots(&cli.paths, mask, &filter, &mut reporter)?;

    Ok(())
}
