//! CLI for the bookdrop URL-to-path mapper.

mod commands;

use anyhow::Result;
use bookdrop_core::config;
use bookdrop_core::reference::{ContentFormat, ReferenceKind};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use commands::{run_completions, run_exists, run_resolve};

/// Top-level CLI for bookdrop.
#[derive(Debug, Parser)]
#[command(name = "bookdrop")]
#[command(about = "Map book acquisition URLs to safe local library paths", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the local path a locator maps to.
    Resolve {
        /// Book acquisition URL.
        url: String,

        /// Content format of the resource (none, mobi, fb2.zip, epub).
        #[arg(long, default_value = "none")]
        format: ContentFormat,

        /// What the locator is for (full, demo, buy, ...). Demo locators get
        /// a `.trial` marker in the file name.
        #[arg(long, default_value = "full")]
        kind: ReferenceKind,

        /// Root directory to synthesize under (default: configured books dir).
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Check whether a local copy of the resource already exists.
    /// Prints the path and exits 0 on a hit, exits 1 on a miss.
    Exists {
        /// Book acquisition URL.
        url: String,

        /// Content format of the resource (none, mobi, fb2.zip, epub).
        #[arg(long, default_value = "none")]
        format: ContentFormat,

        /// What the locator is for (full, demo, buy, ...).
        #[arg(long, default_value = "full")]
        kind: ReferenceKind,

        /// Root directory to look under (default: configured books dir).
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to emit completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                url,
                format,
                kind,
                base_dir,
            } => {
                let base = match base_dir {
                    Some(dir) => dir,
                    None => cfg.books_root()?,
                };
                run_resolve(&url, format, kind, &base)?;
            }
            CliCommand::Exists {
                url,
                format,
                kind,
                base_dir,
            } => {
                let base = match base_dir {
                    Some(dir) => dir,
                    None => cfg.books_root()?,
                };
                if !run_exists(&url, format, kind, &base)? {
                    std::process::exit(1);
                }
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}
