//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `bindery`.
#[derive(Debug, Parser)]
#[command(name = "bindery", version, about = "Expand binder documents and check their route links")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a chained `<name>_FULL.md` artifact for every binder under ROOT.
    Expand {
        /// Directory to scan recursively for `binder*.md` files.
        root: PathBuf,
        /// Rule-pack document (JSON, or YAML by extension) to embed.
        ///
        /// Defaults to `$BINDERY_RULE_PACK`, then `rules/rule_pack.json`
        /// next to the executable.
        #[arg(long, value_name = "FILE")]
        rule_pack: Option<PathBuf>,
        /// Report file to append a run section to. Defaults to `$BINDERY_REPORT`.
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
        /// Show what would be written without touching any file.
        #[arg(long)]
        dry_run: bool,
        /// Print the run outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report `(app/...)` and `(pages/...)` references in expanded artifacts
    /// that point at missing files.
    CheckLinks {
        /// Directory to scan recursively for `*_FULL.md` files.
        root: PathBuf,
        /// Report file to append a run section to. Defaults to `$BINDERY_REPORT`.
        #[arg(long, value_name = "FILE")]
        report: Option<PathBuf>,
        /// Print the findings as JSON.
        #[arg(long)]
        json: bool,
    },
}
