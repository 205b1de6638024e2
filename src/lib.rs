//! Core library entry for the `bindery` CLI.
//!
//! `bindery expand` turns every `binder*.md` under a root into a
//! `<stem>_FULL.md` artifact carrying the rule pack and a pointer to the next
//! binder; `bindery check-links` reports route references in those artifacts
//! that point at files which do not exist.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod expand;
pub mod links;
pub mod naming;
pub mod ports;
pub mod report;
pub mod routes;
pub mod rule_pack;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // `--help` and `--version` surface as errors that belong on stdout.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
