//! Command dispatch and handlers.

pub mod check_links;
pub mod expand;

use crate::cli::Command;
use crate::context::ServiceContext;
use crate::expand::ExpandOptions;

/// Dispatch a parsed command to its handler.
///
/// When `SOURCE_DATE_EPOCH` is set, generated timestamps and run ids are
/// pinned so that repeated runs produce identical output.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::from_env();
    dispatch_with_context(command, &ctx)
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Expand { root, rule_pack, report, dry_run, json } => expand::run_with_context(
            ctx,
            root,
            rule_pack.clone(),
            report.clone(),
            ExpandOptions { dry_run: *dry_run },
            *json,
        ),
        Command::CheckLinks { root, report, json } => {
            check_links::run_with_context(ctx, root, report.clone(), *json)
        }
    }
}
