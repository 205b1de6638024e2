//! `bindery expand` command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config;
use crate::context::ServiceContext;
use crate::expand::{self, BinderOutcome, ExpandOptions, ExpandOutcome};
use crate::report;
use crate::rule_pack::RulePack;

/// Execute the `expand` command against `ctx`.
///
/// The rule pack is loaded before any binder is touched; a missing or
/// malformed rule pack aborts the run. Per-binder failures do not.
///
/// # Errors
///
/// Returns an error string if the root is not a directory, the rule pack
/// cannot be loaded, or the report cannot be appended.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    rule_pack: Option<PathBuf>,
    report_path: Option<PathBuf>,
    options: ExpandOptions,
    json: bool,
) -> Result<(), String> {
    if !ctx.fs.is_dir(root) {
        return Err(format!("Scan root is not a directory: {}", root.display()));
    }
    let rule_pack_path = config::rule_pack_path(rule_pack)?;
    let pack = RulePack::load(ctx.fs.as_ref(), &rule_pack_path)?;
    info!(rule_pack = %rule_pack_path.display(), "loaded rule pack");

    let outcome = expand::expand_all(ctx, root, &pack, options)?;

    if let Some(path) = config::report_path(report_path).filter(|_| !options.dry_run) {
        report::append_section(ctx, &path, &outcome.report_section(ctx))?;
        info!(report = %path.display(), "appended expansion report");
    }

    if json {
        let text = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("Failed to serialize outcome: {e}"))?;
        println!("{text}");
    } else {
        println!("{}", format_summary(&outcome));
    }
    Ok(())
}

/// Formats a short human-readable summary of an expansion run.
#[must_use]
pub fn format_summary(outcome: &ExpandOutcome) -> String {
    let mut lines = Vec::new();
    if outcome.dry_run {
        lines.push("Dry run, nothing written. Would perform:".to_string());
        for binder in &outcome.binders {
            if let BinderOutcome::Expanded { binder, destination, next } = binder {
                lines.push(format!("  {binder} -> {} (next: {next})", destination.display()));
            }
        }
    }
    lines.push(format!(
        "Expanded {} binder(s), {} failed, {} route conflict(s).",
        outcome.expanded_count(),
        outcome.failed_count(),
        outcome.conflicts.len()
    ));
    lines.join("\n")
}
