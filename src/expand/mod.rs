//! Binder expansion.
//!
//! Discovers binders under a root, writes one `<stem>_FULL.md` artifact per
//! binder with the rule pack and a chaining footer appended, and checks the
//! root for duplicate routes.

pub mod discover;
pub mod render;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::report::ReportSection;
use crate::routes::{self, RouteConflict};
use crate::rule_pack::RulePack;

pub use discover::{discover_binders, next_binder, Binder, TERMINAL_MARKER};
pub use render::{parse_next_binder, parse_rule_pack_appendix, render_expanded};

/// Title of the report sections written by an expansion run.
pub const REPORT_TITLE: &str = "Binder expansion";

/// Options for an expansion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandOptions {
    /// Compute outcomes without writing any artifact.
    pub dry_run: bool,
}

/// What happened to one binder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BinderOutcome {
    /// The artifact was written (or would be, in a dry run).
    Expanded {
        /// Binder file name.
        binder: String,
        /// Artifact path.
        destination: PathBuf,
        /// Name in the chaining footer.
        next: String,
    },
    /// Reading or writing failed; later binders were still processed.
    Failed {
        /// Binder file name.
        binder: String,
        /// Binder path.
        path: PathBuf,
        /// Why it failed.
        reason: String,
    },
}

impl BinderOutcome {
    /// Formats the outcome as a single report line.
    #[must_use]
    pub fn report_line(&self) -> String {
        match self {
            Self::Expanded { binder, destination, next } => {
                format!("OK {binder} -> {} (next: {next})", destination.display())
            }
            Self::Failed { binder, path, reason } => {
                format!("ERROR {binder} ({}): {reason}", path.display())
            }
        }
    }
}

/// Result of an expansion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandOutcome {
    /// Scan root.
    pub root: PathBuf,
    /// Whether artifacts were actually written.
    pub dry_run: bool,
    /// Per-binder outcomes in chain order.
    pub binders: Vec<BinderOutcome>,
    /// Duplicate routes found under the root.
    pub conflicts: Vec<RouteConflict>,
}

impl ExpandOutcome {
    /// Number of binders expanded.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.binders.iter().filter(|b| matches!(b, BinderOutcome::Expanded { .. })).count()
    }

    /// Number of binders that failed.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.binders.len() - self.expanded_count()
    }

    /// Builds the report section for this run.
    #[must_use]
    pub fn report_section(&self, ctx: &ServiceContext) -> ReportSection {
        let mut section = ReportSection::begin(ctx, REPORT_TITLE);
        section.push(format!("root: {}", self.root.display()));
        if self.binders.is_empty() {
            section.push("No binders found.");
        }
        for outcome in &self.binders {
            section.push(outcome.report_line());
        }
        section.push("Route conflicts:");
        if self.conflicts.is_empty() {
            section.push("(none)");
        }
        for conflict in &self.conflicts {
            section.push(conflict.report_line());
        }
        section
    }
}

/// Expands every binder under `root`.
///
/// Binders are processed one at a time in chain order. A binder that cannot
/// be read (including invalid UTF-8) or whose artifact cannot be written is
/// recorded as [`BinderOutcome::Failed`] and the run moves on; artifacts
/// already written by the run are left in place.
///
/// # Errors
///
/// Returns an error only when `root` is not a directory or cannot be walked.
pub fn expand_all(
    ctx: &ServiceContext,
    root: &Path,
    rule_pack: &RulePack,
    options: ExpandOptions,
) -> Result<ExpandOutcome, String> {
    if !ctx.fs.is_dir(root) {
        return Err(format!("Scan root is not a directory: {}", root.display()));
    }

    let binders = discover_binders(ctx.fs.as_ref(), root)?;
    let generated_at = ctx.clock.now();
    info!(root = %root.display(), count = binders.len(), dry_run = options.dry_run, "expanding binders");

    let mut outcomes = Vec::with_capacity(binders.len());
    for binder in &binders {
        let next = next_binder(&binders, binder);
        let destination = binder.expanded_path();
        let result = ctx
            .fs
            .read_to_string(&binder.path)
            .map_err(|e| format!("read failed: {e}"))
            .and_then(|content| {
                let text = render_expanded(&binder.name, &content, rule_pack, next, generated_at);
                if options.dry_run {
                    return Ok(());
                }
                ctx.fs.write(&destination, &text).map_err(|e| format!("write failed: {e}"))
            });

        let outcome = match result {
            Ok(()) => {
                debug!(binder = %binder.name, next, "expanded");
                BinderOutcome::Expanded {
                    binder: binder.name.clone(),
                    destination,
                    next: next.to_string(),
                }
            }
            Err(reason) => {
                warn!(binder = %binder.path.display(), %reason, "binder failed");
                BinderOutcome::Failed {
                    binder: binder.name.clone(),
                    path: binder.path.clone(),
                    reason,
                }
            }
        };
        outcomes.push(outcome);
    }

    let conflicts = routes::detect_route_conflicts(ctx.fs.as_ref(), root);
    for conflict in &conflicts {
        info!(legacy = %conflict.legacy, modern = %conflict.modern, "duplicate route");
    }

    Ok(ExpandOutcome {
        root: root.to_path_buf(),
        dry_run: options.dry_run,
        binders: outcomes,
        conflicts,
    })
}
