//! Route-link validation for expanded artifacts.
//!
//! Scans every `*_FULL.md` under a root for parenthesized `(app/...)` and
//! `(pages/...)` references and reports the ones that do not exist on disk.
//! Matching is done on raw text: a reference inside prose or a code block
//! counts the same as one inside a markdown link.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::context::ServiceContext;
use crate::naming;
use crate::report::ReportSection;

/// Title of the report sections written by a validation run.
pub const REPORT_TITLE: &str = "Link validation";

/// A route reference that does not resolve under the scan root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkIssue {
    /// File name of the expanded artifact holding the reference.
    pub file: String,
    /// The referenced path, relative to the scan root.
    pub path: String,
}

impl LinkIssue {
    /// Formats the issue as a single report line.
    #[must_use]
    pub fn report_line(&self) -> String {
        format!("MISSING {} -> {}", self.file, self.path)
    }
}

/// Result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Scan root.
    pub root: PathBuf,
    /// Number of expanded artifacts scanned.
    pub files_scanned: usize,
    /// Number of route references checked.
    pub refs_checked: usize,
    /// Unresolved references, in discovery order.
    pub issues: Vec<LinkIssue>,
}

impl LinkReport {
    /// Returns `true` if every reference resolved.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Builds the report section for this run.
    #[must_use]
    pub fn report_section(&self, ctx: &ServiceContext) -> ReportSection {
        let mut section = ReportSection::begin(ctx, REPORT_TITLE);
        section.push(format!("root: {}", self.root.display()));
        if self.is_clean() {
            section.push("No missing links found.");
        }
        for issue in &self.issues {
            section.push(issue.report_line());
        }
        section
    }
}

fn route_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\(((?:app|pages)/[^)]+)\)").expect("route reference pattern compiles")
    })
}

/// Extracts every `(app/...)` and `(pages/...)` reference from `text`.
///
/// Each candidate runs up to the first closing parenthesis; the returned
/// strings exclude the surrounding parentheses. Repeats are kept.
#[must_use]
pub fn extract_route_refs(text: &str) -> Vec<&str> {
    route_ref_pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

/// Lists every expanded artifact under `root`, in walk order.
///
/// # Errors
///
/// Returns an error if `root` cannot be walked.
pub fn discover_expanded(ctx: &ServiceContext, root: &Path) -> Result<Vec<PathBuf>, String> {
    let files = ctx
        .fs
        .walk_files(root)
        .map_err(|e| format!("Failed to scan {} for expanded binders: {e}", root.display()))?;
    Ok(files
        .into_iter()
        .filter(|p| p.file_name().and_then(|n| n.to_str()).is_some_and(naming::is_expanded_name))
        .collect())
}

/// Checks every route reference in every expanded artifact under `root`.
///
/// Files are decoded leniently; a file that cannot be read at all is skipped
/// with a warning. Each distinct (file, path) pair is reported at most once.
///
/// # Errors
///
/// Returns an error only when `root` is not a directory or cannot be walked.
pub fn validate_links(ctx: &ServiceContext, root: &Path) -> Result<LinkReport, String> {
    if !ctx.fs.is_dir(root) {
        return Err(format!("Scan root is not a directory: {}", root.display()));
    }

    let files = discover_expanded(ctx, root)?;
    info!(root = %root.display(), count = files.len(), "validating route links");

    let mut issues = Vec::new();
    let mut refs_checked = 0;
    for file in &files {
        let text = match ctx.fs.read_lossy(file) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %file.display(), error = %e, "skipping unreadable artifact");
                continue;
            }
        };
        let file_name =
            file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();

        let mut seen = HashSet::new();
        for candidate in extract_route_refs(&text) {
            refs_checked += 1;
            if ctx.fs.exists(&root.join(candidate)) || !seen.insert(candidate) {
                continue;
            }
            debug!(file = %file_name, path = candidate, "missing route link");
            issues.push(LinkIssue { file: file_name.clone(), path: candidate.to_string() });
        }
    }

    Ok(LinkReport { root: root.to_path_buf(), files_scanned: files.len(), refs_checked, issues })
}
