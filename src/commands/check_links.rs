//! `bindery check-links` command.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config;
use crate::context::ServiceContext;
use crate::links::{self, LinkReport};
use crate::report;

/// Execute the `check-links` command against `ctx`.
///
/// Missing links are findings, not failures: the command succeeds whether or
/// not any are found.
///
/// # Errors
///
/// Returns an error string if the root cannot be scanned or the report cannot
/// be appended.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    report_path: Option<PathBuf>,
    json: bool,
) -> Result<(), String> {
    let findings = links::validate_links(ctx, root)?;

    if let Some(path) = config::report_path(report_path) {
        report::append_section(ctx, &path, &findings.report_section(ctx))?;
        info!(report = %path.display(), "appended link report");
    }

    if json {
        let text = serde_json::to_string_pretty(&findings)
            .map_err(|e| format!("Failed to serialize findings: {e}"))?;
        println!("{text}");
    } else {
        println!("{}", format_summary(&findings));
    }
    Ok(())
}

/// Formats the findings for the terminal.
#[must_use]
pub fn format_summary(findings: &LinkReport) -> String {
    let mut lines = vec![format!(
        "Checked {} route link(s) in {} expanded file(s).",
        findings.refs_checked, findings.files_scanned
    )];
    if findings.is_clean() {
        lines.push("No missing links found.".to_string());
    } else {
        for issue in &findings.issues {
            lines.push(format!("  {}", issue.report_line()));
        }
    }
    lines.join("\n")
}
