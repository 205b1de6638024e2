//! Append-only plain-text run reports.
//!
//! Every run appends one section:
//!
//! ```text
//! === <title> | <UTC timestamp> | run <id> ===
//! <line>
//! <line>
//!
//! ```

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::context::ServiceContext;

/// One timestamped section of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSection {
    /// What produced the section (e.g. "Binder expansion").
    pub title: String,
    /// When the run started.
    pub generated_at: DateTime<Utc>,
    /// Identifier distinguishing this run from concurrent ones.
    pub run_id: String,
    /// Body lines, without trailing newlines.
    pub lines: Vec<String>,
}

impl ReportSection {
    /// Starts an empty section stamped with the context's clock and a new run id.
    #[must_use]
    pub fn begin(ctx: &ServiceContext, title: &str) -> Self {
        Self {
            title: title.to_string(),
            generated_at: ctx.clock.now(),
            run_id: ctx.id_gen.generate_id(),
            lines: Vec::new(),
        }
    }

    /// Adds a body line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Renders the section, header first, followed by a blank separator line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!(
            "=== {} | {} | run {} ===\n",
            self.title,
            format_timestamp(self.generated_at),
            self.run_id
        );
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Appends `section` to the report at `path`, creating the file if needed.
///
/// # Errors
///
/// Returns an error if the report cannot be opened or written.
pub fn append_section(
    ctx: &ServiceContext,
    path: &Path,
    section: &ReportSection,
) -> Result<(), String> {
    ctx.fs
        .append(path, &section.render())
        .map_err(|e| format!("Failed to append report {}: {e}", path.display()))
}

/// Formats a timestamp as RFC 3339 UTC with second precision (`...Z`).
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
