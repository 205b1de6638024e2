//! Expanded artifact layout.
//!
//! An expanded artifact is, in order: a generated header, the binder content
//! byte-for-byte, the rule-pack appendix, and the chaining footer.

use chrono::{DateTime, Utc};

use crate::naming;
use crate::report::format_timestamp;
use crate::rule_pack::RulePack;

/// Heading that opens the rule-pack appendix.
pub const APPENDIX_HEADING: &str = "## APPENDIX: RULE PACK SNAPSHOT";

/// Heading that opens the chaining footer.
pub const FOOTER_HEADING: &str = "## CONTINUE";

/// Footer key naming the next binder.
pub const NEXT_BINDER_KEY: &str = "NEXT_BINDER: ";

/// Execution-mode annotations written under the next-binder line.
pub const EXECUTION_ANNOTATIONS: [&str; 2] =
    ["EXECUTION_MODE: sequential", "ON_COMPLETE: continue to NEXT_BINDER without pausing"];

const JSON_FENCE: &str = "```json\n";
const CLOSING_FENCE: &str = "\n```";

/// Builds the full text of an expanded artifact.
#[must_use]
pub fn render_expanded(
    binder_name: &str,
    content: &str,
    rule_pack: &RulePack,
    next: &str,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::with_capacity(content.len() + 512);

    out.push_str("# ");
    out.push_str(&naming::expanded_name_for(binder_name));
    out.push_str("\n> Generated by bindery from `");
    out.push_str(binder_name);
    out.push_str("` at ");
    out.push_str(&format_timestamp(generated_at));
    out.push_str(" (UTC)\n\n");

    out.push_str(content);
    if !content.ends_with('\n') {
        out.push('\n');
    }

    out.push_str("\n---\n\n");
    out.push_str(APPENDIX_HEADING);
    out.push_str("\n\n");
    out.push_str(JSON_FENCE);
    out.push_str(&rule_pack.to_pretty_json());
    out.push_str(CLOSING_FENCE);
    out.push_str("\n\n---\n\n");

    out.push_str(FOOTER_HEADING);
    out.push_str("\n\n");
    out.push_str(NEXT_BINDER_KEY);
    out.push_str(next);
    out.push('\n');
    for annotation in EXECUTION_ANNOTATIONS {
        out.push_str(annotation);
        out.push('\n');
    }
    out
}

/// Reads the next-binder reference back out of an expanded artifact.
///
/// The last `NEXT_BINDER:` line wins, since binder content may quote one.
#[must_use]
pub fn parse_next_binder(expanded: &str) -> Option<&str> {
    let start = expanded.rfind(NEXT_BINDER_KEY)? + NEXT_BINDER_KEY.len();
    expanded[start..].lines().next().map(str::trim_end)
}

/// Reads the rule pack back out of an expanded artifact's appendix.
///
/// # Errors
///
/// Returns an error if the appendix is missing or does not parse.
pub fn parse_rule_pack_appendix(expanded: &str) -> Result<RulePack, String> {
    let heading = expanded
        .rfind(APPENDIX_HEADING)
        .ok_or_else(|| "no rule pack appendix found".to_string())?;
    let after = &expanded[heading..];
    let body_start = after
        .find(JSON_FENCE)
        .ok_or_else(|| "rule pack appendix has no json block".to_string())?
        + JSON_FENCE.len();
    let body = &after[body_start..];
    let body_end =
        body.find(CLOSING_FENCE).ok_or_else(|| "rule pack json block is not closed".to_string())?;
    RulePack::parse(&body[..body_end], false)
}
