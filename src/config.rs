//! Environment-backed defaults for CLI options.
//!
//! Flags always win; these helpers supply the fallback when a flag is absent.
//! `main` loads a `.env` file first, so every variable here may also come
//! from there.

use std::path::PathBuf;

/// Environment variable naming the default rule-pack file.
pub const RULE_PACK_ENV: &str = "BINDERY_RULE_PACK";

/// Environment variable naming the default report file.
pub const REPORT_ENV: &str = "BINDERY_REPORT";

/// Environment variable pinning generated timestamps (seconds since epoch).
pub const SOURCE_DATE_EPOCH_ENV: &str = "SOURCE_DATE_EPOCH";

/// Rule-pack location relative to the directory holding the executable.
pub const BUNDLED_RULE_PACK: &str = "rules/rule_pack.json";

/// Resolves the rule-pack path: explicit flag, then `BINDERY_RULE_PACK`,
/// then the copy bundled next to the executable.
///
/// # Errors
///
/// Returns an error when no flag or env var is given and the executable's
/// location cannot be determined.
pub fn rule_pack_path(flag: Option<PathBuf>) -> Result<PathBuf, String> {
    if let Some(path) = flag.or_else(|| env_path(RULE_PACK_ENV)) {
        return Ok(path);
    }
    let exe = std::env::current_exe()
        .map_err(|e| format!("Failed to locate the bindery executable: {e}"))?;
    let dir = exe.parent().map(std::path::Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(BUNDLED_RULE_PACK))
}

/// Resolves the report path: explicit flag, then `BINDERY_REPORT`.
///
/// `None` means no report is written.
#[must_use]
pub fn report_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| env_path(REPORT_ENV))
}

/// Reads `SOURCE_DATE_EPOCH` as whole seconds, ignoring unparsable values.
#[must_use]
pub fn source_date_epoch() -> Option<i64> {
    std::env::var(SOURCE_DATE_EPOCH_ENV).ok().and_then(|v| v.trim().parse().ok())
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}
