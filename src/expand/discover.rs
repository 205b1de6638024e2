//! Binder discovery and chain ordering.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::naming;
use crate::ports::filesystem::FileSystem;

/// Footer value used when a binder has no successor.
pub const TERMINAL_MARKER: &str = "END";

/// A binder source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binder {
    /// Full path of the binder.
    pub path: PathBuf,
    /// File name, as written in chain footers.
    pub name: String,
    #[serde(skip)]
    key: String,
}

impl Binder {
    /// Creates a binder from its path and file name.
    #[must_use]
    pub fn new(path: PathBuf, name: &str) -> Self {
        Self { path, name: name.to_string(), key: name.to_lowercase() }
    }

    /// Case-insensitive ordering key.
    #[must_use]
    pub fn sort_key(&self) -> &str {
        &self.key
    }

    /// Path of the expanded artifact written next to this binder.
    #[must_use]
    pub fn expanded_path(&self) -> PathBuf {
        self.path.with_file_name(naming::expanded_name_for(&self.name))
    }
}

/// Finds every binder under `root` and sorts them case-insensitively by name.
///
/// The sort is stable, so binders whose names differ only in case (or repeat
/// in different directories) keep walk order.
///
/// # Errors
///
/// Returns an error if `root` cannot be walked.
pub fn discover_binders(fs: &dyn FileSystem, root: &Path) -> Result<Vec<Binder>, String> {
    let files = fs
        .walk_files(root)
        .map_err(|e| format!("Failed to scan {} for binders: {e}", root.display()))?;

    let mut binders: Vec<Binder> = files
        .into_iter()
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            naming::is_binder_name(&name).then(|| Binder::new(path, &name))
        })
        .collect();
    binders.sort_by(|a, b| a.key.cmp(&b.key));

    debug!(count = binders.len(), root = %root.display(), "discovered binders");
    Ok(binders)
}

/// Returns the name the chain footer of `current` points at.
///
/// That is the first binder in `binders` whose case-insensitive name is
/// strictly greater than `current`'s, or [`TERMINAL_MARKER`] when none is.
/// Binders sharing a name all point past the tie, so the chain never refers
/// back to itself.
#[must_use]
pub fn next_binder<'a>(binders: &'a [Binder], current: &Binder) -> &'a str {
    binders
        .iter()
        .find(|b| b.key.as_str() > current.key.as_str())
        .map_or(TERMINAL_MARKER, |b| b.name.as_str())
}
