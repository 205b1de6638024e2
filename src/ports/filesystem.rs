//! Filesystem port for file I/O operations.

use std::path::{Path, PathBuf};

use super::PortError;

/// Provides filesystem access for discovering, reading, and writing files.
///
/// Abstracting the filesystem lets the expander and the link validator be
/// exercised against an in-memory tree in tests.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, PortError>;

    /// Reads a file, replacing invalid UTF-8 sequences with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bytes cannot be read at all.
    fn read_lossy(&self, path: &Path) -> Result<String, PortError>;

    /// Writes the given contents to a file, creating or overwriting it.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Appends the given contents to a file, creating it when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened for appending.
    fn append(&self, path: &Path, contents: &str) -> Result<(), PortError>;

    /// Returns `true` if the path exists on the filesystem.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if the path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Lists every regular file under `root`, recursively.
    ///
    /// Symbolic links are followed and reported under their link path;
    /// link loops are skipped. Entries are yielded in a deterministic order: siblings are sorted by
    /// file name.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be read.
    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError>;
}
