//! In-memory filesystem adapter.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;
use crate::ports::PortError;

#[derive(Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
}

/// Filesystem that keeps every file in a map keyed by path.
///
/// Directories exist implicitly when a file lives under them, or explicitly
/// via [`MemoryFileSystem::add_dir`]. Paths marked with
/// [`MemoryFileSystem::deny_writes`] reject `write` and `append`.
#[derive(Default)]
pub struct MemoryFileSystem {
    tree: Mutex<Tree>,
}

impl MemoryFileSystem {
    /// Creates an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a UTF-8 file, replacing any previous contents.
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &str) {
        self.add_bytes(path, contents.as_bytes());
    }

    /// Adds a file with arbitrary bytes.
    pub fn add_bytes(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        let mut tree = self.tree.lock().expect("memory fs lock poisoned");
        tree.files.insert(path.into(), contents.to_vec());
    }

    /// Adds an empty directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut tree = self.tree.lock().expect("memory fs lock poisoned");
        tree.dirs.insert(path.into());
    }

    /// Makes every later `write` or `append` to `path` fail.
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        let mut tree = self.tree.lock().expect("memory fs lock poisoned");
        tree.read_only.insert(path.into());
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>, PortError> {
        let tree = self.tree.lock().expect("memory fs lock poisoned");
        tree.files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn dir_exists(tree: &Tree, path: &Path) -> bool {
        tree.dirs.iter().any(|d| d.starts_with(path))
            || tree.files.keys().any(|k| k.starts_with(path) && k != path)
    }

    fn check_writable(tree: &Tree, path: &Path) -> Result<(), PortError> {
        if tree.read_only.contains(path) {
            return Err(format!("Permission denied: {}", path.display()).into());
        }
        Ok(())
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, PortError> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8(bytes)?)
    }

    fn read_lossy(&self, path: &Path) -> Result<String, PortError> {
        let bytes = self.read_bytes(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut tree = self.tree.lock().expect("memory fs lock poisoned");
        Self::check_writable(&tree, path)?;
        tree.files.insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }

    fn append(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let mut tree = self.tree.lock().expect("memory fs lock poisoned");
        Self::check_writable(&tree, path)?;
        tree.files.entry(path.to_path_buf()).or_default().extend_from_slice(contents.as_bytes());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let tree = self.tree.lock().expect("memory fs lock poisoned");
        tree.files.contains_key(path) || Self::dir_exists(&tree, path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let tree = self.tree.lock().expect("memory fs lock poisoned");
        Self::dir_exists(&tree, path)
    }

    fn walk_files(&self, root: &Path) -> Result<Vec<PathBuf>, PortError> {
        let tree = self.tree.lock().expect("memory fs lock poisoned");
        if !Self::dir_exists(&tree, root) {
            return Err(format!("Not a directory: {}", root.display()).into());
        }
        Ok(tree.files.keys().filter(|k| k.starts_with(root) && *k != root).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_exist_implicitly() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/root/app/(app)/leads/page.tsx", "x");

        assert!(fs.is_dir(Path::new("/root/app")));
        assert!(fs.exists(Path::new("/root/app/(app)/leads/page.tsx")));
        assert!(!fs.is_dir(Path::new("/root/app/(app)/leads/page.tsx")));
        assert!(!fs.exists(Path::new("/root/pages")));
    }

    #[test]
    fn walk_files_is_path_ordered() {
        let fs = MemoryFileSystem::new();
        fs.add_file("/r/c.md", "");
        fs.add_file("/r/b/z.md", "");
        fs.add_file("/r/a.md", "");
        fs.add_file("/other/a.md", "");

        let files = fs.walk_files(Path::new("/r")).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("/r/a.md"), PathBuf::from("/r/b/z.md"), PathBuf::from("/r/c.md")]
        );
    }

    #[test]
    fn strict_read_rejects_invalid_utf8() {
        let fs = MemoryFileSystem::new();
        fs.add_bytes("/r/bad.md", b"\xff\xfe");

        assert!(fs.read_to_string(Path::new("/r/bad.md")).is_err());
        assert_eq!(fs.read_lossy(Path::new("/r/bad.md")).unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn denied_writes_fail() {
        let fs = MemoryFileSystem::new();
        fs.deny_writes("/r/out.md");

        assert!(fs.write(Path::new("/r/out.md"), "x").is_err());
        assert!(fs.append(Path::new("/r/out.md"), "x").is_err());
        assert!(fs.write(Path::new("/r/other.md"), "x").is_ok());
    }
}
