//! Filesystem access used during resolution

use std::path::Path;

/// Filesystem capabilities the resolver depends on
pub trait FileSystem: Send + Sync {
    /// Whether any entry (file, directory, symlink target) exists at `path`
    ///
    /// The path is taken literally, whatever it looks like.
    fn exists(&self, path: &Path) -> bool;
}

/// The real filesystem, relative paths resolved against the current directory
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
