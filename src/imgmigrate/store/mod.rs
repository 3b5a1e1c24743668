//! # Storage Layer
//!
//! Every file touched by a migration goes through the [`ContentStore`] trait, so the
//! transform and the traversal driver never call `std::fs` directly.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage on the local filesystem
//!   - Recursive traversal via `walkdir`, sorted by file name, symlinks not followed
//!   - Writes go to a sibling temp file that is renamed over the original, so a crash
//!     or interrupt mid-write never leaves a half-written document
//!
//! - [`memory::InMemoryStore`]: a path-to-text map for tests
//!   - No persistence
//!   - Can simulate unreadable and unwritable files

use crate::error::Result;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// One file found under the migration root.
///
/// A traversal error is kept per entry so a single unreadable directory does not
/// end the whole walk.
pub type ListedFile = std::result::Result<PathBuf, ListError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListError {
    pub path: PathBuf,
    pub message: String,
}

/// Abstract interface over the content tree.
pub trait ContentStore {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Every file under `root` whose name ends with one of `extensions`
    /// (each given with its leading dot), in a stable order.
    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<ListedFile>>;

    fn read(&self, path: &Path) -> Result<String>;

    /// Replace the whole content of `path`.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}

pub(crate) fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
        .unwrap_or(false)
}
