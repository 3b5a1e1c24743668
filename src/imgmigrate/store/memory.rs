use super::{has_extension, ContentStore, ListError, ListedFile};
use crate::error::{MigrateError, Result};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    unlistable: BTreeSet<PathBuf>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Reads of this path fail with a permission error.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.files.entry(path.clone()).or_default();
        self.unreadable.insert(path);
        self
    }

    /// Writes to this path fail with a permission error.
    pub fn with_read_only(mut self, path: impl Into<PathBuf>) -> Self {
        self.read_only.insert(path.into());
        self
    }

    /// Listing fails at this directory, as with an unreadable directory on disk.
    /// Files below it are not listed.
    pub fn with_unlistable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unlistable.insert(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

fn permission_denied(path: &Path) -> MigrateError {
    MigrateError::Io(io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("permission denied: {}", path.display()),
    ))
}

impl ContentStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file != path && file.starts_with(path))
    }

    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<ListedFile>> {
        let hidden = |path: &Path| self.unlistable.iter().any(|dir| path.starts_with(dir));

        let mut listed: BTreeMap<&Path, ListedFile> = self
            .files
            .keys()
            .filter(|path| path.starts_with(root) && !hidden(path.as_path()))
            .filter(|path| has_extension(path, extensions))
            .map(|path| (path.as_path(), Ok(path.clone())))
            .collect();

        for dir in self.unlistable.iter().filter(|dir| dir.starts_with(root)) {
            listed.insert(
                dir.as_path(),
                Err(ListError {
                    path: dir.clone(),
                    message: format!("permission denied: {}", dir.display()),
                }),
            );
        }

        Ok(listed.into_values().collect())
    }

    fn read(&self, path: &Path) -> Result<String> {
        if self.unreadable.contains(path) {
            return Err(permission_denied(path));
        }
        self.files.get(path).cloned().ok_or_else(|| {
            MigrateError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            ))
        })
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(permission_denied(path));
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        self.writes += 1;
        Ok(())
    }
}
