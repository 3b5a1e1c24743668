use super::{has_extension, ContentStore, ListError, ListedFile};
use crate::error::{MigrateError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Default, Clone, Copy)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }

    fn temp_dir_for(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl ContentStore for FileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<ListedFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
            match entry {
                Ok(entry) => {
                    if !has_extension(entry.path(), extensions) {
                        continue;
                    }
                    if entry.file_type().is_file() {
                        files.push(Ok(entry.into_path()));
                    } else if entry.path_is_symlink() {
                        // Linked posts are visited; dangling links are reported.
                        match fs::metadata(entry.path()) {
                            Ok(meta) if meta.is_file() => files.push(Ok(entry.into_path())),
                            Ok(_) => {}
                            Err(err) => files.push(Err(ListError {
                                path: entry.into_path(),
                                message: err.to_string(),
                            })),
                        }
                    }
                }
                Err(err) => {
                    let path = err
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    files.push(Err(ListError {
                        path,
                        message: err.to_string(),
                    }));
                }
            }
        }

        debug!(root = %root.display(), count = files.len(), "listed content files");
        Ok(files)
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(MigrateError::Io)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        // Rename over the link target, not the link.
        let target = fs::canonicalize(path).map_err(MigrateError::Io)?;
        // Keep the original mode; temp files are created 0600.
        let permissions = fs::metadata(&target)
            .map_err(MigrateError::Io)?
            .permissions();

        let mut tmp =
            NamedTempFile::new_in(Self::temp_dir_for(&target)).map_err(MigrateError::Io)?;
        tmp.write_all(content.as_bytes())
            .map_err(MigrateError::Io)?;
        tmp.as_file().sync_all().map_err(MigrateError::Io)?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(MigrateError::Io)?;
        tmp.persist(&target)
            .map_err(|e| MigrateError::Io(e.error))?;

        debug!(path = %path.display(), target = %target.display(), bytes = content.len(), "wrote file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md() -> Vec<String> {
        vec![".md".to_string()]
    }

    #[test]
    fn lists_markdown_files_recursively_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("posts/2024")).unwrap();
        fs::write(root.join("b.md"), "").unwrap();
        fs::write(root.join("a.md"), "").unwrap();
        fs::write(root.join("notes.txt"), "").unwrap();
        fs::write(root.join("posts/2024/c.md"), "").unwrap();

        let files: Vec<PathBuf> = FileStore::new()
            .list_files(root, &md())
            .unwrap()
            .into_iter()
            .map(|f| f.unwrap())
            .collect();

        assert_eq!(
            files,
            vec![
                root.join("a.md"),
                root.join("b.md"),
                root.join("posts/2024/c.md"),
            ]
        );
    }

    #[test]
    fn directories_named_like_markdown_are_not_listed() {
        let temp = tempfile::tempdir().unwrap();
        fs::create_dir_all(temp.path().join("folder.md")).unwrap();

        let files = FileStore::new().list_files(temp.path(), &md()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn write_replaces_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("post.md");
        fs::write(&path, "old").unwrap();

        let mut store = FileStore::new();
        store.write(&path, "new content").unwrap();

        assert_eq!(store.read(&path).unwrap(), "new content");
        // No temp files left behind
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn write_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("post.md");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        FileStore::new().write(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn read_missing_file_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = FileStore::new()
            .read(&temp.path().join("missing.md"))
            .unwrap_err();
        assert!(matches!(err, MigrateError::Io(_)));
    }

    #[test]
    fn read_invalid_utf8_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bin.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(
            FileStore::new().read(&path),
            Err(MigrateError::Io(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_posts_are_listed_and_written_through() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("real.md"), "real").unwrap();
        fs::write(temp.path().join("shared.md"), "shared").unwrap();
        symlink("../shared.md", content.join("linked.md")).unwrap();

        let mut store = FileStore::new();
        let files: Vec<PathBuf> = store
            .list_files(&content, &md())
            .unwrap()
            .into_iter()
            .map(|f| f.unwrap())
            .collect();
        assert_eq!(files, vec![content.join("linked.md"), content.join("real.md")]);

        store.write(&content.join("linked.md"), "updated").unwrap();

        let link_meta = fs::symlink_metadata(content.join("linked.md")).unwrap();
        assert!(link_meta.file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(temp.path().join("shared.md")).unwrap(),
            "updated"
        );
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_an_error_entry() {
        use std::os::unix::fs::symlink;

        let temp = tempfile::tempdir().unwrap();
        symlink("missing.md", temp.path().join("gone.md")).unwrap();

        let files = FileStore::new().list_files(temp.path(), &md()).unwrap();

        assert_eq!(files.len(), 1);
        let err = files[0].clone().unwrap_err();
        assert_eq!(err.path, temp.path().join("gone.md"));
    }
}
