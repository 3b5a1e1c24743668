use super::{transform, FileReport, MigrationReport, Outcome};
use crate::config::MigrateOptions;
use crate::error::{MigrateError, Result};
use crate::store::ContentStore;
use std::ops::ControlFlow;
use std::path::Path;
use tracing::{info, warn};

/// Fails unless `root` is an existing directory.
pub fn check_root<S: ContentStore>(store: &S, root: &Path) -> Result<()> {
    if !store.exists(root) {
        return Err(MigrateError::DirectoryNotFound(root.to_path_buf()));
    }
    if !store.is_dir(root) {
        return Err(MigrateError::NotADirectory(root.to_path_buf()));
    }
    Ok(())
}

/// Runs the transform over every matching file under `root`.
///
/// `observer` sees each file's report as soon as it is decided, so callers can show
/// progress. Returning `ControlFlow::Break` stops the run before the next file with
/// [`MigrateError::Interrupted`]; files already written stay written.
pub fn run<S, F>(
    store: &mut S,
    root: &Path,
    options: &MigrateOptions,
    mut observer: F,
) -> Result<MigrationReport>
where
    S: ContentStore,
    F: FnMut(&FileReport) -> ControlFlow<()>,
{
    check_root(&*store, root)?;

    info!(root = %root.display(), mode = ?options.mode, extensions = ?options.extensions, "starting migration");

    let mut report = MigrationReport::new(root, options.mode);

    for listed in store.list_files(root, &options.extensions)? {
        let file_report = match listed {
            Ok(path) => {
                let outcome = transform::run(store, &path, options.mode);
                FileReport { path, outcome }
            }
            Err(err) => {
                warn!(path = %err.path.display(), error = %err.message, "failed to visit entry");
                FileReport {
                    path: err.path,
                    outcome: Outcome::Error {
                        message: err.message,
                    },
                }
            }
        };

        let flow = observer(&file_report);
        report.push(file_report);
        if flow.is_break() {
            info!(
                affected = report.affected,
                skipped = report.skipped,
                "migration interrupted"
            );
            return Err(MigrateError::Interrupted);
        }
    }

    info!(
        affected = report.affected,
        skipped = report.skipped,
        "migration finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::SkipReason;
    use crate::config::Mode;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    const WITH_IMAGE: &str = "+++\ntitle = \"A\"\n+++\n![a](a.png)\n";
    const HAS_KEY: &str = "+++\nimage = 'x.png'\n+++\n![a](a.png)\n";
    const NO_IMAGE: &str = "+++\ntitle = \"B\"\n+++\ntext\n";
    const NO_FM: &str = "# plain\n![a](a.png)\n";

    fn site() -> InMemoryStore {
        InMemoryStore::new()
            .with_file("content/posts/one.md", WITH_IMAGE)
            .with_file("content/posts/two.md", WITH_IMAGE)
            .with_file("content/posts/three.md", HAS_KEY)
            .with_file("content/about.md", NO_IMAGE)
            .with_file("content/raw.md", NO_FM)
            .with_file("content/notes.txt", WITH_IMAGE)
    }

    fn noop(_: &FileReport) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    #[test]
    fn dry_run_counts_without_mutating() {
        let mut store = site();
        let report = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::new(Mode::DryRun),
            noop,
        )
        .unwrap();

        assert!(report.is_dry_run());
        assert_eq!(report.affected, 2);
        assert_eq!(report.skipped, 3);
        assert_eq!(store.writes(), 0);
        assert_eq!(store.get("content/posts/one.md"), Some(WITH_IMAGE));
    }

    #[test]
    fn write_mode_count_matches_files_changed() {
        let mut store = site();
        let report = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::new(Mode::Write),
            noop,
        )
        .unwrap();

        assert_eq!(report.affected, 2);
        assert_eq!(store.writes(), report.affected);
        assert_eq!(report.skipped_for(SkipReason::HasImage), 1);
        assert_eq!(report.skipped_for(SkipReason::NoImage), 1);
        assert_eq!(report.skipped_for(SkipReason::NoFrontMatter), 1);
        assert_eq!(store.get("content/notes.txt"), Some(WITH_IMAGE));
    }

    #[test]
    fn second_run_changes_nothing() {
        let mut store = site();
        let options = MigrateOptions::new(Mode::Write);
        run(&mut store, Path::new("content"), &options, noop).unwrap();
        let second = run(&mut store, Path::new("content"), &options, noop).unwrap();

        assert_eq!(second.affected, 0);
        assert_eq!(second.skipped_for(SkipReason::HasImage), 3);
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn observer_sees_every_file_in_order() {
        let mut store = site();
        let mut seen: Vec<PathBuf> = Vec::new();
        let report = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::default(),
            |r| {
                seen.push(r.path.clone());
                ControlFlow::Continue(())
            },
        )
        .unwrap();

        let reported: Vec<PathBuf> = report.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(seen, reported);
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn errors_are_counted_as_skipped_and_do_not_stop_the_run() {
        let mut store = InMemoryStore::new()
            .with_unreadable("content/a.md")
            .with_file("content/b.md", WITH_IMAGE);

        let report = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::new(Mode::Write),
            noop,
        )
        .unwrap();

        assert_eq!(report.errors(), 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.affected, 1);
    }

    #[test]
    fn extra_extensions_are_selected() {
        let mut store = site().with_file("content/old.markdown", WITH_IMAGE);
        let options = MigrateOptions::new(Mode::DryRun).with_extensions(["md", "markdown"]);

        let report = run(&mut store, Path::new("content"), &options, noop).unwrap();
        assert_eq!(report.affected, 3);
    }

    #[test]
    fn missing_root_aborts_before_visiting() {
        let mut store = site();
        let mut visited = 0;
        let err = run(
            &mut store,
            Path::new("nope"),
            &MigrateOptions::default(),
            |_| {
                visited += 1;
                ControlFlow::Continue(())
            },
        )
        .unwrap_err();

        assert!(matches!(err, MigrateError::DirectoryNotFound(p) if p == Path::new("nope")));
        assert_eq!(visited, 0);
    }

    #[test]
    fn file_root_is_rejected() {
        let mut store = site();
        let err = run(
            &mut store,
            Path::new("content/about.md"),
            &MigrateOptions::default(),
            noop,
        )
        .unwrap_err();
        assert!(matches!(err, MigrateError::NotADirectory(_)));
    }

    #[test]
    fn unreadable_directory_is_an_error_and_the_run_continues() {
        let mut store = site()
            .with_file("content/private/x.md", WITH_IMAGE)
            .with_unlistable("content/private");

        let report = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::new(Mode::DryRun),
            noop,
        )
        .unwrap();

        assert_eq!(report.errors(), 1);
        assert_eq!(report.affected, 2);
        assert_eq!(report.skipped, 4);
        let failed = report.files.iter().find(|f| f.outcome.is_error()).unwrap();
        assert_eq!(failed.path, PathBuf::from("content/private"));
    }

    #[test]
    fn break_stops_before_the_next_file() {
        let mut store = site();
        let mut visited = 0;

        let err = run(
            &mut store,
            Path::new("content"),
            &MigrateOptions::new(Mode::Write),
            |_| {
                visited += 1;
                ControlFlow::Break(())
            },
        )
        .unwrap_err();

        assert!(matches!(err, MigrateError::Interrupted));
        assert_eq!(visited, 1);
        assert_eq!(store.writes(), 0);
        assert_eq!(store.get("content/posts/one.md"), Some(WITH_IMAGE));
    }
}
