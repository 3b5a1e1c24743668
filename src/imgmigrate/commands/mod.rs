use crate::config::Mode;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub mod migrate;
pub mod transform;

/// Why a file was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Content does not start with `+++`.
    NoFrontMatter,
    /// Opening `+++` is never closed.
    BadFormat,
    /// Front matter already has an `image` key.
    HasImage,
    /// Body has no `![alt](path)` reference.
    NoImage,
}

/// Terminal state of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Skipped(SkipReason),
    /// Dry run: the file would be rewritten.
    WouldModify { image: String, commented: String },
    Modified { image: String, commented: String },
    Error { message: String },
}

impl Outcome {
    /// Whether this outcome counts toward the affected tally.
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::WouldModify { .. } | Outcome::Modified { .. })
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Outcome::Skipped(reason) => Some(*reason),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Everything a run decided, in visit order.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationReport {
    pub root: PathBuf,
    pub mode: Mode,
    pub affected: usize,
    pub skipped: usize,
    pub files: Vec<FileReport>,
}

impl MigrationReport {
    pub fn new(root: &Path, mode: Mode) -> Self {
        Self {
            root: root.to_path_buf(),
            mode,
            affected: 0,
            skipped: 0,
            files: Vec::new(),
        }
    }

    pub fn push(&mut self, report: FileReport) {
        if report.outcome.changed() {
            self.affected += 1;
        } else {
            self.skipped += 1;
        }
        self.files.push(report);
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.files
            .iter()
            .filter(|f| f.outcome.skip_reason() == Some(reason))
            .count()
    }

    pub fn errors(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_error()).count()
    }

    pub fn is_dry_run(&self) -> bool {
        self.mode.is_dry_run()
    }
}
