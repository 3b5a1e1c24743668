//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for UI clients. It dispatches to `commands/*.rs` and returns structured
//! results. It never prints, prompts or exits.
//!
//! `MigratorApi<S: ContentStore>` is generic over storage:
//! - Production: `MigratorApi<FileStore>`
//! - Testing: `MigratorApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::store::ContentStore;
use std::ops::ControlFlow;
use std::path::Path;

pub use crate::commands::{FileReport, MigrationReport, Outcome, SkipReason};
pub use crate::config::{MigrateOptions, Mode};

pub struct MigratorApi<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> MigratorApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Fails unless `path` is an existing directory.
    pub fn check_root(&self, path: &Path) -> Result<()> {
        commands::migrate::check_root(&self.store, path)
    }

    pub fn migrate<F>(
        &mut self,
        root: &Path,
        options: &MigrateOptions,
        observer: F,
    ) -> Result<MigrationReport>
    where
        F: FnMut(&FileReport) -> ControlFlow<()>,
    {
        commands::migrate::run(&mut self.store, root, options, observer)
    }

    pub fn transform_file(&mut self, path: &Path, mode: Mode) -> Outcome {
        commands::transform::run(&mut self.store, path, mode)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
