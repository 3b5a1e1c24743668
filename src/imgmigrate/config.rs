use serde::Serialize;

const DEFAULT_EXTENSION: &str = ".md";

/// Whether a run writes files or only reports what it would do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    DryRun,
    Write,
}

impl Mode {
    pub fn is_dry_run(self) -> bool {
        matches!(self, Mode::DryRun)
    }
}

/// Resolved settings for one migration run.
///
/// There is no config file: the CLI fills this from flags and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    pub mode: Mode,
    /// File name suffixes to process, each with a leading dot.
    pub extensions: Vec<String>,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            mode: Mode::DryRun,
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}

impl MigrateOptions {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replace the extension list (normalizes each to start with a dot).
    /// An empty list keeps the default.
    pub fn with_extensions<I, E>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        if !normalized.is_empty() {
            self.extensions = normalized;
        }
        self
    }
}

fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext == "." {
        String::new()
    } else if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
