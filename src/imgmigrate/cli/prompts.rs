//! Interactive questions asked before a run.
//!
//! Each question can be answered ahead of time with a flag. [`plan_run`] only asks
//! what the flags left open, so the same logic serves terminal sessions, scripts,
//! and tests (via a scripted [`Prompter`]).

use super::setup::Cli;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use imgmigrate::config::{MigrateOptions, Mode};
use imgmigrate::error::{MigrateError, Result};
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

pub const PATH_PROMPT: &str = "Enter your content directory path (e.g., content/posts)";
pub const DRY_RUN_PROMPT: &str = "Run in dry-run mode first?";
pub const CONFIRM_PROMPT: &str = "This will modify your files! Continue? (yes/no)";

/// Source of answers for the pre-run questions.
pub trait Prompter {
    /// Free-text answer. `flag` names the option that answers it non-interactively.
    fn text(&mut self, prompt: &str, flag: &str) -> Result<String>;

    fn yes_no(&mut self, prompt: &str, default: bool, flag: &str) -> Result<bool>;
}

/// Asks on the terminal via dialoguer; refuses when stdin is not a terminal.
pub struct TerminalPrompter {
    interactive: bool,
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
            theme: ColorfulTheme::default(),
        }
    }

    fn ensure_interactive(&self, flag: &str) -> Result<()> {
        if self.interactive {
            Ok(())
        } else {
            Err(MigrateError::Prompt(format!(
                "stdin is not a terminal and piped answers are not supported; pass {} instead",
                flag
            )))
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

fn prompt_error(err: dialoguer::Error) -> MigrateError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => {
            MigrateError::Interrupted
        }
        other => MigrateError::Prompt(other.to_string()),
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, flag: &str) -> Result<String> {
        self.ensure_interactive(flag)?;
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(prompt_error)
    }

    fn yes_no(&mut self, prompt: &str, default: bool, flag: &str) -> Result<bool> {
        self.ensure_interactive(flag)?;
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}

/// What to run, once every question has an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub root: PathBuf,
    pub options: MigrateOptions,
}

/// Resolves the root, the mode and the write confirmation, in that order.
///
/// `check_root` runs right after the path is known, so a bad directory is reported
/// before any further question.
pub fn plan_run<P, C>(cli: &Cli, prompter: &mut P, check_root: C) -> Result<RunPlan>
where
    P: Prompter,
    C: Fn(&Path) -> Result<()>,
{
    let root = match &cli.path {
        Some(path) => path.clone(),
        None => PathBuf::from(prompter.text(PATH_PROMPT, "PATH")?.trim()),
    };
    check_root(&root)?;

    let mode = match cli.mode() {
        Some(mode) => mode,
        None => {
            if prompter.yes_no(DRY_RUN_PROMPT, true, "--dry-run or --write")? {
                Mode::DryRun
            } else {
                Mode::Write
            }
        }
    };

    if mode == Mode::Write && !cli.yes {
        let answer = prompter.text(CONFIRM_PROMPT, "--yes")?;
        if answer.trim().to_lowercase() != "yes" {
            return Err(MigrateError::Aborted);
        }
    }

    Ok(RunPlan {
        root,
        options: MigrateOptions::new(mode).with_extensions(&cli.extensions),
    })
}
