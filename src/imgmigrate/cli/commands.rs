//! # CLI Layer
//!
//! The CLI is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Installs the logging subscriber and the interrupt handler
//! - Formats output for human consumption
//!
//! ## Flow
//!
//! 1. Parse flags (`setup.rs`)
//! 2. Ask whatever the flags left open (`prompts.rs`)
//! 3. Run the migration through `MigratorApi`, printing each file as it is decided
//! 4. Print the summary (`render.rs`) or the JSON report
//!
//! Process exit codes are decided in `main.rs`.

use super::prompts::{plan_run, TerminalPrompter};
use super::render::{render_banner, render_file_report, render_mode_notice, render_summary};
use super::setup::Cli;
use clap::Parser;
use imgmigrate::api::MigratorApi;
use imgmigrate::error::{MigrateError, Result};
use imgmigrate::store::fs::FileStore;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub const INTERRUPTED_NOTICE: &str = "\n\n❌ Interrupted by user";

/// Set once files are being processed; Ctrl-C then waits for the current file.
static MIGRATING: AtomicBool = AtomicBool::new(false);
static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    install_interrupt_handler();

    let mut api = MigratorApi::new(FileStore::new());
    let mut prompter = TerminalPrompter::new();

    if !cli.json {
        print!("{}", render_banner());
    }

    let plan = plan_run(&cli, &mut prompter, |root| api.check_root(root))?;

    if !cli.json {
        print!("{}", render_mode_notice(plan.options.mode.is_dry_run()));
    }

    MIGRATING.store(true, Ordering::SeqCst);
    let report = api.migrate(&plan.root, &plan.options, |file| {
        if !cli.json {
            print!("{}", render_file_report(file));
        }
        if STOP_REQUESTED.load(Ordering::SeqCst) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).map_err(MigrateError::Serialization)?;
        println!("{}", json);
    } else {
        print!("{}", render_summary(&report));
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("imgmigrate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Before any file is touched Ctrl-C exits at once. During the run it only asks the
/// driver to stop after the current file, so a write is never cut off halfway and no
/// temp file is left behind. `main` then prints the notice.
fn install_interrupt_handler() {
    if let Err(e) = ctrlc::set_handler(|| {
        if MIGRATING.load(Ordering::SeqCst) {
            STOP_REQUESTED.store(true, Ordering::SeqCst);
        } else {
            println!("{}", INTERRUPTED_NOTICE);
            std::process::exit(1);
        }
    }) {
        warn!(error = %e, "could not install interrupt handler");
    }
}
