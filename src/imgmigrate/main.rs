//! # Imgmigrate CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns its error into an exit status.
//!
//! | error                   | output                       | status |
//! |-------------------------|------------------------------|--------|
//! | root does not exist     | `❌ Directory not found: …`  | 0      |
//! | root is not a directory | `❌ Not a directory: …`      | 0      |
//! | confirmation declined   | `❌ Aborted`                 | 0      |
//! | Ctrl-C                  | `❌ Interrupted by user`     | 1      |
//! | anything else           | `Error: …` on stderr         | 1      |

use imgmigrate::error::MigrateError;

mod cli;

fn main() {
    match cli::run() {
        Ok(()) => {}
        Err(MigrateError::DirectoryNotFound(path)) => {
            println!("❌ Directory not found: {}", path.display());
        }
        Err(err @ MigrateError::NotADirectory(_)) => {
            println!("❌ {}", err);
        }
        Err(MigrateError::Aborted) => {
            println!("❌ Aborted");
        }
        Err(MigrateError::Interrupted) => {
            println!("{}", cli::INTERRUPTED_NOTICE);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}
