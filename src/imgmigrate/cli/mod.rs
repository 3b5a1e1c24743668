mod commands;
mod prompts;
mod render;
mod setup;

pub use commands::{run, INTERRUPTED_NOTICE};
