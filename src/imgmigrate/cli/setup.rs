use clap::Parser;
use imgmigrate::config::Mode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "imgmigrate", bin_name = "imgmigrate", version)]
#[command(
    about = "Move the first body image of front-matter markdown posts into an `image` field",
    long_about = None
)]
pub struct Cli {
    /// Content directory to migrate (prompted for when omitted)
    pub path: Option<PathBuf>,

    /// Only report what would change
    #[arg(long, conflicts_with = "write", help_heading = "Mode")]
    pub dry_run: bool,

    /// Rewrite files in place
    #[arg(long, help_heading = "Mode")]
    pub write: bool,

    /// Skip the write confirmation
    #[arg(short = 'y', long, help_heading = "Mode")]
    pub yes: bool,

    /// Markdown extension to process, repeatable (default: md)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Print the final report as JSON instead of per-file lines
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Mode chosen on the command line, if any.
    pub fn mode(&self) -> Option<Mode> {
        if self.dry_run {
            Some(Mode::DryRun)
        } else if self.write {
            Some(Mode::Write)
        } else {
            None
        }
    }
}
