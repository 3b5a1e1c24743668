//! # Rendering
//!
//! Turns file reports and run summaries into terminal text. Every line starts with a
//! glyph naming its outcome category:
//!
//! | glyph | meaning                                      |
//! |-------|----------------------------------------------|
//! | ✅    | modified, or would be modified in a dry run  |
//! | ⏭️    | already has an `image` field                 |
//! | ⚠️    | no front matter, bad fences, or no image     |
//! | ❌    | I/O error                                    |
//!
//! Functions return strings so output can be checked without a terminal; `colored`
//! drops its escape codes when stdout is not a tty.

use colored::Colorize;
use imgmigrate::api::{FileReport, MigrationReport, Outcome, SkipReason};
use unicode_width::UnicodeWidthChar;

const RULE_WIDTH: usize = 60;
const COMMENTED_PREVIEW_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn section(title: &str) -> String {
    format!("{}\n{}\n{}\n", rule(), title, rule())
}

pub fn render_banner() -> String {
    section("Hugo Blog Image Migrator")
}

pub fn render_mode_notice(dry_run: bool) -> String {
    let mut out = String::new();
    if dry_run {
        out.push_str(&format!(
            "\n{}\n",
            "🔍 DRY RUN MODE - No files will be modified".cyan()
        ));
    }
    out.push('\n');
    out.push_str(&section("Processing files..."));
    out
}

fn skip_message(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NoFrontMatter => "No TOML front matter found",
        SkipReason::BadFormat => "Invalid front matter format",
        SkipReason::HasImage => "Already has image in front matter",
        SkipReason::NoImage => "No image found in content",
    }
}

pub fn render_file_report(report: &FileReport) -> String {
    let path = report.path.display();
    match &report.outcome {
        Outcome::Skipped(SkipReason::HasImage) => format!(
            "{}\n",
            format!("⏭️  Skipping {}: {}", path, skip_message(SkipReason::HasImage)).dimmed()
        ),
        Outcome::Skipped(reason) => format!(
            "{}\n",
            format!("⚠️  Skipping {}: {}", path, skip_message(*reason)).yellow()
        ),
        Outcome::WouldModify { image, commented } => format!(
            "\n{}\n   📷 Image found: {}\n   ➡️  Will add to front matter\n   ➡️  Will comment out: {}\n",
            format!("✅ {}", path).green(),
            image,
            truncate_to_width(commented, COMMENTED_PREVIEW_WIDTH)
        ),
        Outcome::Modified { image, .. } => format!(
            "\n{}\n   📷 Added image: {}\n",
            format!("✅ Modified: {}", path).green(),
            image
        ),
        Outcome::Error { message } => format!(
            "{}\n",
            format!("❌ Error processing {}: {}", path, message).red()
        ),
    }
}

pub fn render_summary(report: &MigrationReport) -> String {
    let mut out = String::from("\n");
    out.push_str(&section("SUMMARY"));

    if report.is_dry_run() {
        out.push_str(&format!(
            "📊 Files that WOULD BE modified: {}\n",
            report.affected
        ));
        out.push_str(&format!(
            "📊 Files that would be skipped: {}\n",
            report.skipped
        ));
    } else {
        out.push_str(&format!("✅ Files modified: {}\n", report.affected));
        out.push_str(&format!("⏭️  Files skipped: {}\n", report.skipped));
    }

    let breakdown = [
        (SkipReason::HasImage, "already have an image"),
        (SkipReason::NoImage, "have no image in content"),
        (SkipReason::NoFrontMatter, "have no front matter"),
        (SkipReason::BadFormat, "have invalid front matter"),
    ];
    for (reason, label) in breakdown {
        let count = report.skipped_for(reason);
        if count > 0 {
            out.push_str(&format!("   {} {}\n", count, label).dimmed().to_string());
        }
    }
    let errors = report.errors();
    if errors > 0 {
        out.push_str(&format!("   {} {}\n", errors, "failed with errors").red().to_string());
    }

    if report.is_dry_run() {
        out.push_str("\n💡 Run again and choose 'n' for dry-run to make actual changes\n");
    } else {
        out.push_str("\n✅ Done! Check your files in Git to verify changes.\n");
    }
    out.push_str(&rule());
    out.push('\n');
    out
}

/// Cuts `s` to at most `max_width` columns, marking the cut with `...`.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            result.push_str("...");
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
