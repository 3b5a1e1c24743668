//! # Front-Matter Documents
//!
//! A content file is a TOML front-matter block fenced by `+++`, followed by the
//! markdown body:
//!
//! ```text
//! +++
//! title = "A"
//! +++
//! Hello ![cat](img/cat.png) world.
//! ```
//!
//! The opening fence must be the first three bytes of the file. The closing fence is
//! the first `+++` after it that starts a line, so a `+++` inside the body never cuts
//! the document short.
//!
//! The front matter is never parsed as TOML. It is only scanned line by line for keys.

use once_cell::sync::Lazy;
use regex::Regex;

pub const DELIMITER: &str = "+++";

/// Matches an `image` key assigned a quoted value at the start of a line.
static IMAGE_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^[ \t]*image[ \t]*=[ \t]*['"]"#).expect("image key pattern is valid")
});

/// Why a text could not be split into front matter and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The text does not start with the delimiter.
    NoFrontMatter,
    /// The opening delimiter is never closed at the start of a later line.
    Unterminated,
}

/// Borrowed view over a document's two regions.
///
/// `front_matter` is everything between the fences (including the newline after the
/// opening fence), `body` is everything after the closing fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document<'a> {
    pub front_matter: &'a str,
    pub body: &'a str,
}

impl<'a> Document<'a> {
    pub fn parse(content: &'a str) -> Result<Self, SplitError> {
        let rest = content
            .strip_prefix(DELIMITER)
            .ok_or(SplitError::NoFrontMatter)?;

        let closing = rest
            .match_indices(DELIMITER)
            .map(|(idx, _)| idx)
            .find(|&idx| rest[..idx].ends_with('\n'))
            .ok_or(SplitError::Unterminated)?;

        Ok(Self {
            front_matter: &rest[..closing],
            body: &rest[closing + DELIMITER.len()..],
        })
    }

    pub fn has_image_key(&self) -> bool {
        has_image_key(self.front_matter)
    }
}

pub fn has_image_key(front_matter: &str) -> bool {
    IMAGE_KEY.is_match(front_matter)
}

/// Appends `image = '<path>'` as the last front-matter line.
pub fn with_image_field(front_matter: &str, image_path: &str) -> String {
    format!("{}\nimage = '{}'\n", front_matter.trim_end(), image_path)
}

pub fn assemble(front_matter: &str, body: &str) -> String {
    let mut out = String::with_capacity(front_matter.len() + body.len() + DELIMITER.len() * 2);
    out.push_str(DELIMITER);
    out.push_str(front_matter);
    out.push_str(DELIMITER);
    out.push_str(body);
    out
}
