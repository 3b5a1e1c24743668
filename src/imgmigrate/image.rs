//! Markdown image references: `![alt](path)`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    /// The full `![alt](path)` text as it appears in the body.
    pub markdown: String,
    pub alt: String,
    pub path: String,
    /// Byte range of `markdown` within the searched text.
    #[serde(skip)]
    pub span: Range<usize>,
}

/// Returns the leftmost image reference in `body`, if any.
pub fn find_first_image(body: &str) -> Option<ImageRef> {
    let caps = IMAGE_REF.captures(body)?;
    let whole = caps.get(0)?;
    Some(ImageRef {
        markdown: whole.as_str().to_string(),
        alt: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
        path: caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
        span: whole.range(),
    })
}

/// Wraps the referenced image in an HTML comment so it no longer renders.
pub fn comment_out(body: &str, image: &ImageRef) -> String {
    let mut out = String::with_capacity(body.len() + 9);
    out.push_str(&body[..image.span.start]);
    out.push_str("<!-- ");
    out.push_str(&image.markdown);
    out.push_str(" -->");
    out.push_str(&body[image.span.end..]);
    out
}
