//! # Single-File Transform
//!
//! Promotes the first body image of one document into its front matter:
//!
//! 1. Read the file; a read failure ends in [`Outcome::Error`].
//! 2. Split it into front matter and body ([`Document::parse`]).
//! 3. Leave it alone if the front matter already has an `image` key, or if the body
//!    has no image reference.
//! 4. Append `image = '<path>'` to the front matter and wrap the first body image in
//!    `<!-- ... -->`.
//! 5. Write the result back, unless this is a dry run.
//!
//! Steps 2 to 4 are [`transform_content`], which works on text only.

use super::{Outcome, SkipReason};
use crate::config::Mode;
use crate::document::{assemble, with_image_field, Document, SplitError};
use crate::image::{comment_out, find_first_image, ImageRef};
use crate::store::ContentStore;
use std::path::Path;
use tracing::{debug, warn};

/// The rewritten document and the image that was promoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Skip(SkipReason),
    Rewrite(Rewrite),
}

pub fn transform_content(content: &str) -> Decision {
    let doc = match Document::parse(content) {
        Ok(doc) => doc,
        Err(SplitError::NoFrontMatter) => return Decision::Skip(SkipReason::NoFrontMatter),
        Err(SplitError::Unterminated) => return Decision::Skip(SkipReason::BadFormat),
    };

    if doc.has_image_key() {
        return Decision::Skip(SkipReason::HasImage);
    }

    let Some(image) = find_first_image(doc.body) else {
        return Decision::Skip(SkipReason::NoImage);
    };

    let front_matter = with_image_field(doc.front_matter, &image.path);
    let body = comment_out(doc.body, &image);

    Decision::Rewrite(Rewrite {
        content: assemble(&front_matter, &body),
        image,
    })
}

pub fn run<S: ContentStore>(store: &mut S, path: &Path, mode: Mode) -> Outcome {
    let content = match store.read(path) {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file");
            return Outcome::Error {
                message: e.to_string(),
            };
        }
    };

    let rewrite = match transform_content(&content) {
        Decision::Skip(reason) => {
            debug!(path = %path.display(), ?reason, "skipping");
            return Outcome::Skipped(reason);
        }
        Decision::Rewrite(rewrite) => rewrite,
    };

    let image = rewrite.image.path;
    let commented = rewrite.image.markdown;

    if mode.is_dry_run() {
        debug!(path = %path.display(), %image, "would modify");
        return Outcome::WouldModify { image, commented };
    }

    match store.write(path, &rewrite.content) {
        Ok(()) => {
            debug!(path = %path.display(), %image, "modified");
            Outcome::Modified { image, commented }
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to write file");
            Outcome::Error {
                message: e.to_string(),
            }
        }
    }
}
