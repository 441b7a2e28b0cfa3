//! Translation of a watermark request into an imagemagick command line.
//!
//! [`CommandBuilder`] is bound to one source image and produces either a
//! `composite` command for image marks ([`CommandBuilder::build_image_mark`])
//! or a `convert` command, possibly piped into `composite`, for text marks
//! ([`CommandBuilder::build_text_mark`]). Building is pure: nothing is read,
//! written or executed.

mod context;
mod image_mark;
pub mod resolve;
mod text_mark;

pub use context::ResolvedPaths;
pub use text_mark::DUAL_TEXT_OFFSET_DELTA;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    source: PathBuf,
}

impl CommandBuilder {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
