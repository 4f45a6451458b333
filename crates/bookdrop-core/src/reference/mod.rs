//! Remote book references: a locator plus its classification tags.

mod format;
mod kind;

pub use format::ContentFormat;
pub use kind::ReferenceKind;

use crate::local_copy;
use crate::path_synth::{self, InvalidUrl};
use std::path::{Path, PathBuf};

/// An immutable remote locator with its content format and reference kind.
/// Created once by the catalog layer and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocator {
    pub url: String,
    pub format: ContentFormat,
    pub kind: ReferenceKind,
}

impl SourceLocator {
    pub fn new(url: impl Into<String>, format: ContentFormat, kind: ReferenceKind) -> Self {
        Self {
            url: url.into(),
            format,
            kind,
        }
    }

    /// The URL without any account-specific parts. Plain locators carry none,
    /// so this is the stored URL as-is; wrappers that add credentials strip
    /// them before path synthesis sees the URL.
    pub fn clean_url(&self) -> &str {
        &self.url
    }

    /// Local path this locator's payload would be stored at under `books_dir`.
    pub fn local_path(&self, books_dir: &Path) -> Result<PathBuf, InvalidUrl> {
        path_synth::synthesize(self.clean_url(), self.format, self.kind, books_dir)
    }

    /// Path of an already-downloaded copy under `books_dir`, if one exists.
    /// Unsupported locators report no copy rather than an error.
    pub fn local_copy(&self, books_dir: &Path) -> Option<PathBuf> {
        let path = self.local_path(books_dir).ok()?;
        if local_copy::file_exists(&path) {
            tracing::debug!("found local copy at {}", path.display());
            Some(path)
        } else {
            None
        }
    }
}
