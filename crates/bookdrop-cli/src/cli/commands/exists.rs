//! `bookdrop exists <url>` – report an already-downloaded local copy.

use anyhow::Result;
use bookdrop_core::reference::{ContentFormat, ReferenceKind, SourceLocator};
use std::path::Path;

/// Prints the local copy path when one exists. Returns whether it was found;
/// absence is a normal outcome, not an error.
pub fn run_exists(
    url: &str,
    format: ContentFormat,
    kind: ReferenceKind,
    base_dir: &Path,
) -> Result<bool> {
    let locator = SourceLocator::new(url, format, kind);
    match locator.local_copy(base_dir) {
        Some(path) => {
            println!("{}", path.display());
            Ok(true)
        }
        None => {
            println!("no local copy for {url}");
            Ok(false)
        }
    }
}
