//! `bookdrop resolve <url>` – print the local path a locator maps to.

use anyhow::Result;
use bookdrop_core::path_synth;
use bookdrop_core::reference::{ContentFormat, ReferenceKind};
use std::path::Path;

pub fn run_resolve(
    url: &str,
    format: ContentFormat,
    kind: ReferenceKind,
    base_dir: &Path,
) -> Result<()> {
    let path = path_synth::synthesize(url, format, kind, base_dir)?;
    println!("{}", path.display());
    Ok(())
}
