//! File-existence probe for synthesized paths.

use std::fs;
use std::path::Path;

/// Reports whether a regular file already exists at `path`. Directories and
/// other non-file entries do not count.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_for_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("title.epub");
        fs::write(&path, b"content").unwrap();
        assert!(file_exists(&path));
    }

    #[test]
    fn false_for_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!file_exists(&dir.path().join("absent.epub")));
    }

    #[test]
    fn false_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!file_exists(dir.path()));
    }
}
