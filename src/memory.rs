//! Locating the newest session memory letter.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::LtbError;

/// Filename prefix identifying a session memory letter.
pub const LETTER_PREFIX: &str = "letter_";
/// Filename extension identifying a session memory letter.
pub const LETTER_EXTENSION: &str = "md";

/// Find the most recent `letter_*.md` file in the memory directory.
///
/// Letter filenames embed a sortable timestamp, so lexical order on the
/// filename equals chronological order. Contents and mtimes are never
/// consulted.
pub fn latest_letter(memory_dir: &Path) -> Result<PathBuf, LtbError> {
    if !memory_dir.is_dir() {
        return Err(LtbError::MemoryDirMissing {
            dir: memory_dir.display().to_string(),
        });
    }

    let mut letters: Vec<PathBuf> = fs::read_dir(memory_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_letter(path))
        .collect();

    // newest first
    letters.sort_by(|a, b| b.cmp(a));
    letters
        .into_iter()
        .next()
        .ok_or_else(|| LtbError::NoLetterFiles {
            dir: memory_dir.display().to_string(),
        })
}

/// Whether a path names a letter file (`letter_*.md`).
fn is_letter(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    path.is_file()
        && name.starts_with(LETTER_PREFIX)
        && path
            .extension()
            .is_some_and(|ext| ext == LETTER_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "session notes").unwrap();
    }

    #[test]
    fn test_latest_letter_by_filename() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "letter_2024-01-01.md");
        touch(dir.path(), "letter_2024-06-15.md");
        touch(dir.path(), "letter_2023-12-31.md");

        let latest = latest_letter(dir.path()).unwrap();
        assert_eq!(latest.file_name().unwrap(), "letter_2024-06-15.md");
    }

    #[test]
    fn test_non_letter_files_ignored() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "letter_2024-01-01.md");
        touch(dir.path(), "notes_2099-01-01.md");
        touch(dir.path(), "letter_2099-01-01.txt");
        fs::create_dir(dir.path().join("letter_2099-06-01.md")).unwrap();

        let latest = latest_letter(dir.path()).unwrap();
        assert_eq!(latest.file_name().unwrap(), "letter_2024-01-01.md");
    }

    #[test]
    fn test_empty_memory_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let res = latest_letter(dir.path());
        assert!(matches!(res, Err(LtbError::NoLetterFiles { .. })));
    }

    #[test]
    fn test_missing_memory_dir_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let res = latest_letter(&missing);
        assert!(matches!(res, Err(LtbError::MemoryDirMissing { .. })));
    }
}
