//! Writing generated posts to the drafts directory.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::errors::LtbError;

/// Compute the destination path for a draft: `blog_<date>_<source-stem>.md`.
///
/// A pure function of the run date and the source letter's stem, so a rerun
/// on the same day targets the same file.
pub fn draft_path(drafts_dir: &Path, date: NaiveDate, source_stem: &str) -> PathBuf {
    drafts_dir.join(format!("blog_{}_{}.md", date.format("%Y-%m-%d"), source_stem))
}

/// Write the generated text verbatim to the drafts directory, creating the
/// directory if missing. Any existing draft at the computed path is
/// overwritten. The text is not inspected; whatever frontmatter it carries
/// is written as-is.
pub fn write_draft(
    drafts_dir: &Path,
    date: NaiveDate,
    source: &Path,
    content: &str,
) -> Result<PathBuf, LtbError> {
    fs::create_dir_all(drafts_dir)?;
    let stem = source
        .file_stem()
        .and_then(|stem| stem.to_str())
        .expect("letter filenames are valid UTF-8");
    let output_file = draft_path(drafts_dir, date, stem);
    fs::write(&output_file, content)?;
    Ok(output_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn run_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()
    }

    #[test]
    fn test_draft_path_is_deterministic() {
        let path = draft_path(Path::new("drafts"), run_date(), "letter_2024-06-15");
        assert_eq!(
            path,
            Path::new("drafts/blog_2024-06-16_letter_2024-06-15.md")
        );
    }

    #[test]
    fn test_write_creates_drafts_dir() {
        let dir = tempdir().unwrap();
        let drafts_dir = dir.path().join("drafts");
        let source = Path::new(".memory/letter_2024-06-15.md");

        let written = write_draft(&drafts_dir, run_date(), source, "# Post\n").unwrap();

        assert_eq!(
            written,
            drafts_dir.join("blog_2024-06-16_letter_2024-06-15.md")
        );
        assert_eq!(fs::read_to_string(&written).unwrap(), "# Post\n");
    }

    #[test]
    fn test_rerun_same_day_overwrites() {
        let dir = tempdir().unwrap();
        let drafts_dir = dir.path().join("drafts");
        let source = Path::new(".memory/letter_2024-06-15.md");

        let first = write_draft(&drafts_dir, run_date(), source, "first take").unwrap();
        let second = write_draft(&drafts_dir, run_date(), source, "second take").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "second take");
    }
}
