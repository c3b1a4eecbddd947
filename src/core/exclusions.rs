use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::cache::CachedConfigFile;

/// The parsed contents of the excluded-renames file: changeset identifiers
/// the bridge must leave out of rename detection, in file order.
///
/// Same lifecycle as [`crate::core::mappings::MappingsFile`]: each parse
/// replaces the whole collection, and the store is either empty or exactly
/// the last successfully parsed file.
#[derive(Debug, Default)]
pub struct ExcludedRenamesFile {
    ids: Vec<i32>,
    parse_successful: bool,
}

impl ExcludedRenamesFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn is_parse_successful(&self) -> bool {
        self.parse_successful
    }

    fn parse_lines(file_path: &Path) -> Result<Vec<i32>> {
        let content = fs::read_to_string(file_path)?;

        // Lines that do not parse as integers are skipped, not rejected.
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| line.parse::<i32>().ok())
            .collect())
    }
}

impl CachedConfigFile for ExcludedRenamesFile {
    const CACHE_FILE_NAME: &'static str = "git-tfs_excluded_renames";
    const DESCRIPTION: &'static str = "excluded renames";

    fn parse(&mut self, file_path: &Path) -> Result<bool> {
        self.ids.clear();
        self.ids = Self::parse_lines(file_path).with_context(|| {
            format!(
                "Unable to parse excluded renames file '{}'",
                file_path.display()
            )
        })?;
        self.parse_successful = true;
        Ok(true)
    }

    fn has_entries(&self) -> bool {
        !self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("excluded.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_non_numeric_and_blank_lines_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "12\nabc\n\n7");

        let mut store = ExcludedRenamesFile::new();
        assert!(store.parse(&path).unwrap());
        assert_eq!(store.ids(), &[12, 7]);
        assert!(store.is_parse_successful());
    }

    #[test]
    fn test_lines_are_trimmed_before_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "  42  \n\t7\n");

        let mut store = ExcludedRenamesFile::new();
        store.parse(&path).unwrap();
        assert_eq!(store.ids(), &[42, 7]);
    }

    #[test]
    fn test_all_malformed_lines_still_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "abc\nnot-a-number\n");

        let mut store = ExcludedRenamesFile::new();
        assert!(store.parse(&path).unwrap());
        assert!(store.ids().is_empty());
        assert!(store.is_parse_successful());
    }

    #[test]
    fn test_missing_file_fails_the_parse() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist");

        let mut store = ExcludedRenamesFile::new();
        let err = store.parse(&path).unwrap_err();
        assert!(err.to_string().contains("Unable to parse excluded renames file"));
        assert!(!store.is_parse_successful());
    }

    #[test]
    fn test_reparse_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "1\n2\n3\n");
        let mut store = ExcludedRenamesFile::new();
        store.parse(&first).unwrap();

        let second = dir.path().join("other.txt");
        fs::write(&second, "99\n").unwrap();
        store.parse(&second).unwrap();

        assert_eq!(store.ids(), &[99]);
    }
}
