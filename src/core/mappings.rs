use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::cache::CachedConfigFile;

/// A single association between a TFS server path and a local working-copy
/// path, as read from one line of the mappings file.
///
/// An empty `tfs_path` stands for the root of the remote repository, an
/// empty `local_path` for the root of the working copy.
#[derive(Debug, Clone, Serialize)]
pub struct Mapping {
    pub tfs_path: String,
    pub local_path: String,
}

impl Mapping {
    /// Leading separators are stripped from `local_path` at construction so
    /// it can always be joined below a caller-supplied root.
    pub fn new(tfs_path: &str, local_path: &str) -> Self {
        Self {
            tfs_path: tfs_path.to_string(),
            local_path: local_path.trim_start_matches('/').to_string(),
        }
    }

    /// The absolute working-copy location of this mapping under `root`.
    pub fn local_path_with_root(&self, root: impl AsRef<Path>) -> PathBuf {
        if self.local_path.is_empty() {
            root.as_ref().to_path_buf()
        } else {
            root.as_ref().join(&self.local_path)
        }
    }

    /// The absolute TFS location of this mapping under `root`. TFS paths use
    /// `/` regardless of platform, so this stays string-based.
    pub fn tfs_path_with_root(&self, root: &str) -> String {
        let root = root.trim_end_matches('/');
        if self.tfs_path.trim().is_empty() {
            root.to_string()
        } else {
            format!("{}/{}", root, self.tfs_path.trim_start_matches('/'))
        }
    }
}

/// The parsed contents of the path-mappings file.
///
/// Mappings keep their file order: callers resolve a path against the first
/// mapping that matches, so order is meaningful. Each parse replaces the
/// whole collection; the store always reflects exactly the last successfully
/// parsed file, or is empty.
#[derive(Debug, Default)]
pub struct MappingsFile {
    mappings: Vec<Mapping>,
    parse_successful: bool,
}

impl MappingsFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    pub fn is_parse_successful(&self) -> bool {
        self.parse_successful
    }

    fn parse_lines(file_path: &Path) -> Result<Vec<Mapping>> {
        let content = fs::read_to_string(file_path)?;

        let mut mappings = Vec::new();
        for line in content.lines().filter(|line| !line.trim().is_empty()) {
            // Empty fields are dropped before trimming, so ";;$/proj" still
            // yields "$/proj" as its first field. Fields past the second are
            // ignored.
            let fields: Vec<&str> = line
                .split(';')
                .filter(|field| !field.is_empty())
                .map(str::trim)
                .collect();

            let tfs_path = fields
                .first()
                .ok_or_else(|| anyhow::anyhow!("mapping line '{line}' has no TFS path"))?;
            let local_path = fields.get(1).copied().unwrap_or("");

            mappings.push(Mapping::new(tfs_path, local_path));
        }

        Ok(mappings)
    }
}

impl CachedConfigFile for MappingsFile {
    const CACHE_FILE_NAME: &'static str = "git-tfs_mappings";
    const DESCRIPTION: &'static str = "mappings";

    fn parse(&mut self, file_path: &Path) -> Result<bool> {
        self.mappings.clear();
        self.mappings = Self::parse_lines(file_path)
            .with_context(|| format!("Unable to parse mappings file '{}'", file_path.display()))?;
        self.parse_successful = true;
        Ok(true)
    }

    fn has_entries(&self) -> bool {
        !self.mappings.is_empty()
    }
}
