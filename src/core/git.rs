use anyhow::{Context, Result};
use git2::Repository;
use std::path::{Path, PathBuf};

/// Locates the bridge's private metadata directory for the repository
/// enclosing the current working directory.
///
/// The metadata directory is the repository's `.git` directory; the cached
/// copies of the mappings and excluded-renames files live flat inside it.
/// Collaborators that already know the directory skip this and pass the path
/// straight to `load_or_cache`.
pub fn find_metadata_dir() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    metadata_dir_at(&current_dir)
}

/// Same lookup, rooted at an explicit starting directory.
pub fn metadata_dir_at(start: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(start).context("Not in a Git repository")?;
    Ok(repo.path().to_path_buf())
}
