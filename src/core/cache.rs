use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// The `CachedConfigFile` trait is the load-or-cache protocol shared by the
/// bridge's auxiliary configuration files (path mappings, excluded renames).
///
/// Both files follow the same lifecycle: the user supplies one explicitly on
/// an early run, the tool keeps a private copy of it inside the repository's
/// metadata directory, and later runs that omit the option transparently fall
/// back to that copy. Implementors provide only the per-format parser and the
/// fixed cache filename; the protocol itself lives in the provided methods,
/// so the caching logic is written once for both stores.
pub trait CachedConfigFile {
    /// Fixed name of the cached copy inside the metadata directory. Distinct
    /// per store so both caches can coexist in the same directory.
    const CACHE_FILE_NAME: &'static str;

    /// Label used in progress and warning messages (e.g. "mappings").
    const DESCRIPTION: &'static str;

    /// Parses `file_path`, replacing the store's contents with the file's.
    ///
    /// On failure the store must be left empty, never partially populated.
    fn parse(&mut self, file_path: &Path) -> Result<bool>;

    /// Whether the store currently holds at least one entry.
    fn has_entries(&self) -> bool;

    /// The single entry point callers use: decides between parsing a fresh
    /// user-supplied file and falling back to the cached copy.
    ///
    /// # Arguments
    /// * `source_path`: An explicit file supplied for this run, if any. An
    ///   empty path counts as absent.
    /// * `metadata_dir`: The tool's private state directory. Assumed to
    ///   exist and be writable.
    /// * `allow_caching`: Whether a located fresh file should be copied into
    ///   `metadata_dir` for future runs.
    ///
    /// # Returns
    /// `Ok(true)` when a file was parsed (or the store was already populated
    /// from the cache this run), `Ok(false)` when no explicit file was given
    /// and no cached copy exists, and an error when the explicit file is
    /// missing or does not parse.
    fn load_or_cache(
        &mut self,
        source_path: Option<&Path>,
        metadata_dir: &Path,
        allow_caching: bool,
    ) -> Result<bool> {
        let source_path = source_path.filter(|path| !path.as_os_str().is_empty());
        let Some(source_path) = source_path else {
            return self.load_from_cache(metadata_dir);
        };

        // An explicitly supplied file that is missing is fatal; it never
        // silently degrades to the cached copy.
        if !source_path.is_file() {
            anyhow::bail!(
                "{} file cannot be found: '{}'",
                Self::DESCRIPTION,
                source_path.display()
            );
        }

        if allow_caching {
            self.save_in_metadata_dir(source_path, metadata_dir);
        }

        println!(
            "Reading {} file: {}",
            Self::DESCRIPTION,
            source_path.display()
        );
        self.parse(source_path)
    }

    /// Where the cached copy for this store lives inside `metadata_dir`.
    fn cached_file_path(metadata_dir: &Path) -> PathBuf {
        metadata_dir.join(Self::CACHE_FILE_NAME)
    }

    /// Copies `source_path` over the cached file, overwriting any prior copy.
    ///
    /// A failed copy is only a warning: the current run still has the
    /// original file to parse, it just won't be recoverable next run.
    fn save_in_metadata_dir(&self, source_path: &Path, metadata_dir: &Path) {
        let cached_path = Self::cached_file_path(metadata_dir);
        if let Err(e) = fs::copy(source_path, &cached_path) {
            eprintln!(
                "⚠️  Failed to copy {} file from '{}' to '{}': {e}",
                Self::DESCRIPTION,
                source_path.display(),
                cached_path.display()
            );
        }
    }

    /// Restores the store from the cached copy of a previous run.
    ///
    /// A missing cached file is not an error; the configuration is simply
    /// empty. A store that is already populated is returned as-is, so
    /// repeated cache loads within one run read the file only once.
    fn load_from_cache(&mut self, metadata_dir: &Path) -> Result<bool> {
        let cached_path = Self::cached_file_path(metadata_dir);
        if !cached_path.exists() {
            println!("No {} file used.", Self::DESCRIPTION);
            return Ok(false);
        }

        if self.has_entries() {
            return Ok(true);
        }

        println!(
            "Reading cached {} file ({})...",
            Self::DESCRIPTION,
            cached_path.display()
        );
        self.parse(&cached_path)
    }
}
