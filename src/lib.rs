//! Configuration-ingestion core for the git <-> TFS bridge.
//!
//! Loads the two auxiliary files the bridge accepts: the path-mappings file
//! (TFS server paths to working-copy paths) and the excluded-renames file
//! (changesets to skip during rename detection). Both go through the same
//! load-or-cache protocol: an explicitly supplied file is parsed and copied
//! into the repository's metadata directory, and later runs without an
//! explicit file recover that cached copy transparently.

pub mod core;
pub mod utils;
