use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::core::cache::CachedConfigFile;
use crate::core::exclusions::ExcludedRenamesFile;
use crate::core::git;
use crate::core::mappings::{Mapping, MappingsFile};

pub fn show_mappings(file: Option<PathBuf>, format: &str, no_cache: bool) -> Result<()> {
    let metadata_dir = git::find_metadata_dir()?;

    let mut store = MappingsFile::new();
    let loaded = store.load_or_cache(file.as_deref(), &metadata_dir, !no_cache)?;
    if !loaded {
        println!("No mappings configured.");
        return Ok(());
    }

    if format == "text" {
        println!("✓ Loaded {} mapping(s)", store.mappings().len());
        for mapping in store.mappings() {
            println!(
                "  {} => {}",
                label_or_root(&mapping.tfs_path),
                label_or_root(&mapping.local_path)
            );
        }
    } else {
        println!("{}", export_mappings(store.mappings(), format)?.trim_end());
    }
    Ok(())
}

pub fn show_exclusions(file: Option<PathBuf>, format: &str, no_cache: bool) -> Result<()> {
    let metadata_dir = git::find_metadata_dir()?;

    let mut store = ExcludedRenamesFile::new();
    let loaded = store.load_or_cache(file.as_deref(), &metadata_dir, !no_cache)?;
    if !loaded {
        println!("No excluded renames configured.");
        return Ok(());
    }

    if format == "text" {
        println!("✓ Loaded {} excluded rename(s)", store.ids().len());
        for id in store.ids() {
            println!("  {id}");
        }
    } else {
        println!("{}", export_exclusions(store.ids(), format)?.trim_end());
    }
    Ok(())
}

fn label_or_root(path: &str) -> &str {
    if path.is_empty() { "<root>" } else { path }
}

#[derive(Serialize)]
struct MappingsExport<'a> {
    mappings: &'a [Mapping],
}

#[derive(Serialize)]
struct ExclusionsExport<'a> {
    excluded_renames: &'a [i32],
}

fn export_mappings(mappings: &[Mapping], format: &str) -> Result<String> {
    let export = MappingsExport { mappings };
    serialize(&export, format)
}

fn export_exclusions(ids: &[i32], format: &str) -> Result<String> {
    let export = ExclusionsExport { excluded_renames: ids };
    serialize(&export, format)
}

fn serialize<T: Serialize>(value: &T, format: &str) -> Result<String> {
    match format {
        "json" => serde_json::to_string_pretty(value).context("Failed to serialize to JSON"),
        "yaml" => serde_yaml::to_string(value).context("Failed to serialize to YAML"),
        _ => toml::to_string_pretty(value).context("Failed to serialize to TOML"),
    }
}
