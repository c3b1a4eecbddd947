/// Configuration front end for the git <-> TFS bridge.
/// The bridge proper (history sync, commit translation) drives the stores
/// in `core` directly; this binary exists so a user can inspect what the
/// bridge would load: which path mappings and excluded renames are active,
/// and whether they came from an explicit file or from the cached copy
/// kept in the repository's .git directory.
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use git_tfs_bridge::utils;

#[derive(Parser)]
#[command(name = "git-tfs-bridge")]
#[command(about = "Load and inspect the bridge's path mappings and excluded renames")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the TFS path mappings the bridge would use
    Mappings {
        /// Explicit mappings file; falls back to the cached copy when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format: text, json, yaml or toml
        #[arg(long, default_value = "text")]
        format: String,
        /// Do not save an explicit file into the repository metadata directory
        #[arg(long)]
        no_cache: bool,
    },
    /// Show the changesets excluded from rename detection
    Exclusions {
        /// Explicit excluded-renames file; falls back to the cached copy when omitted
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format: text, json, yaml or toml
        #[arg(long, default_value = "text")]
        format: String,
        /// Do not save an explicit file into the repository metadata directory
        #[arg(long)]
        no_cache: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mappings {
            file,
            format,
            no_cache,
        } => utils::show_mappings(file, &format, no_cache),
        Commands::Exclusions {
            file,
            format,
            no_cache,
        } => utils::show_exclusions(file, &format, no_cache),
    }
}
