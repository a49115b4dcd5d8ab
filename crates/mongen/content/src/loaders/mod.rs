//! Content loaders for reading generation data from files.
//!
//! Loaders convert RON/TOML files into the oracle implementations the
//! generation pipelines consume: the bestiary, the spawn tables, and the
//! generation config.

pub mod bestiary;
pub mod config;
pub mod pools;

pub use bestiary::BestiaryLoader;
pub use config::ConfigLoader;
pub use pools::SpawnTableLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
