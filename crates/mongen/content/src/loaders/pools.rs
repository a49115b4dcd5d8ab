//! Spawn table loader.
//!
//! Loads per-branch rarity tables from RON files into [`SpawnTables`].
//!
//! RON format: `Vec<(Branch, Vec<PoolEntry>)>`.

use std::path::Path;

use mongen_core::Branch;

use crate::loaders::{LoadResult, read_file};
use crate::pools::{PoolEntry, SpawnTables};

/// Loader for branch spawn tables.
pub struct SpawnTableLoader;

impl SpawnTableLoader {
    /// Load spawn tables from a RON file.
    pub fn load(path: &Path) -> LoadResult<SpawnTables> {
        let content = read_file(path)?;
        let tables = Self::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to load spawn tables {}: {}", path.display(), e)
        })?;
        tracing::debug!(path = %path.display(), "loaded spawn tables");
        Ok(tables)
    }

    /// Parse spawn tables from RON text.
    pub fn from_str(content: &str) -> LoadResult<SpawnTables> {
        let raw: Vec<(Branch, Vec<PoolEntry>)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spawn table RON: {}", e))?;

        let mut tables = SpawnTables::new();
        for (branch, entries) in raw {
            tables.set_branch(branch, entries);
        }
        Ok(tables)
    }
}
