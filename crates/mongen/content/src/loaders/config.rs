//! Generation config loader.
//!
//! Reads tunable generation parameters from a TOML file into
//! [`GenConfig`]. Only runtime-tunable knobs live in the file; the
//! compile-time capacities stay constants in mongen-core.

use std::path::Path;

use mongen_core::GenConfig;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, serde::Deserialize)]
struct RawConfig {
    #[serde(default)]
    ghosts: GhostSection,
}

#[derive(Debug, serde::Deserialize)]
struct GhostSection {
    limit: usize,
}

impl Default for GhostSection {
    fn default() -> Self {
        Self {
            limit: GenConfig::DEFAULT_GHOST_LIMIT,
        }
    }
}

/// Loader for the generation configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GenConfig> {
        let content = read_file(path)?;
        Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path.display(), e))
    }

    /// Parse config from TOML text.
    pub fn from_str(content: &str) -> LoadResult<GenConfig> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Ok(GenConfig::with_ghost_limit(raw.ghosts.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ghost_limit() {
        let config = ConfigLoader::from_str("[ghosts]\nlimit = 9\n").unwrap();
        assert_eq!(config.ghost_limit, 9);
    }

    #[test]
    fn missing_section_uses_default() {
        let config = ConfigLoader::from_str("").unwrap();
        assert_eq!(config.ghost_limit, GenConfig::DEFAULT_GHOST_LIMIT);
    }

    #[test]
    fn limit_is_clamped_to_capacity() {
        let config = ConfigLoader::from_str("[ghosts]\nlimit = 500\n").unwrap();
        assert_eq!(config.ghost_limit, GenConfig::MAX_GHOSTS);
    }
}
