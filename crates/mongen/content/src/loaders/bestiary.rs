//! Bestiary loader.
//!
//! Loads creature templates from RON files into a [`Bestiary`].
//!
//! RON format: `Vec<(u16, CreatureTemplate)>`, a raw species id paired with
//! its template. Id validation (reserved ids, duplicates) happens on
//! insert.

use std::path::Path;

use mongen_core::{CreatureTemplate, SpeciesId};

use crate::bestiary::Bestiary;
use crate::loaders::{LoadResult, read_file};

/// Loader for the creature template catalog.
pub struct BestiaryLoader;

impl BestiaryLoader {
    /// Load a bestiary from a RON file.
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        let bestiary = Self::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load bestiary {}: {}", path.display(), e))?;
        tracing::debug!(
            templates = bestiary.len(),
            path = %path.display(),
            "loaded bestiary"
        );
        Ok(bestiary)
    }

    /// Parse a bestiary from RON text.
    pub fn from_str(content: &str) -> LoadResult<Bestiary> {
        let raw: Vec<(u16, CreatureTemplate)> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        let mut bestiary = Bestiary::new();
        for (raw_id, template) in raw {
            bestiary.insert(SpeciesId::new(raw_id), template)?;
        }
        Ok(bestiary)
    }
}
