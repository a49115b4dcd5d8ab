//! In-memory creature template repository.
//!
//! The bestiary owns every loaded `CreatureTemplate` and implements
//! [`TemplateOracle`] for the generation pipelines. Id validation happens
//! here, at the repository boundary: reserved and duplicate ids are
//! rejected on insert, so read sites never re-check ranges.

use std::collections::HashMap;

use mongen_core::{CreatureTemplate, SpeciesId, TemplateOracle};

/// Template repository keyed by species id, with a name index for tools.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    templates: HashMap<SpeciesId, CreatureTemplate>,
    by_name: HashMap<String, SpeciesId>,
}

impl Bestiary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template under `id`.
    ///
    /// The placeholder id and duplicates are rejected; the composite
    /// chimera id is allowed since its display template lives in data too.
    pub fn insert(&mut self, id: SpeciesId, template: CreatureTemplate) -> anyhow::Result<()> {
        if id.is_none() {
            anyhow::bail!("species id 0 is reserved for the placeholder");
        }
        if self.templates.contains_key(&id) {
            anyhow::bail!("duplicate species id {} ('{}')", id.raw(), template.name);
        }
        if let Some(&other) = self.by_name.get(&template.name) {
            anyhow::bail!(
                "duplicate species name '{}' (ids {} and {})",
                template.name,
                other.raw(),
                id.raw()
            );
        }
        self.by_name.insert(template.name.clone(), id);
        self.templates.insert(id, template);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Species id for a template name, for tools and tests.
    pub fn id_by_name(&self, name: &str) -> Option<SpeciesId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &CreatureTemplate)> {
        self.templates.iter().map(|(id, t)| (*id, t))
    }
}

impl TemplateOracle for Bestiary {
    fn template(&self, id: SpeciesId) -> Option<&CreatureTemplate> {
        self.templates.get(&id)
    }
}
