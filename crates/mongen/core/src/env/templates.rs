//! Template repository oracle.
//!
//! The repository owns every `CreatureTemplate` and serves lookups by
//! species id. It validates id range at its own boundary; callers treat a
//! missing template as "invalid species", never as a failure.

use crate::species::SpeciesId;
use crate::template::CreatureTemplate;

/// Read-only lookup into the creature template database.
pub trait TemplateOracle {
    /// Template for a species, or `None` for unknown/out-of-range ids.
    fn template(&self, id: SpeciesId) -> Option<&CreatureTemplate>;

    /// True when the repository has a template for `id`.
    fn is_known(&self, id: SpeciesId) -> bool {
        self.template(id).is_some()
    }

    /// Base speed for a species, straight from its template.
    ///
    /// Composite speed resolution reads class base speed, not instantiated
    /// speed, so winged/legged averaging is stable across assemblies.
    fn base_speed(&self, id: SpeciesId) -> Option<i32> {
        self.template(id).map(|t| t.speed)
    }
}
