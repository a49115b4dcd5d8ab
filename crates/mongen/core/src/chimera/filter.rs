//! Candidate filter: pure predicates over a species id.
//!
//! Two tiers. `is_valid_part` is the assembler's precondition;
//! `is_disqualified_part` is the stricter selection predicate handed to the
//! placement pools. Unknown ids are invalid, never errors.

use crate::env::TemplateOracle;
use crate::species::{Intelligence, SpeciesId};

/// True when `id` may legally appear as a chimera part at all.
///
/// Rejects the placeholder id, the composite marker itself, ids the
/// repository does not know, zombified variants, and species excluded from
/// generic derived generation.
pub fn is_valid_part(id: SpeciesId, templates: &(impl TemplateOracle + ?Sized)) -> bool {
    if id.is_none() || id == SpeciesId::CHIMERA {
        return false;
    }
    let Some(template) = templates.template(id) else {
        return false;
    };
    !(template.is_zombified() || template.no_gen_derived())
}

/// True when `id` should be excluded from part selection.
///
/// Stricter than validity: also rejects hybrids, sub-variants whose species
/// normalization differs from their own id, intelligence outside the
/// inclusive `[Insect, Normal]` band, and uniques.
pub fn is_disqualified_part(id: SpeciesId, templates: &(impl TemplateOracle + ?Sized)) -> bool {
    if !is_valid_part(id, templates) {
        return true;
    }
    let Some(template) = templates.template(id) else {
        return true;
    };
    template.is_hybrid()
        || template.is_zombified()
        || template.species != id
        || template.intel > Intelligence::Normal
        || template.intel < Intelligence::Insect
        || template.is_unique()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monster::test_support::template;
    use crate::species::Intelligence;
    use crate::template::{CreatureTemplate, TemplateFlags};
    use std::collections::BTreeMap;

    struct Repo(BTreeMap<SpeciesId, CreatureTemplate>);

    impl TemplateOracle for Repo {
        fn template(&self, id: SpeciesId) -> Option<&CreatureTemplate> {
            self.0.get(&id)
        }
    }

    fn repo(entries: Vec<(u16, CreatureTemplate)>) -> Repo {
        Repo(
            entries
                .into_iter()
                .map(|(raw, t)| (SpeciesId::new(raw), t))
                .collect(),
        )
    }

    #[test]
    fn reserved_and_unknown_ids_are_invalid() {
        let repo = repo(vec![(10, template(10, 10, TemplateFlags::empty()))]);
        assert!(!is_valid_part(SpeciesId::NONE, &repo));
        assert!(!is_valid_part(SpeciesId::CHIMERA, &repo));
        assert!(!is_valid_part(SpeciesId::new(999), &repo));
        assert!(is_valid_part(SpeciesId::new(10), &repo));
    }

    #[test]
    fn zombified_and_no_gen_derived_are_invalid() {
        let repo = repo(vec![
            (10, template(10, 10, TemplateFlags::ZOMBIFIED)),
            (11, template(11, 10, TemplateFlags::NO_GEN_DERIVED)),
        ]);
        assert!(!is_valid_part(SpeciesId::new(10), &repo));
        assert!(!is_valid_part(SpeciesId::new(11), &repo));
    }

    #[test]
    fn disqualification_is_stricter_than_validity() {
        let mut sub_variant = template(12, 10, TemplateFlags::empty());
        sub_variant.species = SpeciesId::new(10);

        let mut genius = template(13, 10, TemplateFlags::empty());
        genius.intel = Intelligence::High;

        let mut mindless = template(14, 10, TemplateFlags::empty());
        mindless.intel = Intelligence::Plant;

        let repo = repo(vec![
            (10, template(10, 10, TemplateFlags::empty())),
            (11, template(11, 10, TemplateFlags::HYBRID)),
            (12, sub_variant),
            (13, genius),
            (14, mindless),
            (15, template(15, 10, TemplateFlags::UNIQUE)),
        ]);

        assert!(!is_disqualified_part(SpeciesId::new(10), &repo));
        for raw in [11, 12, 13, 14, 15] {
            let id = SpeciesId::new(raw);
            assert!(is_valid_part(id, &repo), "id {raw} should stay valid");
            assert!(is_disqualified_part(id, &repo), "id {raw} should be disqualified");
        }
    }

    #[test]
    fn intelligence_band_bounds_are_inclusive() {
        let mut insect = template(20, 10, TemplateFlags::empty());
        insect.intel = Intelligence::Insect;
        let mut normal = template(21, 10, TemplateFlags::empty());
        normal.intel = Intelligence::Normal;

        let repo = repo(vec![(20, insect), (21, normal)]);
        assert!(!is_disqualified_part(SpeciesId::new(20), &repo));
        assert!(!is_disqualified_part(SpeciesId::new(21), &repo));
    }

    #[test]
    fn predicates_are_pure() {
        let repo = repo(vec![(10, template(10, 10, TemplateFlags::UNIQUE))]);
        let id = SpeciesId::new(10);
        let first = is_disqualified_part(id, &repo);
        for _ in 0..10 {
            assert_eq!(is_disqualified_part(id, &repo), first);
        }
    }
}
