//! The chimera assembler: fixed-precedence merge of three templates.
//!
//! Parts apply in order 1, 2, 3. Part 1 is privileged: it seeds the whole
//! stat/spell baseline through the standard single-template instantiation
//! path. Parts 2 and 3 contribute role flags, the spellcaster flag, and
//! spell slots under the merge rules below. Speed resolves last from the
//! recorded legs/wings roles.

use crate::chimera::filter::is_valid_part;
use crate::chimera::select::select_parts;
use crate::chimera::{AssemblyError, info};
use crate::env::{PlacementOracle, RngStream, TemplateOracle};
use crate::monster::{ChimeraExt, Monster, MonsterFlags};
use crate::species::{Place, SpeciesId};
use crate::spells::SpellSlot;

/// Assemble `parts` onto `mon`.
///
/// Precondition: every part passed [`is_valid_part`]; callers must have
/// filtered through selection. A violation is fatal, not recoverable.
pub fn define_chimera(
    mon: &mut Monster,
    parts: [SpeciesId; 3],
    templates: &(impl TemplateOracle + ?Sized),
) -> Result<(), AssemblyError> {
    for (n, part) in parts.iter().enumerate() {
        if !is_valid_part(*part, templates) {
            return Err(AssemblyError::InvalidPart {
                part: *part,
                slot: n as u8 + 1,
            });
        }
    }

    // Seed the full baseline from part 1, as if the monster were simply of
    // that type.
    *mon = Monster::instantiate(parts[0], templates)
        .ok_or(AssemblyError::UnknownTemplate(parts[0]))?;

    mon.kind = SpeciesId::CHIMERA;
    mon.base_species = parts[0];
    mon.chimera = Some(ChimeraExt::new(parts[1], parts[2]));

    for (n, part) in parts.iter().enumerate() {
        apply_part(mon, *part, n as u8 + 1, templates)?;
    }

    resolve_speed(mon, parts[0], templates)
}

/// Apply one part's transient stat block onto the target.
fn apply_part(
    mon: &mut Monster,
    part: SpeciesId,
    partnum: u8,
    templates: &(impl TemplateOracle + ?Sized),
) -> Result<(), AssemblyError> {
    // Transient monster carrying the part's fully instantiated properties.
    let dummy =
        Monster::instantiate(part, templates).ok_or(AssemblyError::UnknownTemplate(part))?;
    let mut ext = mon.chimera.ok_or(AssemblyError::NotAChimera)?;

    // Batty wins over plain wings per part; across parts, last writer wins.
    if dummy.flags.contains(MonsterFlags::BATTY) {
        ext.batty_role = Some(partnum);
    } else if dummy.flags.contains(MonsterFlags::FLIES) {
        ext.wings_role = Some(partnum);
    }

    // Legs part. Jumpy behaviour overrides normal clinging; clinging never
    // displaces a legs role that is already set.
    if dummy.flags.contains(MonsterFlags::JUMPY)
        || (dummy.flags.contains(MonsterFlags::CLINGS) && ext.legs_role.is_none())
    {
        mon.ev = dummy.ev;
        ext.legs_role = Some(partnum);
    }

    if partnum == 1 {
        // Always AC/EV from the first part. Spells were already seeded by
        // the baseline instantiation, so this part is done.
        mon.ac = dummy.ac;
        mon.ev = dummy.ev;
        mon.chimera = Some(ext);
        return Ok(());
    }

    // Make sure the resulting chimera can use its merged spells.
    if dummy.can_use_spells() {
        mon.flags |= MonsterFlags::SPELLCASTER;
    }

    // Misc slots take the primary attack spells of parts 2 and 3
    // (partnum + 1: part 2 -> slot 3, part 3 -> slot 4), overwriting
    // whatever the baseline had there.
    let bolt_slot = if partnum == 2 {
        SpellSlot::Misc1
    } else {
        SpellSlot::Misc2
    };
    let primary = dummy.spells.get(SpellSlot::PrimaryAttack);
    if !primary.is_none() {
        mon.spells.set(bolt_slot, primary);
    }

    // Special slots only fill where the earlier parts left a gap.
    mon.spells
        .fill_if_empty(SpellSlot::Enchantment, dummy.spells.get(SpellSlot::Enchantment));
    mon.spells.fill_if_empty(
        SpellSlot::SelfEnchantment,
        dummy.spells.get(SpellSlot::SelfEnchantment),
    );
    mon.spells
        .fill_if_empty(SpellSlot::Emergency, dummy.spells.get(SpellSlot::Emergency));

    mon.chimera = Some(ext);
    Ok(())
}

/// Composite speed from the recorded roles.
///
/// A winged part distinct from the legs part averages the two base speeds
/// (integer division); a non-baseline legs part alone takes its own base
/// speed; otherwise the baseline speed stands.
fn resolve_speed(
    mon: &mut Monster,
    part1: SpeciesId,
    templates: &(impl TemplateOracle + ?Sized),
) -> Result<(), AssemblyError> {
    let wings = info::wings(mon);
    let legs = info::legs(mon).unwrap_or(part1);

    if let Some(wings) = wings
        && wings != legs
    {
        let legs_speed = templates
            .base_speed(legs)
            .ok_or(AssemblyError::UnknownTemplate(legs))?;
        let wings_speed = templates
            .base_speed(wings)
            .ok_or(AssemblyError::UnknownTemplate(wings))?;
        mon.speed = (legs_speed + wings_speed) / 2;
    } else if legs != part1 {
        mon.speed = templates
            .base_speed(legs)
            .ok_or(AssemblyError::UnknownTemplate(legs))?;
    }
    Ok(())
}

/// Select depth-appropriate parts for `place` and assemble them.
///
/// `Ok(false)` reports selection exhaustion: both candidate pools came up
/// empty for some slot and no partial chimera was constructed. The caller
/// decides whether to retry the spawn or abandon it.
pub fn define_chimera_for_place(
    mon: &mut Monster,
    place: Place,
    picker: &(impl PlacementOracle + ?Sized),
    templates: &(impl TemplateOracle + ?Sized),
    stream: &mut RngStream<'_>,
) -> Result<bool, AssemblyError> {
    let Some(parts) = select_parts(place, picker, templates, stream) else {
        return Ok(false);
    };
    define_chimera(mon, parts, templates)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GenError};
    use crate::monster::test_support::template;
    use crate::species::SpeciesId;
    use crate::spells::{SpellBook, SpellId, SpellSlot};
    use crate::template::{CreatureTemplate, TemplateFlags};
    use std::collections::BTreeMap;

    struct Repo(BTreeMap<SpeciesId, CreatureTemplate>);

    impl TemplateOracle for Repo {
        fn template(&self, id: SpeciesId) -> Option<&CreatureTemplate> {
            self.0.get(&id)
        }
    }

    fn repo(entries: Vec<CreatureTemplate>) -> Repo {
        Repo(entries.into_iter().map(|t| (t.species, t)).collect())
    }

    fn blank_monster(repo: &Repo, id: u16) -> Monster {
        Monster::instantiate(SpeciesId::new(id), repo).unwrap()
    }

    #[test]
    fn baseline_comes_from_part_one() {
        let mut lion = template(10, 10, TemplateFlags::empty());
        lion.ac = 12;
        lion.ev = 8;
        lion.hp = 40;
        let repo = repo(vec![
            lion,
            template(11, 10, TemplateFlags::empty()),
            template(12, 10, TemplateFlags::empty()),
        ]);

        let mut mon = blank_monster(&repo, 11);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.kind, SpeciesId::CHIMERA);
        assert_eq!(mon.base_species, SpeciesId::new(10));
        assert_eq!(mon.ac, 12);
        assert_eq!(mon.ev, 8);
        assert_eq!(mon.max_hp, 40);
        assert!(mon.is_chimera());
    }

    #[test]
    fn zombified_part_is_fatal_precondition() {
        let repo = repo(vec![
            template(10, 10, TemplateFlags::empty()),
            template(11, 10, TemplateFlags::ZOMBIFIED),
            template(12, 10, TemplateFlags::empty()),
        ]);

        let mut mon = blank_monster(&repo, 10);
        let err = define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap_err();

        assert_eq!(
            err,
            AssemblyError::InvalidPart {
                part: SpeciesId::new(11),
                slot: 2
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }

    #[test]
    fn valid_parts_never_fail() {
        let repo = repo(vec![
            template(10, 10, TemplateFlags::empty()),
            template(11, 12, TemplateFlags::FLIES),
            template(12, 8, TemplateFlags::JUMPY | TemplateFlags::SPELLCASTER),
        ]);

        let ids = [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)];
        // Every ordering of valid parts assembles cleanly.
        for &a in &ids {
            for &b in &ids {
                for &c in &ids {
                    let mut mon = blank_monster(&repo, 10);
                    define_chimera(&mut mon, [a, b, c], &repo).unwrap();
                }
            }
        }
    }

    #[test]
    fn jumpy_later_part_overrides_cling_legs() {
        let mut clinger = template(10, 10, TemplateFlags::CLINGS);
        clinger.ev = 6;
        let mut jumper = template(12, 10, TemplateFlags::JUMPY);
        jumper.ev = 17;
        let repo = repo(vec![clinger, template(11, 10, TemplateFlags::empty()), jumper]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        let ext = mon.chimera.unwrap();
        assert_eq!(ext.legs_role, Some(3));
        assert_eq!(mon.ev, 17);
    }

    #[test]
    fn cling_never_overrides_existing_legs() {
        let mut jumper = template(10, 10, TemplateFlags::JUMPY);
        jumper.ev = 17;
        let clinger = template(11, 10, TemplateFlags::CLINGS);
        let repo = repo(vec![jumper, clinger, template(12, 10, TemplateFlags::empty())]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.chimera.unwrap().legs_role, Some(1));
        assert_eq!(mon.ev, 17);
    }

    #[test]
    fn speed_averages_legs_and_wings() {
        // Legs stay with part 1 (speed 10); part 3 flies at speed 14.
        let walker = template(10, 10, TemplateFlags::empty());
        let flyer = template(12, 14, TemplateFlags::FLIES);
        let repo = repo(vec![walker, template(11, 99, TemplateFlags::empty()), flyer]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.speed, 12);
    }

    #[test]
    fn winged_legs_part_keeps_its_own_speed() {
        // Part 2 both jumps and flies: wings == legs, so no averaging, and
        // the legs part differs from part 1 so its base speed wins.
        let repo = repo(vec![
            template(10, 10, TemplateFlags::empty()),
            template(11, 16, TemplateFlags::JUMPY | TemplateFlags::FLIES),
            template(12, 7, TemplateFlags::empty()),
        ]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.speed, 16);
    }

    #[test]
    fn no_roles_leaves_baseline_speed() {
        let repo = repo(vec![
            template(10, 13, TemplateFlags::empty()),
            template(11, 20, TemplateFlags::empty()),
            template(12, 7, TemplateFlags::empty()),
        ]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.speed, 13);
    }

    #[test]
    fn misc_slots_take_later_parts_primary_spells() {
        let mut caster1 = template(10, 10, TemplateFlags::SPELLCASTER);
        caster1.spells = SpellBook::new([
            SpellId::MagicDart,
            SpellId::None,
            SpellId::None,
            SpellId::StoneArrow,
            SpellId::StoneArrow,
            SpellId::None,
        ]);
        let mut caster2 = template(11, 10, TemplateFlags::SPELLCASTER);
        caster2.spells = SpellBook::new([
            SpellId::BoltOfFire,
            SpellId::Slow,
            SpellId::None,
            SpellId::None,
            SpellId::None,
            SpellId::Blink,
        ]);
        let mut caster3 = template(12, 10, TemplateFlags::SPELLCASTER);
        caster3.spells = SpellBook::new([
            SpellId::BoltOfCold,
            SpellId::Confuse,
            SpellId::Haste,
            SpellId::None,
            SpellId::None,
            SpellId::Teleport,
        ]);
        let repo = repo(vec![caster1, caster2, caster3]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        // Baseline primary attack survives; misc slots overwritten.
        assert_eq!(mon.spells.get(SpellSlot::PrimaryAttack), SpellId::MagicDart);
        assert_eq!(mon.spells.get(SpellSlot::Misc1), SpellId::BoltOfFire);
        assert_eq!(mon.spells.get(SpellSlot::Misc2), SpellId::BoltOfCold);
        // Enchantment: baseline empty, part 2 fills, part 3 ignored.
        assert_eq!(mon.spells.get(SpellSlot::Enchantment), SpellId::Slow);
        // Self-enchantment: only part 3 had one.
        assert_eq!(mon.spells.get(SpellSlot::SelfEnchantment), SpellId::Haste);
        // Emergency: part 2 first.
        assert_eq!(mon.spells.get(SpellSlot::Emergency), SpellId::Blink);
        assert!(mon.can_use_spells());
    }

    #[test]
    fn occupied_enchantment_slot_is_kept() {
        let mut caster1 = template(10, 10, TemplateFlags::SPELLCASTER);
        caster1.spells = SpellBook::new([
            SpellId::None,
            SpellId::Paralyse,
            SpellId::None,
            SpellId::None,
            SpellId::None,
            SpellId::None,
        ]);
        let mut caster2 = template(11, 10, TemplateFlags::SPELLCASTER);
        caster2.spells = SpellBook::new([
            SpellId::None,
            SpellId::Slow,
            SpellId::None,
            SpellId::None,
            SpellId::None,
            SpellId::None,
        ]);
        let repo = repo(vec![caster1, caster2, template(12, 10, TemplateFlags::empty())]);

        let mut mon = blank_monster(&repo, 10);
        define_chimera(
            &mut mon,
            [SpeciesId::new(10), SpeciesId::new(11), SpeciesId::new(12)],
            &repo,
        )
        .unwrap();

        assert_eq!(mon.spells.get(SpellSlot::Enchantment), SpellId::Paralyse);
    }

    #[test]
    fn duplicate_parts_assemble_without_special_cases() {
        let repo = repo(vec![template(10, 11, TemplateFlags::FLIES)]);
        let mut mon = blank_monster(&repo, 10);
        define_chimera(&mut mon, [SpeciesId::new(10); 3], &repo).unwrap();

        // wings == legs-fallback == part 1, so baseline speed stands.
        assert_eq!(mon.speed, 11);
        let ext = mon.chimera.unwrap();
        assert_eq!(ext.part2, SpeciesId::new(10));
        assert_eq!(ext.wings_role, Some(3));
    }
}
