//! Spell translation and slot assignment for synthesized casters.

use crate::env::RngStream;
use crate::ghost::demon::GhostDemon;
use crate::spells::{SpellBook, SpellId, SpellSlot};

/// Monster-castable analogue of a player spell.
///
/// Player-only spells either map to the closest monster version or drop
/// entirely (`None`); monster-castable spells pass through unchanged.
pub fn translate_spell(player_spell: SpellId) -> Option<SpellId> {
    use SpellId::*;
    match player_spell {
        None => Option::None,
        PlayerLehudibsCrystalSpear => Some(CrystalSpear),
        PlayerIronShot => Some(IronShot),
        PlayerControlledBlink => Some(Blink),
        PlayerDelayedFireball => Some(Fireball),
        PlayerSwiftness => Some(Swiftness),
        PlayerIntoxicate => Some(Confuse),
        // No monster can channel this one.
        PlayerPortalProjectile => Option::None,
        other => Some(other),
    }
}

/// Role a spell wants within the six-slot book.
fn role_of(spell: SpellId) -> SpellSlot {
    use SpellId::*;
    match spell {
        Slow | Confuse | Paralyse | Banishment => SpellSlot::Enchantment,
        Haste | Invisibility | Swiftness => SpellSlot::SelfEnchantment,
        Blink | Teleport | MinorHealing | MajorHealing => SpellSlot::Emergency,
        _ => SpellSlot::PrimaryAttack,
    }
}

/// Translate and place a player's spells into the ghost's slots.
///
/// Attack spells fill the primary slot first, then spill into the two misc
/// slots; role slots fill only while empty. Order of the input list is the
/// player's own spell ordering and decides ties.
pub fn add_spells(ghost: &mut GhostDemon, player_spells: &[SpellId]) {
    for &player_spell in player_spells {
        let Some(spell) = translate_spell(player_spell) else {
            continue;
        };

        match role_of(spell) {
            SpellSlot::PrimaryAttack => {
                if ghost.spells.get(SpellSlot::PrimaryAttack).is_none() {
                    ghost.spells.set(SpellSlot::PrimaryAttack, spell);
                } else if ghost.spells.get(SpellSlot::Misc1).is_none() {
                    ghost.spells.set(SpellSlot::Misc1, spell);
                } else {
                    ghost.spells.fill_if_empty(SpellSlot::Misc2, spell);
                }
            }
            role => ghost.spells.fill_if_empty(role, spell),
        }
    }
    ghost.spellcaster = ghost.has_spells();
}

/// Random spell set for a freshly rolled demon.
pub fn random_demon_spells(stream: &mut RngStream<'_>) -> SpellBook {
    const ATTACK: [SpellId; 6] = [
        SpellId::BoltOfFire,
        SpellId::BoltOfCold,
        SpellId::LightningBolt,
        SpellId::BoltOfDraining,
        SpellId::VenomBolt,
        SpellId::IronShot,
    ];
    const ENCHANT: [SpellId; 3] = [SpellId::Slow, SpellId::Confuse, SpellId::Paralyse];
    const EMERGENCY: [SpellId; 2] = [SpellId::Blink, SpellId::Teleport];

    let mut book = SpellBook::EMPTY;
    book.set(
        SpellSlot::PrimaryAttack,
        ATTACK[stream.below(ATTACK.len() as u32) as usize],
    );
    if stream.coinflip() {
        book.set(
            SpellSlot::Enchantment,
            ENCHANT[stream.below(ENCHANT.len() as u32) as usize],
        );
    }
    if stream.coinflip() {
        book.set(SpellSlot::Misc1, SpellId::SummonMinorDemon);
    }
    if stream.one_chance_in(4) {
        book.set(SpellSlot::Misc2, SpellId::SummonDemon);
    }
    if !stream.one_chance_in(3) {
        book.set(
            SpellSlot::Emergency,
            EMERGENCY[stream.below(EMERGENCY.len() as u32) as usize],
        );
    }
    book
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    #[test]
    fn translation_drops_untranslatable_spells() {
        assert_eq!(translate_spell(SpellId::PlayerPortalProjectile), None);
        assert_eq!(translate_spell(SpellId::None), None);
        assert_eq!(
            translate_spell(SpellId::PlayerLehudibsCrystalSpear),
            Some(SpellId::CrystalSpear)
        );
        // Monster-castable spells pass through.
        assert_eq!(translate_spell(SpellId::BoltOfFire), Some(SpellId::BoltOfFire));
    }

    #[test]
    fn attack_spells_spill_into_misc_slots() {
        let mut ghost = GhostDemon::new();
        add_spells(
            &mut ghost,
            &[
                SpellId::MagicDart,
                SpellId::BoltOfFire,
                SpellId::BoltOfCold,
                SpellId::VenomBolt,
            ],
        );

        assert_eq!(ghost.spells.get(SpellSlot::PrimaryAttack), SpellId::MagicDart);
        assert_eq!(ghost.spells.get(SpellSlot::Misc1), SpellId::BoltOfFire);
        assert_eq!(ghost.spells.get(SpellSlot::Misc2), SpellId::BoltOfCold);
        // Fourth attack spell has nowhere to go.
        assert!(!ghost.spells.iter().any(|s| s == SpellId::VenomBolt));
        assert!(ghost.spellcaster);
    }

    #[test]
    fn role_slots_fill_once() {
        let mut ghost = GhostDemon::new();
        add_spells(
            &mut ghost,
            &[SpellId::Slow, SpellId::Confuse, SpellId::Haste, SpellId::Blink],
        );

        assert_eq!(ghost.spells.get(SpellSlot::Enchantment), SpellId::Slow);
        assert_eq!(ghost.spells.get(SpellSlot::SelfEnchantment), SpellId::Haste);
        assert_eq!(ghost.spells.get(SpellSlot::Emergency), SpellId::Blink);
    }

    #[test]
    fn empty_spell_list_leaves_noncaster() {
        let mut ghost = GhostDemon::new();
        add_spells(&mut ghost, &[SpellId::PlayerPortalProjectile]);
        assert!(!ghost.spellcaster);
        assert!(ghost.spells.is_empty());
    }

    #[test]
    fn demon_books_always_have_a_primary_attack() {
        let rng = PcgRng;
        for seed in 0..100 {
            let mut stream = RngStream::new(&rng, seed, 3);
            let book = random_demon_spells(&mut stream);
            assert!(!book.get(SpellSlot::PrimaryAttack).is_none());
        }
    }
}
