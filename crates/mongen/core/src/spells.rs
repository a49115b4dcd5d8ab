//! Spell identifiers and the fixed six-slot monster spell book.
//!
//! Monster spell books are positional: each of the six slots carries a
//! semantic role (primary attack, enchantment, self-enchantment, two misc
//! slots, emergency). [`SpellSlot`] names those roles once so call sites
//! never hard-code indices.

use crate::config::GenConfig;

/// A castable spell.
///
/// Covers both monster-native spells and the player spells that ghost
/// synthesis translates into monster-castable analogues.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellId {
    /// Empty slot marker.
    #[default]
    None,

    // Monster-castable attack spells
    MagicDart,
    ThrowFlame,
    ThrowFrost,
    Fireball,
    BoltOfFire,
    BoltOfCold,
    BoltOfDraining,
    LightningBolt,
    VenomBolt,
    PoisonArrow,
    CrystalSpear,
    IronShot,
    StoneArrow,
    Pain,
    StickyFlame,

    // Enchantments (hostile)
    Slow,
    Confuse,
    Paralyse,
    Banishment,

    // Self-enchantments
    Haste,
    Invisibility,
    Swiftness,

    // Emergency
    Blink,
    Teleport,
    MinorHealing,
    MajorHealing,

    // Summons and misc
    SummonDemon,
    SummonMinorDemon,
    Animate,

    // Player-only spells; ghost synthesis maps these to analogues above
    PlayerLehudibsCrystalSpear,
    PlayerIronShot,
    PlayerControlledBlink,
    PlayerDelayedFireball,
    PlayerSwiftness,
    PlayerPortalProjectile,
    PlayerIntoxicate,
}

impl SpellId {
    pub const fn is_none(self) -> bool {
        matches!(self, SpellId::None)
    }
}

/// Semantic role of each of the six spell slots.
///
/// The numeric mapping is fixed and is the only place it is written down:
/// 0 = primary attack, 1 = enchantment, 2 = self-enchantment, 3/4 = misc,
/// 5 = emergency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellSlot {
    PrimaryAttack,
    Enchantment,
    SelfEnchantment,
    Misc1,
    Misc2,
    Emergency,
}

impl SpellSlot {
    pub const fn index(self) -> usize {
        match self {
            SpellSlot::PrimaryAttack => 0,
            SpellSlot::Enchantment => 1,
            SpellSlot::SelfEnchantment => 2,
            SpellSlot::Misc1 => 3,
            SpellSlot::Misc2 => 4,
            SpellSlot::Emergency => 5,
        }
    }

    /// Slot for a given array index, if in range.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(SpellSlot::PrimaryAttack),
            1 => Some(SpellSlot::Enchantment),
            2 => Some(SpellSlot::SelfEnchantment),
            3 => Some(SpellSlot::Misc1),
            4 => Some(SpellSlot::Misc2),
            5 => Some(SpellSlot::Emergency),
            _ => None,
        }
    }
}

/// Fixed-size ordered spell slots carried by every monster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellBook {
    slots: [SpellId; GenConfig::SPELL_SLOTS],
}

impl SpellBook {
    /// An empty book (all slots `SpellId::None`).
    pub const EMPTY: SpellBook = SpellBook {
        slots: [SpellId::None; GenConfig::SPELL_SLOTS],
    };

    pub const fn new(slots: [SpellId; GenConfig::SPELL_SLOTS]) -> Self {
        Self { slots }
    }

    pub const fn get(&self, slot: SpellSlot) -> SpellId {
        self.slots[slot.index()]
    }

    pub fn set(&mut self, slot: SpellSlot, spell: SpellId) {
        self.slots[slot.index()] = spell;
    }

    /// Writes `spell` only when the slot is currently empty.
    pub fn fill_if_empty(&mut self, slot: SpellSlot, spell: SpellId) {
        if self.get(slot).is_none() && !spell.is_none() {
            self.set(slot, spell);
        }
    }

    /// True when no slot holds a spell.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    pub fn iter(&self) -> impl Iterator<Item = SpellId> + '_ {
        self.slots.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn slot_indices_are_stable() {
        assert_eq!(SpellSlot::PrimaryAttack.index(), 0);
        assert_eq!(SpellSlot::Enchantment.index(), 1);
        assert_eq!(SpellSlot::SelfEnchantment.index(), 2);
        assert_eq!(SpellSlot::Misc1.index(), 3);
        assert_eq!(SpellSlot::Misc2.index(), 4);
        assert_eq!(SpellSlot::Emergency.index(), 5);

        for slot in SpellSlot::iter() {
            assert_eq!(SpellSlot::from_index(slot.index()), Some(slot));
        }
        assert_eq!(SpellSlot::from_index(6), None);
    }

    #[test]
    fn fill_if_empty_never_overwrites() {
        let mut book = SpellBook::EMPTY;
        book.fill_if_empty(SpellSlot::Enchantment, SpellId::Slow);
        assert_eq!(book.get(SpellSlot::Enchantment), SpellId::Slow);

        book.fill_if_empty(SpellSlot::Enchantment, SpellId::Confuse);
        assert_eq!(book.get(SpellSlot::Enchantment), SpellId::Slow);
    }

    #[test]
    fn fill_if_empty_ignores_empty_source() {
        let mut book = SpellBook::EMPTY;
        book.fill_if_empty(SpellSlot::Emergency, SpellId::None);
        assert!(book.is_empty());
    }
}
