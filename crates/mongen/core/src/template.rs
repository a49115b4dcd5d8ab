//! Creature template definitions.
//!
//! `CreatureTemplate` is the read-only stat block the repository serves for
//! each species. Templates can be deserialized directly from RON bestiary
//! files and are immutable during assembly; the generators only ever read
//! them.

use crate::species::{Intelligence, SpeciesId};
use crate::spells::SpellBook;

bitflags::bitflags! {
    /// Intrinsic per-species flags consulted by the filter and assembler.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct TemplateFlags: u16 {
        /// Capable of sustained flight.
        const FLIES        = 1 << 0;
        /// Erratic bat-like flight. Takes precedence over plain flight
        /// when assigning a chimera's wing role.
        const BATTY        = 1 << 1;
        /// Can cling to walls.
        const CLINGS       = 1 << 2;
        /// Jumping locomotion (jumping spiders and kin).
        const JUMPY        = 1 << 3;
        /// Casts spells.
        const SPELLCASTER  = 1 << 4;
        /// Unique named creature; excluded from part selection.
        const UNIQUE       = 1 << 5;
        /// Excluded from all generic derived-monster generation.
        const NO_GEN_DERIVED = 1 << 6;
        /// Already a hybrid composite; cannot be a part of another.
        const HYBRID       = 1 << 7;
        /// A zombified variant of some base species.
        const ZOMBIFIED    = 1 << 8;
    }
}

bitflags::bitflags! {
    /// Elemental and exotic damage resistances.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Resists: u16 {
        const FIRE     = 1 << 0;
        const COLD     = 1 << 1;
        const ELEC     = 1 << 2;
        const POISON   = 1 << 3;
        const NEGATIVE = 1 << 4;
        const ACID     = 1 << 5;
        const STICKY_FLAME = 1 << 6;
    }
}

/// Read-only stat block for one species.
///
/// `species` is the normalization target: for a base species it equals the
/// template's own id, for sub-variants it points at the base. The chimera
/// filter rejects anything whose species differs from its id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    pub name: String,
    pub species: SpeciesId,
    pub hp: i32,
    pub ac: i32,
    pub ev: i32,
    /// Base action speed; 10 is the human baseline.
    pub speed: i32,
    pub intel: Intelligence,
    pub resists: Resists,
    pub flags: TemplateFlags,
    pub spells: SpellBook,
}

impl CreatureTemplate {
    pub fn flies(&self) -> bool {
        self.flags.contains(TemplateFlags::FLIES)
    }

    pub fn is_batty(&self) -> bool {
        self.flags.contains(TemplateFlags::BATTY)
    }

    pub fn can_cling(&self) -> bool {
        self.flags.contains(TemplateFlags::CLINGS)
    }

    pub fn is_jumpy(&self) -> bool {
        self.flags.contains(TemplateFlags::JUMPY)
    }

    pub fn can_use_spells(&self) -> bool {
        self.flags.contains(TemplateFlags::SPELLCASTER)
    }

    pub fn is_unique(&self) -> bool {
        self.flags.contains(TemplateFlags::UNIQUE)
    }

    pub fn is_zombified(&self) -> bool {
        self.flags.contains(TemplateFlags::ZOMBIFIED)
    }

    pub fn is_hybrid(&self) -> bool {
        self.flags.contains(TemplateFlags::HYBRID)
    }

    pub fn no_gen_derived(&self) -> bool {
        self.flags.contains(TemplateFlags::NO_GEN_DERIVED)
    }
}
