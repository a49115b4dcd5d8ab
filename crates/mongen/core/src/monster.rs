//! The mutable monster entity that generation writes into.
//!
//! `Monster::from_template` is the standard single-template instantiation
//! path: it seeds every field from one species' template, exactly as if the
//! monster were simply of that type. Chimera assembly uses it twice over:
//! once to seed the baseline from part 1, and once per part to build the
//! transient stat blocks it merges from.

use crate::env::TemplateOracle;
use crate::species::SpeciesId;
use crate::spells::SpellBook;
use crate::template::{CreatureTemplate, Resists, TemplateFlags};

bitflags::bitflags! {
    /// Per-instance monster flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MonsterFlags: u8 {
        /// This instance can cast spells.
        const SPELLCASTER = 1 << 0;
        /// Erratic bat-like flight.
        const BATTY       = 1 << 1;
        /// Capable of flight.
        const FLIES       = 1 << 2;
        /// Can cling to walls.
        const CLINGS      = 1 << 3;
        /// Jumping locomotion.
        const JUMPY       = 1 << 4;
    }
}

/// Chimera-specific extension carried by assembled composites.
///
/// Explicit optional fields, one per role. Invariant: at most one part
/// supplies each of legs/wings/batty, recorded as the 1-based part number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChimeraExt {
    pub part2: SpeciesId,
    pub part3: SpeciesId,
    /// Part number (1-3) that supplied the legs, if any.
    pub legs_role: Option<u8>,
    /// Part number (1-3) that supplied plain wings, if any.
    pub wings_role: Option<u8>,
    /// Part number (1-3) that supplied batty flight, if any.
    pub batty_role: Option<u8>,
}

impl ChimeraExt {
    pub fn new(part2: SpeciesId, part3: SpeciesId) -> Self {
        Self {
            part2,
            part3,
            legs_role: None,
            wings_role: None,
            batty_role: None,
        }
    }
}

/// A live monster under construction.
///
/// Only the fields generation writes are modeled; position, AI state and
/// inventory belong to the wider simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    /// Displayed creature type. `SpeciesId::CHIMERA` once assembled.
    pub kind: SpeciesId,
    /// Baseline species for stat lookups; part 1 for chimeras.
    pub base_species: SpeciesId,
    pub hp: i32,
    pub max_hp: i32,
    pub ac: i32,
    pub ev: i32,
    pub speed: i32,
    pub resists: Resists,
    pub flags: MonsterFlags,
    pub spells: SpellBook,
    pub chimera: Option<ChimeraExt>,
}

impl Monster {
    /// Instantiate a monster from a single template.
    pub fn from_template(id: SpeciesId, template: &CreatureTemplate) -> Self {
        let mut flags = MonsterFlags::empty();
        if template.can_use_spells() {
            flags |= MonsterFlags::SPELLCASTER;
        }
        if template.is_batty() {
            flags |= MonsterFlags::BATTY;
        }
        if template.flies() {
            flags |= MonsterFlags::FLIES;
        }
        if template.can_cling() {
            flags |= MonsterFlags::CLINGS;
        }
        if template.is_jumpy() {
            flags |= MonsterFlags::JUMPY;
        }

        Self {
            kind: id,
            base_species: template.species,
            hp: template.hp,
            max_hp: template.hp,
            ac: template.ac,
            ev: template.ev,
            speed: template.speed,
            resists: template.resists,
            flags,
            spells: template.spells,
            chimera: None,
        }
    }

    /// Instantiate via the repository. `None` for unknown species.
    pub fn instantiate(id: SpeciesId, templates: &(impl TemplateOracle + ?Sized)) -> Option<Self> {
        templates.template(id).map(|t| Self::from_template(id, t))
    }

    pub fn can_use_spells(&self) -> bool {
        self.flags.contains(MonsterFlags::SPELLCASTER)
    }

    /// True for a fully assembled chimera.
    pub fn is_chimera(&self) -> bool {
        self.kind == SpeciesId::CHIMERA && self.chimera.is_some()
    }
}
