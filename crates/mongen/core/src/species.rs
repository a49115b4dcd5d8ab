//! Species identifiers and dungeon placement coordinates.
//!
//! `SpeciesId` is the strongly-typed key into the template repository.
//! Raw values arrive from data files and placement draws; range and
//! existence are validated at the repository boundary, not at every read
//! site.

/// Identifier for a creature species in the template repository.
///
/// Two values are reserved:
/// - [`SpeciesId::NONE`]: the null/placeholder species
/// - [`SpeciesId::CHIMERA`]: the composite marker written onto assembled
///   chimeras
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeciesId(u16);

impl SpeciesId {
    /// The null/placeholder species. Never a valid chimera part.
    pub const NONE: SpeciesId = SpeciesId(0);
    /// The composite chimera marker. Never a valid chimera part either.
    pub const CHIMERA: SpeciesId = SpeciesId(1);
    /// First id available to ordinary species in data files.
    pub const FIRST_REGULAR: SpeciesId = SpeciesId(2);

    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// True for the reserved placeholder id.
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

/// Intelligence tier of a species.
///
/// Ordering matters: chimera part selection only accepts the inclusive band
/// `[Insect, Normal]`.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Intelligence {
    /// Mindless matter (plants, oozes)
    Plant,
    /// Insect-level instinct
    Insect,
    /// Reptile-level instinct
    Reptile,
    /// Animal cunning
    #[default]
    Animal,
    /// Human-comparable reasoning
    Normal,
    /// Beyond-human reasoning
    High,
}

/// Dungeon branch a placement pool belongs to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Branch {
    #[default]
    Dungeon,
    Lair,
    Swamp,
    Spider,
    Depths,
    Crypt,
    Abyss,
    Pandemonium,
}

impl Branch {
    /// Absolute depth of this branch's first level, counted from the
    /// dungeon surface. Used to weight the all-branches fallback pool.
    pub const fn depth_offset(&self) -> i32 {
        match self {
            Branch::Dungeon => 0,
            Branch::Lair => 8,
            Branch::Swamp | Branch::Spider => 11,
            Branch::Depths => 15,
            Branch::Crypt => 16,
            Branch::Abyss => 21,
            Branch::Pandemonium => 24,
        }
    }
}

/// A specific place in the dungeon: branch plus level within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub branch: Branch,
    /// 1-based level within the branch.
    pub depth: i32,
}

impl Place {
    pub const fn new(branch: Branch, depth: i32) -> Self {
        Self { branch, depth }
    }

    /// Absolute depth from the dungeon surface, for branch-unconstrained
    /// candidate pools.
    pub const fn absdepth(&self) -> i32 {
        self.branch.depth_offset() + self.depth
    }
}
