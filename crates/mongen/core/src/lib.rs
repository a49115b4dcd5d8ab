//! Deterministic monster synthesis rules shared across the simulation.
//!
//! `mongen-core` defines the canonical generation pipelines (chimera
//! assembly, ghost/demon synthesis) and exposes pure APIs over oracle
//! traits, so the runtime, content loaders, and offline balance tools all
//! reproduce the same monsters from the same seed.
pub mod chimera;
pub mod config;
pub mod env;
pub mod error;
pub mod ghost;
pub mod monster;
pub mod species;
pub mod spells;
pub mod template;

pub use chimera::{
    AssemblyError, define_chimera, define_chimera_for_place, is_disqualified_part, is_valid_part,
    part_for_place, select_parts,
};
pub use config::GenConfig;
pub use env::{PcgRng, PlacementOracle, RngOracle, RngStream, TemplateOracle, compute_seed};
pub use error::{ErrorSeverity, GenError};
pub use ghost::{
    AttackFlavour, AttackType, Brand, Colour, FlightTier, GhostDemon, GhostRegistry,
    PlayerSnapshot, Skill, WeaponProfile, ghost_level_to_rank, translate_spell,
};
pub use monster::{ChimeraExt, Monster, MonsterFlags};
pub use species::{Branch, Intelligence, Place, SpeciesId};
pub use spells::{SpellBook, SpellId, SpellSlot};
pub use template::{CreatureTemplate, Resists, TemplateFlags};
