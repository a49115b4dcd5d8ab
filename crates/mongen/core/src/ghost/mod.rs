//! Player ghost and random demon synthesis.
//!
//! A [`GhostDemon`] is constructed fresh per request and fully populated by
//! exactly one `init_*` call; it is never observable half-built. The same
//! profile type backs player-ghost replicas, random Pandemonium demons,
//! ugly-thing mutation chains, and animated weapons.

mod demon;
mod registry;
mod spells;

pub use demon::{
    AttackFlavour, AttackType, Brand, Colour, FlightTier, GhostDemon, PlayerSnapshot, Skill,
    WeaponProfile,
};
pub use registry::GhostRegistry;
pub use spells::translate_spell;

/// Scaling rank for an experience level.
///
/// Fixed band table; every rank-scaled roll in this module keys off it.
pub fn ghost_level_to_rank(xl: i32) -> i32 {
    if xl < 4 {
        0
    } else if xl < 7 {
        1
    } else if xl < 11 {
        2
    } else if xl < 16 {
        3
    } else if xl < 22 {
        4
    } else if xl < 26 {
        5
    } else if xl < 27 {
        6
    } else {
        7
    }
}
