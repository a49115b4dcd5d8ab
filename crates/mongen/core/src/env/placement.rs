//! Placement oracle: weighted, depth-aware candidate pools.
//!
//! The dungeon placement system owns rarity tables per branch. Generation
//! only asks it for one draw at a time, passing an exclusion predicate so
//! disqualified species never enter the weighting.

use crate::env::rng::RngStream;
use crate::species::{Place, SpeciesId};

/// Weighted candidate pools maintained by the dungeon placement system.
///
/// Both picks return `None` when no candidate passes the predicate; that is
/// pool exhaustion, not an error.
pub trait PlacementOracle {
    /// Draw a depth-appropriate species from the branch-local pool,
    /// excluding anything for which `exclude` returns true.
    fn pick(
        &self,
        place: Place,
        stream: &mut RngStream<'_>,
        exclude: &dyn Fn(SpeciesId) -> bool,
    ) -> Option<SpeciesId>;

    /// Draw from the all-branches pool weighted by absolute depth, with the
    /// same exclusion predicate. Fallback for exhausted branch pools.
    fn pick_all_branches(
        &self,
        absdepth: i32,
        stream: &mut RngStream<'_>,
        exclude: &dyn Fn(SpeciesId) -> bool,
    ) -> Option<SpeciesId>;
}
