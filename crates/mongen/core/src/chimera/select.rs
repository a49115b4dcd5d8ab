//! Part selection: three depth-appropriate draws per chimera.
//!
//! Each slot draws from the branch-local pool first and falls back to the
//! all-branches pool at the place's absolute depth. Slots draw
//! independently; duplicates across slots are permitted.

use crate::chimera::filter::is_disqualified_part;
use crate::env::{PlacementOracle, RngStream, TemplateOracle};
use crate::species::{Place, SpeciesId};

/// One filtered draw for `place`, with the all-branches fallback.
fn pick_part(
    place: Place,
    picker: &(impl PlacementOracle + ?Sized),
    templates: &(impl TemplateOracle + ?Sized),
    stream: &mut RngStream<'_>,
) -> Option<SpeciesId> {
    let exclude = |id: SpeciesId| is_disqualified_part(id, templates);
    let part = picker.pick(place, stream, &exclude);
    if part.is_some() {
        return part;
    }
    picker.pick_all_branches(place.absdepth(), stream, &exclude)
}

/// Select the three parts for a chimera spawned at `place`.
///
/// Returns `None` when any slot exhausts both pools; no partial selection
/// is ever reported. Retry is the caller's decision.
pub fn select_parts(
    place: Place,
    picker: &(impl PlacementOracle + ?Sized),
    templates: &(impl TemplateOracle + ?Sized),
    stream: &mut RngStream<'_>,
) -> Option<[SpeciesId; 3]> {
    let mut parts = [SpeciesId::NONE; 3];
    for slot in &mut parts {
        *slot = pick_part(place, picker, templates, stream)?;
    }
    Some(parts)
}

/// Pick a single depth-appropriate chimera part for `place`.
pub fn part_for_place(
    place: Place,
    picker: &(impl PlacementOracle + ?Sized),
    templates: &(impl TemplateOracle + ?Sized),
    stream: &mut RngStream<'_>,
) -> Option<SpeciesId> {
    pick_part(place, picker, templates, stream)
}
