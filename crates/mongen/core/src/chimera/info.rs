//! Introspection over an assembled chimera.
//!
//! Part numbers are 1-based: part 1 is the base species, parts 2 and 3 are
//! the auxiliary ids attached at assembly. A confirmed chimera always has
//! all three; a missing auxiliary id is a fatal contract violation.

use crate::chimera::AssemblyError;
use crate::env::{RngStream, TemplateOracle};
use crate::monster::Monster;
use crate::species::SpeciesId;

/// Species id of part `partnum` (1-3).
pub fn part(mon: &Monster, partnum: u8) -> Result<SpeciesId, AssemblyError> {
    match partnum {
        1 => Ok(mon.base_species),
        2 | 3 => {
            let ext = mon.chimera.as_ref().ok_or(AssemblyError::MissingPart(partnum))?;
            Ok(if partnum == 2 { ext.part2 } else { ext.part3 })
        }
        n => Err(AssemblyError::PartOutOfRange(n)),
    }
}

/// Uniform pick among the three parts.
pub fn random_part(mon: &Monster, stream: &mut RngStream<'_>) -> Result<SpeciesId, AssemblyError> {
    if !mon.is_chimera() {
        return Err(AssemblyError::NotAChimera);
    }
    part(mon, stream.below(3) as u8 + 1)
}

/// True when some part supplied batty flight.
pub fn is_batty(mon: &Monster) -> bool {
    mon.chimera
        .as_ref()
        .is_some_and(|ext| ext.batty_role.is_some())
}

/// The winged part, batty role first, then plain wings.
pub fn wings(mon: &Monster) -> Option<SpeciesId> {
    let ext = mon.chimera.as_ref()?;
    let role = ext.batty_role.or(ext.wings_role)?;
    part(mon, role).ok()
}

/// The legs part, if one was recorded.
pub fn legs(mon: &Monster) -> Option<SpeciesId> {
    let ext = mon.chimera.as_ref()?;
    part(mon, ext.legs_role?).ok()
}

/// Display suffix listing the auxiliary parts: ", name2, name3".
///
/// Empty when the monster carries no auxiliary ids or either name cannot be
/// resolved.
pub fn part_names(mon: &Monster, templates: &(impl TemplateOracle + ?Sized)) -> String {
    let Some(ext) = mon.chimera.as_ref() else {
        return String::new();
    };
    match (templates.template(ext.part2), templates.template(ext.part3)) {
        (Some(second), Some(third)) => format!(", {}, {}", second.name, third.name),
        _ => String::new(),
    }
}
