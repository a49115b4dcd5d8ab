//! Rarity-weighted spawn pools per dungeon branch.
//!
//! Implements [`PlacementOracle`] over depth-banded rarity tables. A pick
//! first filters the branch table down to entries whose depth band covers
//! the place and that survive the exclusion predicate, then takes one
//! rarity-weighted draw. Iteration order is fixed (BTreeMap over branches)
//! so a given seed always lands on the same species.

use std::collections::BTreeMap;

use mongen_core::{Branch, Place, PlacementOracle, RngStream, SpeciesId};

/// One row of a branch spawn table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PoolEntry {
    pub species: SpeciesId,
    /// Relative weight; 0 removes the entry from play.
    pub rarity: u32,
    /// Inclusive depth band, in branch-local levels.
    pub min_depth: i32,
    pub max_depth: i32,
}

impl PoolEntry {
    fn covers(&self, depth: i32) -> bool {
        self.rarity > 0 && (self.min_depth..=self.max_depth).contains(&depth)
    }
}

/// All branch spawn tables.
#[derive(Clone, Debug, Default)]
pub struct SpawnTables {
    branches: BTreeMap<Branch, Vec<PoolEntry>>,
}

impl SpawnTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_branch(&mut self, branch: Branch, entries: Vec<PoolEntry>) {
        self.branches.insert(branch, entries);
    }

    pub fn branch(&self, branch: Branch) -> &[PoolEntry] {
        self.branches.get(&branch).map_or(&[], Vec::as_slice)
    }

    /// One weighted draw over the already-filtered candidate list.
    fn weighted_draw(candidates: &[PoolEntry], stream: &mut RngStream<'_>) -> Option<SpeciesId> {
        let total: u32 = candidates.iter().map(|e| e.rarity).sum();
        if total == 0 {
            return None;
        }
        let mut roll = stream.below(total);
        for entry in candidates {
            if roll < entry.rarity {
                return Some(entry.species);
            }
            roll -= entry.rarity;
        }
        None
    }
}

impl PlacementOracle for SpawnTables {
    fn pick(
        &self,
        place: Place,
        stream: &mut RngStream<'_>,
        exclude: &dyn Fn(SpeciesId) -> bool,
    ) -> Option<SpeciesId> {
        let candidates: Vec<PoolEntry> = self
            .branch(place.branch)
            .iter()
            .filter(|e| e.covers(place.depth) && !exclude(e.species))
            .copied()
            .collect();
        Self::weighted_draw(&candidates, stream)
    }

    fn pick_all_branches(
        &self,
        absdepth: i32,
        stream: &mut RngStream<'_>,
        exclude: &dyn Fn(SpeciesId) -> bool,
    ) -> Option<SpeciesId> {
        // Each branch contributes the entries that would be in play at the
        // branch-local level matching this absolute depth.
        let candidates: Vec<PoolEntry> = self
            .branches
            .iter()
            .flat_map(|(branch, entries)| {
                let local = absdepth - branch.depth_offset();
                entries.iter().filter(move |e| e.covers(local) && !exclude(e.species))
            })
            .copied()
            .collect();
        Self::weighted_draw(&candidates, stream)
    }
}
