//! Bounded registry of live and transiting ghosts.
//!
//! Ghosts persist across level transitions: a ghost following the player
//! through stairs is parked in the transit queue and re-materialized on the
//! destination level. The registry is explicit state handed to callers, not
//! an ambient global; the game loop is its single writer.

use arrayvec::ArrayVec;

use crate::config::GenConfig;
use crate::env::RngStream;
use crate::ghost::demon::GhostDemon;

/// Bounded collection of recently-seen player ghosts.
///
/// `MAX_GHOSTS` is the compile-time ceiling; the runtime `limit` comes from
/// configuration. When full, registering evicts the oldest entry.
#[derive(Clone, Debug, Default)]
pub struct GhostRegistry {
    live: ArrayVec<GhostDemon, { GenConfig::MAX_GHOSTS }>,
    transiting: ArrayVec<GhostDemon, { GenConfig::MAX_GHOSTS }>,
    limit: usize,
}

impl GhostRegistry {
    pub fn new(config: &GenConfig) -> Self {
        Self {
            live: ArrayVec::new(),
            transiting: ArrayVec::new(),
            limit: config.ghost_limit.min(GenConfig::MAX_GHOSTS),
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn transiting_len(&self) -> usize {
        self.transiting.len()
    }

    /// Record a freshly created ghost, evicting the oldest past the limit.
    pub fn register(&mut self, ghost: GhostDemon) {
        while self.live.len() >= self.limit.max(1) {
            self.live.remove(0);
        }
        self.live.push(ghost);
    }

    /// Park a ghost that followed the player off-level.
    pub fn push_transiting(&mut self, ghost: GhostDemon) {
        while self.transiting.len() >= self.limit.max(1) {
            self.transiting.remove(0);
        }
        self.transiting.push(ghost);
    }

    /// Pull up to `n` transiting ghosts for re-materialization, oldest
    /// first.
    pub fn take_transiting(&mut self, n: usize) -> Vec<GhostDemon> {
        let n = n.min(self.transiting.len());
        self.transiting.drain(..n).collect()
    }

    /// Ghosts to place on a new level: all pending transits first, then
    /// random picks from the live set up to `n` total, each live ghost at
    /// most once.
    pub fn find_ghosts(&mut self, n: usize, stream: &mut RngStream<'_>) -> Vec<GhostDemon> {
        let mut found = self.take_transiting(n);
        let mut pool: Vec<usize> = (0..self.live.len()).collect();
        while found.len() < n && !pool.is_empty() {
            let pick = stream.below(pool.len() as u32) as usize;
            let index = pool.swap_remove(pick);
            found.push(self.live[index].clone());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;

    fn named(name: &str) -> GhostDemon {
        let mut ghost = GhostDemon::new();
        ghost.name = name.into();
        ghost
    }

    #[test]
    fn register_evicts_oldest_beyond_limit() {
        let mut registry = GhostRegistry::new(&GenConfig::with_ghost_limit(2));
        registry.register(named("first"));
        registry.register(named("second"));
        registry.register(named("third"));

        assert_eq!(registry.len(), 2);
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 1, 0);
        let found = registry.find_ghosts(2, &mut stream);
        assert!(found.iter().all(|g| g.name != "first"));
    }

    #[test]
    fn transiting_ghosts_come_back_in_order() {
        let mut registry = GhostRegistry::new(&GenConfig::default());
        registry.push_transiting(named("alpha"));
        registry.push_transiting(named("beta"));

        let taken = registry.take_transiting(5);
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].name, "alpha");
        assert_eq!(taken[1].name, "beta");
        assert_eq!(registry.transiting_len(), 0);
    }

    #[test]
    fn find_ghosts_prefers_transits() {
        let mut registry = GhostRegistry::new(&GenConfig::default());
        registry.register(named("resident"));
        registry.push_transiting(named("traveller"));

        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 2, 0);
        let found = registry.find_ghosts(1, &mut stream);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "traveller");
    }

    #[test]
    fn find_ghosts_picks_each_live_ghost_at_most_once() {
        let rng = PcgRng;
        for seed in 0..20 {
            let mut registry = GhostRegistry::new(&GenConfig::default());
            registry.register(named("alpha"));
            registry.register(named("beta"));
            registry.push_transiting(named("traveller"));

            let mut stream = RngStream::new(&rng, seed, 0);
            let found = registry.find_ghosts(5, &mut stream);

            assert_eq!(found.len(), 3);
            for name in ["alpha", "beta", "traveller"] {
                assert_eq!(found.iter().filter(|g| g.name == name).count(), 1);
            }
        }
    }

    #[test]
    fn empty_registry_yields_nothing() {
        let mut registry = GhostRegistry::new(&GenConfig::default());
        let rng = PcgRng;
        let mut stream = RngStream::new(&rng, 3, 0);
        assert!(registry.find_ghosts(4, &mut stream).is_empty());
    }
}
