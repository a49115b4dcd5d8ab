/// Generation configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Maximum number of ghosts the registry keeps live at once.
    /// The compile-time capacity `MAX_GHOSTS` is the hard ceiling; this is
    /// the runtime limit loaded from configuration.
    pub ghost_limit: usize,
}

impl GenConfig {
    // ===== compile-time constants used as type parameters =====
    /// Number of semantic spell slots on every monster.
    pub const SPELL_SLOTS: usize = 6;
    /// Number of templates merged into one chimera. Never more, never fewer.
    pub const CHIMERA_PARTS: usize = 3;
    /// Hard capacity of the ghost registry (live + transiting).
    pub const MAX_GHOSTS: usize = 27;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GHOST_LIMIT: usize = 13;

    pub fn new() -> Self {
        Self {
            ghost_limit: Self::DEFAULT_GHOST_LIMIT,
        }
    }

    pub fn with_ghost_limit(ghost_limit: usize) -> Self {
        Self {
            ghost_limit: ghost_limit.min(Self::MAX_GHOSTS),
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_limit_clamped_to_capacity() {
        let config = GenConfig::with_ghost_limit(999);
        assert_eq!(config.ghost_limit, GenConfig::MAX_GHOSTS);
    }
}
