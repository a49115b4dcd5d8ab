//! Data-driven generation content and loaders.
//!
//! This crate houses the concrete oracle implementations behind
//! mongen-core's traits and the loaders that fill them from data files:
//! - Creature bestiary (data-driven via RON)
//! - Branch spawn tables (data-driven via RON)
//! - Generation configuration (data-driven via TOML)
//!
//! Content is consumed by the simulation's spawn paths and never appears in
//! generated monsters themselves.

pub mod bestiary;
pub mod loaders;
pub mod pools;

pub use bestiary::Bestiary;
pub use loaders::{BestiaryLoader, ConfigLoader, LoadResult, SpawnTableLoader};
pub use pools::{PoolEntry, SpawnTables};
