//! Traits describing read-only world data.
//!
//! Oracles expose the template repository, placement pools, and the RNG.
//! Generation code takes them as parameters so nothing in this crate ever
//! touches ambient global state.
mod placement;
mod rng;
mod templates;

pub use placement::PlacementOracle;
pub use rng::{PcgRng, RngOracle, RngStream, compute_seed};
pub use templates::TemplateOracle;
