//! Deterministic simulation module
//!
//! All particle physics lives here. This module must be pure and deterministic:
//! - Seeded RNG only (one PRNG for the world's lifetime)
//! - Stable iteration order (spawn order, preserved across culls)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BoundaryHit, resolve};
pub use state::{Particle, SpawnError, World};
