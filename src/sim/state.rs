//! World state and particle lifecycle
//!
//! Everything the simulation owns lives here: the particle buffer, the
//! current bounds, the tuning limits, and the world's RNG.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::WorldConfig;
use crate::consts::{DEBUG_SPAWN_LIFE_S, DEBUG_SPAWN_VELOCITY};

/// A simulated point mass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in world coordinates (same units as the bounds)
    pub pos: Vec2,
    /// Velocity in cm/s
    pub vel: Vec2,
    /// Remaining lifespan in seconds; `<= 0` means dead
    pub life: f32,
}

/// Why a spawn batch was rejected
///
/// Rejection is a normal, checkable outcome, not an exceptional one: the
/// particle collection is left untouched and the caller decides whether to
/// retry, drop, or notify the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    /// The batch would push the particle count over the configured cap.
    /// This is the system's only backpressure mechanism.
    CapacityExceeded { requested: usize, available: usize },
    /// Fewer locations than requested particles
    MissingLocations { requested: usize, provided: usize },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "spawn of {requested} particles exceeds remaining capacity {available}"
            ),
            SpawnError::MissingLocations {
                requested,
                provided,
            } => write!(
                f,
                "{requested} particles requested but only {provided} locations provided"
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

/// The owning container and physics authority for all particles
///
/// Mutation goes exclusively through `&mut self` operations; the only
/// external view of the particles is the shared borrow returned by
/// [`snapshot`](World::snapshot).
#[derive(Debug, Clone)]
pub struct World {
    pub(crate) width: u32,
    pub(crate) height: u32,

    max_life_s: f32,
    max_speed_cms: f32,
    max_particles: usize,
    pub(crate) gravity: f32,
    debug_spawn: bool,

    seed: u64,
    rng: Pcg32,
    pub(crate) particles: Vec<Particle>,
}

impl World {
    /// Create a world from the given config
    ///
    /// Seeds the world's PRNG once, from `config.seed` when present or OS
    /// entropy otherwise. The chosen seed is logged so any run can be
    /// reproduced.
    pub fn new(config: WorldConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!(
            "world created: {}x{} cm, cap {} particles, seed {}",
            config.width,
            config.height,
            config.max_particles,
            seed
        );

        Self {
            width: config.width,
            height: config.height,
            max_life_s: config.max_life_s,
            max_speed_cms: config.max_speed_cms,
            max_particles: config.max_particles,
            gravity: config.gravity,
            debug_spawn: config.debug_spawn,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::with_capacity(config.max_particles),
        }
    }

    /// Spawn `count` particles at the first `count` entries of `locations`
    ///
    /// The whole batch is accepted or rejected: if fewer than `count` slots
    /// remain below the particle cap, or `locations` is shorter than `count`,
    /// nothing is spawned. Excess location entries are ignored.
    pub fn spawn(&mut self, count: usize, locations: &[Vec2]) -> Result<(), SpawnError> {
        let available = self.max_particles - self.particles.len();
        if count > available {
            log::debug!("spawn rejected: {count} requested, {available} slots free");
            return Err(SpawnError::CapacityExceeded {
                requested: count,
                available,
            });
        }
        if locations.len() < count {
            log::debug!(
                "spawn rejected: {count} requested, {} locations given",
                locations.len()
            );
            return Err(SpawnError::MissingLocations {
                requested: count,
                provided: locations.len(),
            });
        }

        for &pos in &locations[..count] {
            let particle = self.generate_particle(pos);
            self.particles.push(particle);
        }
        Ok(())
    }

    /// Generate one particle at `pos` with randomized velocity and lifespan
    ///
    /// In debug mode the particle instead gets a fixed upward velocity and a
    /// long lifespan, bypassing the RNG.
    fn generate_particle(&mut self, pos: Vec2) -> Particle {
        if self.debug_spawn {
            return Particle {
                pos,
                vel: DEBUG_SPAWN_VELOCITY,
                life: DEBUG_SPAWN_LIFE_S,
            };
        }

        // Halving each component keeps the combined magnitude below
        // max_speed_cms.
        let half = self.max_speed_cms / 2.0;
        let vel = Vec2::new(
            self.rng.random_range(-half..=half),
            self.rng.random_range(-half..=half),
        );

        // Uniform over (0, max_life_s]: strictly positive, so a fresh
        // particle never dies on its first tick unless max_life_s itself is
        // degenerate.
        let life = self.max_life_s * (1.0 - self.rng.random::<f32>());

        Particle { pos, vel, life }
    }

    /// Replace the world bounds, effective from the next update
    ///
    /// Particles left outside the new bounds are not repositioned; they get
    /// clamped the next time they touch a boundary.
    pub fn update_bounds(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Read-only ordered view of the live particles
    ///
    /// Valid until the next `spawn`/`update` call (the borrow checker
    /// enforces this).
    pub fn snapshot(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True when no particles are alive
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Slots remaining below the particle cap
    pub fn capacity_remaining(&self) -> usize {
        self.max_particles - self.particles.len()
    }

    /// Current bounds in cm
    pub fn bounds(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Maximum lifespan a spawned particle can draw, seconds
    pub fn max_life_s(&self) -> f32 {
        self.max_life_s
    }

    /// The seed this world's PRNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
