//! Emberfall - a bounded 2D particle simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (particles, gravity, boundary collisions)
//! - `config`: World construction parameters with a serde/JSON surface
//!
//! This crate is a library only. The host application owns the window, input
//! and render loop; it constructs a [`World`](sim::World) from a
//! [`WorldConfig`](config::WorldConfig), calls
//! [`update_bounds`](sim::World::update_bounds) on resize,
//! [`spawn`](sim::World::spawn) on input events,
//! [`update`](sim::World::update) once per frame with the elapsed time, and
//! reads positions back through [`snapshot`](sim::World::snapshot).

pub mod config;
pub mod sim;

pub use config::WorldConfig;
pub use sim::{BoundaryHit, Particle, SpawnError, World};

/// Simulation tuning constants
///
/// Everything in this world is in centimeter/second units to keep the
/// kinematics readable.
pub mod consts {
    use glam::Vec2;

    /// Maximum particle lifespan in seconds
    pub const DEFAULT_MAX_LIFE_S: f32 = 20.0;
    /// Maximum particle speed in cm/s. Per-component velocity draws are
    /// halved so the combined magnitude stays below this.
    pub const DEFAULT_MAX_SPEED_CMS: f32 = 700.0;
    /// Particle cap - the system's only backpressure mechanism
    pub const DEFAULT_MAX_PARTICLES: usize = 1000;
    /// Acceleration due to gravity in cm/s^2
    pub const DEFAULT_GRAVITY: f32 = 980.0;

    /// Default world width in cm (matches the default render surface)
    pub const DEFAULT_WIDTH: u32 = 650;
    /// Default world height in cm
    pub const DEFAULT_HEIGHT: u32 = 650;

    /// Velocity damping applied to both components on floor contact.
    /// Floor bounces are inelastic and also bleed horizontal speed.
    pub const FLOOR_RESTITUTION: f32 = 0.5;

    /// Velocity of particles spawned in debug mode (straight up)
    pub const DEBUG_SPAWN_VELOCITY: Vec2 = Vec2::new(0.0, -100.0);
    /// Lifespan of particles spawned in debug mode, seconds
    pub const DEBUG_SPAWN_LIFE_S: f32 = 100.0;
}
