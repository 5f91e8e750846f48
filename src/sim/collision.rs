//! Boundary collision detection and response
//!
//! Particles collide with the floor and the side walls only, never with each
//! other. The response is a position clamp plus a velocity transform, and at
//! most one boundary fires per particle per tick.

use crate::consts::FLOOR_RESTITUTION;

use super::state::Particle;

/// Which boundary a particle hit this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryHit {
    Floor,
    RightWall,
    LeftWall,
}

/// Check a particle against the bounds and apply the response in place
///
/// Priority order: floor, then right wall, then left wall; the first match
/// wins. Floor contact inverts the vertical velocity and scales both
/// components by [`FLOOR_RESTITUTION`] - an inelastic bounce that also bleeds
/// horizontal speed. Wall contact inverts the horizontal component only.
///
/// Returns the boundary that fired, `None` in free flight. On any hit the
/// response owns the resulting velocity for this tick, so the caller must
/// skip the gravity velocity increment.
pub fn resolve(particle: &mut Particle, width: f32, height: f32) -> Option<BoundaryHit> {
    if particle.pos.y >= height {
        particle.pos.y = height;
        particle.vel.y = -particle.vel.y;
        particle.vel *= FLOOR_RESTITUTION;
        return Some(BoundaryHit::Floor);
    }

    if particle.pos.x >= width {
        particle.pos.x = width;
        particle.vel.x = -particle.vel.x;
        return Some(BoundaryHit::RightWall);
    }

    if particle.pos.x <= 0.0 {
        particle.pos.x = 0.0;
        particle.vel.x = -particle.vel.x;
        return Some(BoundaryHit::LeftWall);
    }

    None
}
