//! Per-tick world update
//!
//! Advances every particle with constant-acceleration kinematics, resolves
//! boundary contact, and culls the dead.

use super::collision;
use super::state::World;

impl World {
    /// Advance the simulation by `dt_secs` of elapsed time
    ///
    /// For every particle, in collection order:
    /// 1. integrate position: `dx = vx*dt`, `dy = vy*dt + 0.5*g*dt^2`
    /// 2. resolve boundary contact against the current bounds
    /// 3. apply gravity to the velocity (`vy += g*dt`) unless a collision
    ///    fired this tick - the collision response owns the velocity then
    /// 4. decrement remaining life by `dt`
    ///
    /// then remove every particle whose life reached zero, preserving the
    /// relative order of survivors.
    ///
    /// `dt_secs == 0` is a no-op. Negative elapsed time is a caller contract
    /// violation and is treated the same way.
    pub fn update(&mut self, dt_secs: f32) {
        if dt_secs <= 0.0 {
            if dt_secs < 0.0 {
                log::debug!("negative dt {dt_secs}, treating as zero step");
            }
            return;
        }

        let dt = dt_secs;
        let g = self.gravity;
        let width = self.width as f32;
        let height = self.height as f32;

        for particle in &mut self.particles {
            // s = u*t + 0.5*g*t^2 on the vertical axis
            particle.pos.x += particle.vel.x * dt;
            particle.pos.y += particle.vel.y * dt + 0.5 * g * dt * dt;

            let hit = collision::resolve(particle, width, height);

            // v = u + g*t, unless the collision response already rewrote the
            // velocity this tick
            if hit.is_none() {
                particle.vel.y += g * dt;
            }

            particle.life -= dt;
        }

        self.particles.retain(|p| p.life > 0.0);
    }
}
