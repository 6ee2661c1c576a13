//! Fixed-step Störmer–Verlet integrator for the cloth particles
//!
//! Velocity is derived from the stored position pair rather than kept as
//! state; the accumulated pending force is applied as an acceleration and
//! positions are advanced in place.

use super::params::Parameters;
use super::states::Particle;

/// Advance every non-anchored particle by one step using Störmer–Verlet.
/// `delta_seconds` is scaled by `params.speed` before use. Anchored
/// particles are skipped entirely: their positions only ever change through
/// explicit translation. Each integrated particle's pending force is
/// cleared once applied; spring rest lengths are untouched.
pub fn verlet_integrator(particles: &mut [Particle], params: &Parameters, delta_seconds: f32) {
    let scaled_dt = delta_seconds * params.speed; // effective time step

    for p in particles.iter_mut() {
        if p.anchored {
            continue;
        }

        // velocity is implicit in the position pair: v_n ~ x_n - x_n-1
        let approximate_velocity = p.pos - p.prev_pos;

        // x_n+1 = x_n + (x_n - x_n-1) + dt^2 a_n
        let move_by = approximate_velocity + scaled_dt * scaled_dt * p.acceleration();

        p.prev_pos = p.pos;
        p.translate(move_by);
        p.clear_force();
    }
}
