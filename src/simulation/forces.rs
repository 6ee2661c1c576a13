//! Force contributors for the cloth solver
//!
//! Defines the [`Force`] trait and [`ForceSet`], plus the four standard
//! terms: spring/damper forces, gravity, air resistance, and turbulent
//! wind. Terms write into each particle's `pending_force` accumulator in
//! registration order; the spring term must run before the environmental
//! terms, and every term runs before any position is integrated.

use super::params::Parameters;
use super::states::{Particle, Spring, Vec3};

/// Drag coefficient for the standard air-resistance term. Negative so that
/// the force opposes the velocity estimate it scales.
pub const AIR_RESISTANCE: f32 = -256.0;

/// Peak strength of the standard wind term.
pub const WIND_STRENGTH: f32 = 512.0;

/// Collection of force terms (springs, gravity, drag, wind).
/// Each term implements [`Force`] and their contributions are summed into
/// the particles' pending-force accumulators, in the order they were added.
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a force term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// The standard cloth force stack, in the required order: springs
    /// first, then gravity, air resistance, and wind.
    pub fn standard() -> Self {
        Self::new()
            .with(SpringForces)
            .with(Gravity)
            .with(AirResistance {
                coefficient: AIR_RESISTANCE,
            })
            .with(Wind {
                strength: WIND_STRENGTH,
            })
    }

    /// Accumulate every term's contribution at time `t` into the particles'
    /// pending forces. The accumulators are NOT zeroed here: integration
    /// clears them, and forces queued outside the step loop (the build-time
    /// seed impulse, for one) must survive until then.
    pub fn accumulate_forces(
        &self,
        t: f64,
        params: &Parameters,
        particles: &mut [Particle],
        springs: &[Spring],
    ) {
        for term in &self.terms {
            term.accumulate(t, params, particles, springs);
        }
    }
}

/// Trait for force sources acting on the particle set.
/// Implementations add their contribution to each particle's
/// `pending_force`.
pub trait Force {
    fn accumulate(
        &self,
        t: f64,
        params: &Parameters,
        particles: &mut [Particle],
        springs: &[Spring],
    );
}

/// Hookean spring force plus velocity damping, applied per spring to both
/// endpoints as an equal-and-opposite pair. Anchored endpoints accumulate
/// too; the integrator is what ignores them.
pub struct SpringForces;

impl Force for SpringForces {
    fn accumulate(
        &self,
        _t: f64,
        _params: &Parameters,
        particles: &mut [Particle],
        springs: &[Spring],
    ) {
        for spring in springs {
            let between = spring.vector_between(particles);
            let length = between.norm();
            if length == 0.0 {
                // coincident endpoints give no direction to push along
                continue;
            }

            // Hooke's law: -kx along the spring's unit vector
            let extension = length - spring.rest_length;
            let force = -spring.spring_constant * extension * (between / length);

            // Damping scales the full relative velocity of the endpoints,
            // not just its component along the spring axis, so lateral
            // relative motion is damped as well.
            let start_velocity =
                particles[spring.start].pos - particles[spring.start].prev_pos;
            let end_velocity =
                particles[spring.end].pos - particles[spring.end].prev_pos;
            let damping = (end_velocity - start_velocity) * spring.damping_constant;

            particles[spring.start].add_force(force - damping);
            particles[spring.end].add_force(damping - force); // the other direction
        }
    }
}

/// Constant gravity along +Y; the `-F/m` acceleration convention turns the
/// positive force into downward motion.
pub struct Gravity;

impl Force for Gravity {
    fn accumulate(
        &self,
        _t: f64,
        params: &Parameters,
        particles: &mut [Particle],
        _springs: &[Spring],
    ) {
        for p in particles.iter_mut() {
            if !p.anchored {
                p.add_force(Vec3::new(0.0, params.gravity, 0.0));
            }
        }
    }
}

/// Drag proportional to the velocity estimate `prev_pos - pos`.
pub struct AirResistance {
    pub coefficient: f32, // negative; scales the velocity estimate
}

impl Force for AirResistance {
    fn accumulate(
        &self,
        _t: f64,
        _params: &Parameters,
        particles: &mut [Particle],
        _springs: &[Spring],
    ) {
        for p in particles.iter_mut() {
            if !p.anchored {
                let approximate_velocity = p.prev_pos - p.pos;
                p.add_force(self.coefficient * approximate_velocity);
            }
        }
    }
}

/// Oscillatory Z-axis force whose phase travels with time and across the
/// sheet's XY footprint, giving spatially varying turbulence rather than a
/// uniform push. Inactive unless `params.apply_wind` is set.
pub struct Wind {
    pub strength: f32,
}

impl Force for Wind {
    fn accumulate(
        &self,
        t: f64,
        params: &Parameters,
        particles: &mut [Particle],
        _springs: &[Spring],
    ) {
        if !params.apply_wind {
            return;
        }

        for p in particles.iter_mut() {
            if !p.anchored {
                // traveling-wave phase over elapsed time and planar position
                let phase =
                    (t * 128.0 + f64::from(p.pos.x) * 32.0 + f64::from(p.pos.y) * 32.0) * 0.1;
                let gust = self.strength * phase.cos() as f32 * 0.15;
                p.add_force(Vec3::new(0.0, 0.0, gust));
            }
        }
    }
}
