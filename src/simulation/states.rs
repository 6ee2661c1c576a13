//! Core state types for the cloth simulation.
//!
//! Defines the two leaf entities:
//! - `Particle` — a point mass storing a position pair (`pos`, `prev_pos`)
//!   instead of an explicit velocity, plus a per-step force accumulator
//! - `Spring` — a two-endpoint constraint referencing particles by index
//!   into the cloth's particle vector
//!
//! The particle vector is owned by the cloth facade; springs never outlive
//! it, so index references stay valid as long as both collections are
//! replaced together on reset.

use nalgebra::Vector3;
pub type Vec3 = Vector3<f32>;

#[derive(Debug, Clone)]
pub struct Particle {
    pub anchored: bool, // immovable; skipped by the integrator
    pub index: u32, // stable identity, row-major grid order
    pub mass: f32, // scalar mass, constant after creation
    pub radius: f32, // collision radius
    pub pos: Vec3, // current world-space position
    pub prev_pos: Vec3, // position one step ago; encodes velocity implicitly
    pub pending_force: Vec3, // forces accumulated during the current step
}

impl Particle {
    /// Create an unanchored particle at rest: `prev_pos` starts equal to
    /// `pos` and the force accumulator starts at zero.
    pub fn new(index: u32, mass: f32, radius: f32, pos: Vec3) -> Self {
        Self {
            anchored: false,
            index,
            mass,
            radius,
            pos,
            prev_pos: pos,
            pending_force: Vec3::zeros(),
        }
    }

    /// Acceleration used by Verlet integration. Accumulated forces follow a
    /// negated convention, so this is `-pending_force / mass`; anchored
    /// particles never accelerate.
    pub fn acceleration(&self) -> Vec3 {
        if self.anchored {
            Vec3::zeros()
        } else {
            -self.pending_force / self.mass
        }
    }

    /// Add to the pending force; applied and cleared at integration time.
    pub fn add_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    /// Relative translation, skipping the force/integration path.
    pub fn translate(&mut self, offset: Vec3) {
        self.pos += offset;
    }

    /// Zero the accumulator once its forces have actually been applied.
    pub fn clear_force(&mut self) {
        self.pending_force = Vec3::zeros();
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    pub start: usize, // index of the first endpoint
    pub end: usize, // index of the second endpoint
    pub spring_constant: f32, // stiffness
    pub damping_constant: f32, // how quickly relative motion dies out
    pub rest_length: f32, // fixed at construction, never recomputed
}

impl Spring {
    /// Connect two particles, capturing their current separation as the
    /// rest length. Springs are therefore relaxed at creation time.
    pub fn new(
        start: usize,
        end: usize,
        spring_constant: f32,
        damping_constant: f32,
        particles: &[Particle],
    ) -> Self {
        let rest_length = (particles[end].pos - particles[start].pos).norm();
        Self {
            start,
            end,
            spring_constant,
            damping_constant,
            rest_length,
        }
    }

    /// Vector from the start endpoint to the end endpoint.
    pub fn vector_between(&self, particles: &[Particle]) -> Vec3 {
        particles[self.end].pos - particles[self.start].pos
    }

    /// Current endpoint separation.
    pub fn length(&self, particles: &[Particle]) -> f32 {
        self.vector_between(particles).norm()
    }
}
