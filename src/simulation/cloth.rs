//! The cloth facade
//!
//! `Cloth` owns the particle and spring collections, the shared collision
//! sphere, the force set, and the runtime parameters. It orchestrates one
//! simulation step (forces, then integration, then collision passes) and
//! exposes the configuration setters and read-only geometry queries that
//! external layers consume. Everything is single-threaded and synchronous;
//! `advance` runs to completion before returning.

use log::info;

use crate::configuration::config::{ClothConfig, ConfigError, ScenarioConfig};

use super::collision::{resolve_self_collisions, resolve_sphere_collisions};
use super::forces::ForceSet;
use super::integrator::verlet_integrator;
use super::params::Parameters;
use super::states::{Particle, Spring, Vec3};
use super::topology::{build_grid, corner_index, particle_index, Corner};

pub struct Cloth {
    width_num: usize, // particles along X
    height_num: usize, // particles along Y
    particles: Vec<Particle>, // row-major particle arena
    springs: Vec<Spring>, // all five spring families
    /// The sphere used for demonstrating collision with the cloth. A plain
    /// particle with no connected springs, anchored by default so the
    /// resolver cannot displace it.
    pub sphere: Particle,
    forces: ForceSet,
    params: Parameters,
    paused: bool,
}

impl Cloth {
    /// Build a cloth from construction parameters, with default solver
    /// settings. Fails without side effects on an invalid configuration.
    pub fn new(cfg: &ClothConfig) -> Result<Self, ConfigError> {
        let (particles, springs) = build_grid(cfg)?;

        // the demo sphere floats just behind the sheet's rest plane
        let mut sphere = Particle::new(0, 1.0, cfg.sphere_radius, Vec3::new(0.0, 0.0, -2.0));
        sphere.anchored = true;

        info!(
            "built cloth: {}x{} grid, {} particles, {} springs",
            cfg.width_num,
            cfg.height_num,
            particles.len(),
            springs.len()
        );

        Ok(Self {
            width_num: cfg.width_num as usize,
            height_num: cfg.height_num as usize,
            particles,
            springs,
            sphere,
            forces: ForceSet::standard(),
            params: Parameters::default(),
            paused: false,
        })
    }

    /// Build a cloth plus solver parameters from a full scenario file,
    /// mirroring the YAML layout.
    pub fn from_scenario(cfg: &ScenarioConfig) -> Result<Self, ConfigError> {
        let mut cloth = Cloth::new(&cfg.cloth)?;
        cloth.params = Parameters {
            gravity: cfg.solver.gravity,
            speed: cfg.solver.speed,
            apply_wind: cfg.solver.apply_wind,
            apply_self_collision: cfg.solver.apply_self_collision,
            apply_sphere_collision: cfg.solver.apply_sphere_collision,
        };
        Ok(cloth)
    }

    /// Discard and regenerate the particle grid and spring set. Validation
    /// runs before any state is touched, so on error the previous cloth
    /// survives intact. On success every previously returned particle
    /// index is invalidated.
    pub fn reset(&mut self, cfg: &ClothConfig) -> Result<(), ConfigError> {
        let (particles, springs) = build_grid(cfg)?;

        self.width_num = cfg.width_num as usize;
        self.height_num = cfg.height_num as usize;
        self.particles = particles;
        self.springs = springs;
        self.sphere.radius = cfg.sphere_radius;
        self.sphere.anchored = true;

        info!(
            "reset cloth: {}x{} grid, {} particles, {} springs",
            cfg.width_num,
            cfg.height_num,
            self.particles.len(),
            self.springs.len()
        );

        Ok(())
    }

    /// Advance the simulation to the next frame. `time` is the elapsed
    /// simulation time (only the wind term reads it) and `delta_seconds`
    /// the time since the previous call.
    ///
    /// Pass order is part of the discretization: spring forces fully
    /// accumulate, then environmental forces, then every position
    /// integrates, then collisions are resolved on the final positions.
    /// Does nothing while paused; never fails.
    pub fn advance(&mut self, time: f64, delta_seconds: f32) {
        if self.paused {
            return;
        }

        self.forces
            .accumulate_forces(time, &self.params, &mut self.particles, &self.springs);

        verlet_integrator(&mut self.particles, &self.params, delta_seconds);

        if self.params.apply_self_collision {
            resolve_self_collisions(&mut self.particles);
        }

        if self.params.apply_sphere_collision {
            resolve_sphere_collisions(&mut self.particles, &mut self.sphere);
        }
    }

    // =====================================================================
    // read-only queries
    // =====================================================================

    /// Number of particles in the grid.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particles along the X axis.
    pub fn width_num(&self) -> usize {
        self.width_num
    }

    /// Particles along the Y axis.
    pub fn height_num(&self) -> usize {
        self.height_num
    }

    /// The particle at grid coordinate `(col, row)`.
    pub fn particle(&self, col: usize, row: usize) -> &Particle {
        &self.particles[particle_index(col, row, self.width_num)]
    }

    /// Read-only view of the particle arena, in row-major grid order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Read-only view of the spring set.
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Flat x, y, z, index stream for every particle, in grid order. The
    /// index rides along as a float so the whole stream fits one buffer.
    pub fn points(&self) -> Vec<f32> {
        let mut points = Vec::with_capacity(self.points_len());
        for p in &self.particles {
            points.push(p.pos.x);
            points.push(p.pos.y);
            points.push(p.pos.z);
            points.push(p.index as f32);
        }
        points
    }

    /// Number of floats `points()` produces: four per particle.
    pub fn points_len(&self) -> usize {
        self.particles.len() * 4
    }

    /// Triangle indices covering the grid, two triangles per cell with
    /// consistent winding. Valid until the next successful `reset`.
    pub fn triangle_indices(&self) -> Vec<u32> {
        let mut indices = Vec::with_capacity(self.triangle_index_count());
        for y in 0..self.height_num - 1 {
            for x in 0..self.width_num - 1 {
                let corner = |col: usize, row: usize| particle_index(col, row, self.width_num) as u32;

                // ===== TRIANGLE 1 =====
                indices.push(corner(x, y));
                indices.push(corner(x + 1, y));
                indices.push(corner(x, y + 1));
                // ===== TRIANGLE 2 =====
                indices.push(corner(x, y + 1));
                indices.push(corner(x + 1, y + 1));
                indices.push(corner(x + 1, y));
            }
        }
        indices
    }

    /// Number of indices `triangle_indices()` produces: six per grid cell.
    pub fn triangle_index_count(&self) -> usize {
        6 * (self.width_num - 1) * (self.height_num - 1)
    }

    /// Current runtime parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Whether the simulation is in suspended animation.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    // =====================================================================
    // setters
    // =====================================================================

    /// Set the strength of the gravity affecting the particles.
    pub fn set_gravity(&mut self, gravity: f32) {
        self.params.gravity = gravity;
    }

    /// Set the simulation speed; delta-seconds is multiplied by this
    /// during `advance`.
    pub fn set_sim_speed(&mut self, speed: f32) {
        self.params.speed = speed;
    }

    /// Set the spring constant of every existing spring.
    pub fn set_spring_constant(&mut self, constant: f32) {
        for spring in &mut self.springs {
            spring.spring_constant = constant;
        }
    }

    /// Set the damping constant of every existing spring.
    pub fn set_damping_constant(&mut self, constant: f32) {
        for spring in &mut self.springs {
            spring.damping_constant = constant;
        }
    }

    /// Enable or disable the particle-particle collision pass.
    pub fn set_self_collisions(&mut self, enabled: bool) {
        self.params.apply_self_collision = enabled;
    }

    /// Enable or disable the particle-sphere collision pass.
    pub fn set_sphere_collisions(&mut self, enabled: bool) {
        self.params.apply_sphere_collision = enabled;
    }

    /// Enable or disable the turbulent wind force.
    pub fn set_wind(&mut self, enabled: bool) {
        self.params.apply_wind = enabled;
    }

    /// Flip the wind force on or off.
    pub fn toggle_wind(&mut self) {
        self.params.apply_wind = !self.params.apply_wind;
    }

    /// Anchor or release the particle at the given corner. Takes effect
    /// immediately, no reset needed. Corner-to-index mapping is documented
    /// on [`Corner`].
    pub fn set_anchored_corner(&mut self, corner: Corner, anchored: bool) {
        let idx = corner_index(corner, self.width_num, self.height_num);
        self.particles[idx].anchored = anchored;
    }

    /// Toggle suspended animation; while paused, `advance` does nothing.
    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Place the sphere at an absolute position, bypassing the integrator.
    /// Both stored positions move so no velocity is implied.
    pub fn set_sphere_position(&mut self, pos: Vec3) {
        self.sphere.pos = pos;
        self.sphere.prev_pos = pos;
    }

    /// Move the sphere by a relative offset, bypassing the integrator.
    pub fn translate_sphere(&mut self, offset: Vec3) {
        self.sphere.translate(offset);
    }

    /// Resize the collision sphere.
    pub fn set_sphere_radius(&mut self, radius: f32) {
        self.sphere.radius = radius;
    }
}
