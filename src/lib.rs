pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Particle, Spring, Vec3};
pub use simulation::params::Parameters;
pub use simulation::forces::{AirResistance, Force, ForceSet, Gravity, SpringForces, Wind};
pub use simulation::integrator::verlet_integrator;
pub use simulation::collision::{resolve_self_collisions, resolve_sphere_collisions, resolve_translate};
pub use simulation::topology::{build_grid, corner_index, particle_index, Corner};
pub use simulation::cloth::Cloth;

pub use configuration::config::{ClothConfig, ConfigError, ScenarioConfig, SolverConfig};

pub use benchmark::benchmark::{bench_advance, bench_advance_curve};
