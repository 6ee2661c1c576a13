//! Runtime parameters for the cloth solver
//!
//! `Parameters` holds the tunable scalars and toggles:
//! - gravity strength and the simulation speed multiplier,
//! - switches for wind and the two collision passes
//!
//! The cloth facade owns one `Parameters` value and passes it by reference
//! into the force, integration, and collision passes; nothing here is
//! ambient or global.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub gravity: f32, // gravity strength, applied as a +Y force
    pub speed: f32, // simulation speed; delta-seconds is multiplied by this
    pub apply_wind: bool, // turbulent wind force on/off
    pub apply_self_collision: bool, // particle-particle collision pass on/off
    pub apply_sphere_collision: bool, // particle-sphere collision pass on/off
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: 32.0,
            speed: 1.0,
            apply_wind: false,
            apply_self_collision: false,
            apply_sphere_collision: true,
        }
    }
}
