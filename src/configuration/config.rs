//! Configuration types for loading cloth scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ClothConfig`]    – grid dimensions, physical size, spring constants,
//!   corner anchoring, and the collision sphere radius
//! - [`SolverConfig`]   – runtime solver settings (gravity, speed, toggles)
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Every field carries a default matching the classic demo cloth, so a
//! partial YAML file (or an empty one) still loads.
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! cloth:
//!   width_num: 16             # particles along X (>= 2)
//!   height_num: 16            # particles along Y (>= 2)
//!   width: 2.56               # physical sheet width
//!   height: 1.636             # physical sheet height
//!   spring_constant: 1024.0
//!   damping_constant: 512.0
//!   mass: 1.0                 # per-particle mass
//!   sphere_radius: 1.0        # collision-demo sphere radius
//!   anchored_top_left: true
//!   anchored_top_right: true
//!   anchored_bottom_left: false
//!   anchored_bottom_right: false
//!
//! solver:
//!   gravity: 32.0
//!   speed: 1.0
//!   apply_wind: false
//!   apply_self_collision: false
//!   apply_sphere_collision: true
//! ```
//!
//! The cloth facade maps this configuration into its runtime particle and
//! spring collections, which use different structs tuned for the solver.

use serde::Deserialize;
use thiserror::Error;

/// Rejections produced while validating a [`ClothConfig`]. Raised by
/// construction and reset before any state is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid needs at least 2x2 particles for any connectivity, got {width_num}x{height_num}")]
    InvalidDimensions { width_num: u32, height_num: u32 },

    #[error("cloth dimensions must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("particle mass must be positive, got {0}")]
    InvalidMass(f32),

    #[error("sphere radius must be positive, got {0}")]
    InvalidSphereRadius(f32),
}

/// Construction parameters for the cloth grid and its collision sphere.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ClothConfig {
    pub width_num: u32, // how many particles the cloth has along X
    pub height_num: u32, // how many particles the cloth has along Y
    pub width: f32, // physical width of the sheet
    pub height: f32, // physical height of the sheet
    pub spring_constant: f32, // stiffness of every generated spring
    pub damping_constant: f32, // damping of every generated spring
    pub mass: f32, // mass of every particle
    pub sphere_radius: f32, // radius of the collision-demo sphere
    pub anchored_top_left: bool, // anchor the corner at (0, height_num-1)
    pub anchored_top_right: bool, // anchor the corner at (width_num-1, height_num-1)
    pub anchored_bottom_left: bool, // anchor the corner at (0, 0)
    pub anchored_bottom_right: bool, // anchor the corner at (width_num-1, 0)
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            width_num: 16,
            height_num: 16,
            width: 2.56,
            height: 1.636,
            spring_constant: 1024.0,
            damping_constant: 512.0,
            mass: 1.0,
            sphere_radius: 1.0,
            anchored_top_left: true,
            anchored_top_right: true,
            anchored_bottom_left: false,
            anchored_bottom_right: false,
        }
    }
}

impl ClothConfig {
    /// Check every invariant the topology generator relies on. Called by
    /// the facade before it discards any existing state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width_num < 2 || self.height_num < 2 {
            return Err(ConfigError::InvalidDimensions {
                width_num: self.width_num,
                height_num: self.height_num,
            });
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if self.sphere_radius <= 0.0 {
            return Err(ConfigError::InvalidSphereRadius(self.sphere_radius));
        }
        Ok(())
    }
}

/// Runtime solver settings for a scenario. Mirrors
/// [`Parameters`](crate::simulation::params::Parameters), which the facade
/// keeps as mutable runtime state once the scenario is loaded.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SolverConfig {
    pub gravity: f32, // gravity strength
    pub speed: f32, // simulation speed multiplier
    pub apply_wind: bool, // turbulent wind on/off
    pub apply_self_collision: bool, // particle-particle collisions on/off
    pub apply_sphere_collision: bool, // particle-sphere collisions on/off
}

impl Default for SolverConfig {
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

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub cloth: ClothConfig, // grid construction parameters
    pub solver: SolverConfig, // runtime solver settings
}
