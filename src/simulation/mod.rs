pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod topology;
pub mod cloth;
