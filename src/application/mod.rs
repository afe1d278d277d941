mod camera;
mod config;
mod simulation;

pub use camera::{OrbitCamera, intersect_ground};
pub use config::{ConfigError, SimulationConfig};
pub use simulation::Simulation;
