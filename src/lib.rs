// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellEvent, CellRegistry, CellState, GridError, Resolution, StepAlgorithm};
pub use application::{OrbitCamera, Simulation, SimulationConfig};
