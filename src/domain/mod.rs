mod cell;
mod error;
mod patterns;
mod registry;
pub mod grid_index;
pub mod step;

pub use cell::{Cell, CellEvent, CellState};
pub use error::GridError;
pub use grid_index::Resolution;
pub use patterns::{Pattern, presets};
pub use registry::CellRegistry;
pub use step::{StepAlgorithm, StepPlan, StepReport};
