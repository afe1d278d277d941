/// Errors raised by the grid core.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("Cell index {index} is out of range for a grid of {size} cells")]
    OutOfRangeIndex { index: usize, size: usize },
    #[error("World point ({x}, {z}) lies outside the grid footprint")]
    OutsideGrid { x: f32, z: f32 },
    #[error("Pattern {name} does not fit on the grid at ({col}, {row})")]
    PatternOutOfBounds { name: &'static str, col: usize, row: usize },
    #[error("Grid resolution {x}x{y} must be non-zero in both dimensions")]
    DegenerateGrid { x: usize, y: usize },
}
