//! Stateless coordinate math between linear cell indices, grid coordinates
//! and world space.
//!
//! The grid lies on the world `x`/`z` plane centered on the origin: column
//! `col` sits at `world_x = col - width / 2` and row `row` at
//! `world_z = row - height / 2`.

use serde::{Deserialize, Serialize};

use super::GridError;

/// Grid dimensions: `x` columns by `y` rows, both non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawResolution")]
pub struct Resolution {
    x: usize,
    y: usize,
}

/// Unchecked wire form of [`Resolution`]
#[derive(Deserialize)]
struct RawResolution {
    x: usize,
    y: usize,
}

impl TryFrom<RawResolution> for Resolution {
    type Error = GridError;

    fn try_from(raw: RawResolution) -> Result<Self, Self::Error> {
        Self::new(raw.x, raw.y)
    }
}

impl Resolution {
    /// Create a resolution, rejecting empty grids
    pub fn new(x: usize, y: usize) -> Result<Self, GridError> {
        let resolution = Self { x, y };
        resolution.validate()?;
        Ok(resolution)
    }

    /// Square resolution derived from the viewport width, never below 50 cells
    pub fn from_viewport_width(width: f32) -> Self {
        let side = ((width / 30.0).floor() as usize).max(50);
        Self { x: side, y: side }
    }

    fn validate(&self) -> Result<(), GridError> {
        if self.x == 0 || self.y == 0 {
            return Err(GridError::DegenerateGrid { x: self.x, y: self.y });
        }
        Ok(())
    }

    /// Number of columns
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Number of rows
    pub const fn y(&self) -> usize {
        self.y
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.x * self.y
    }
}

/// Convert 2D grid coordinates to a row-major index
pub const fn index_from_grid_coords(col: usize, row: usize, resolution: Resolution) -> usize {
    row * resolution.x + col
}

/// Convert a row-major index back to `(col, row)`
pub const fn grid_coords_from_index(index: usize, resolution: Resolution) -> (usize, usize) {
    (index % resolution.x, index / resolution.x)
}

/// World-space `(x, z)` placement of the cell at `index`
pub fn world_position(index: usize, resolution: Resolution) -> (f32, f32) {
    let (col, row) = grid_coords_from_index(index, resolution);
    (
        col as f32 - resolution.x as f32 / 2.0,
        row as f32 - resolution.y as f32 / 2.0,
    )
}

/// Resolve a world-space point on the grid plane to a cell index.
///
/// Returns `None` for points outside the grid footprint instead of wrapping
/// them onto another row.
pub fn index_from_world_coords(world_x: f32, world_z: f32, resolution: Resolution) -> Option<usize> {
    if !world_x.is_finite() || !world_z.is_finite() {
        return None;
    }

    let gx = (world_x + resolution.x as f32 / 2.0).floor();
    let gy = (world_z + resolution.y as f32 / 2.0).floor();

    let inside = gx >= 0.0
        && gy >= 0.0
        && gx < resolution.x as f32
        && gy < resolution.y as f32;

    inside.then(|| index_from_grid_coords(gx as usize, gy as usize, resolution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn res(x: usize, y: usize) -> Resolution {
        Resolution::new(x, y).unwrap()
    }

    #[test]
    fn test_degenerate_resolution_rejected() {
        assert_eq!(
            Resolution::new(0, 10),
            Err(GridError::DegenerateGrid { x: 0, y: 10 })
        );
        assert!(Resolution::new(10, 0).is_err());
        assert!(Resolution::new(1, 1).is_ok());
    }

    #[test]
    fn test_degenerate_resolution_rejected_when_deserialized() {
        let err = serde_json::from_str::<Resolution>(r#"{ "x": 0, "y": 5 }"#).unwrap_err();
        assert!(err.to_string().contains("0x5"), "{}", err);
        assert!(serde_json::from_str::<Resolution>(r#"{ "x": 4, "y": 0 }"#).is_err());

        let ok: Resolution = serde_json::from_str(r#"{ "x": 4, "y": 3 }"#).unwrap();
        assert_eq!((ok.x(), ok.y()), (4, 3));
    }

    #[test]
    fn test_viewport_resolution_has_minimum() {
        assert_eq!(Resolution::from_viewport_width(300.0), res(50, 50));
        assert_eq!(Resolution::from_viewport_width(3000.0), res(100, 100));
    }

    #[test]
    fn test_row_major_order() {
        let r = res(4, 3);
        assert_eq!(index_from_grid_coords(0, 0, r), 0);
        assert_eq!(index_from_grid_coords(3, 0, r), 3);
        assert_eq!(index_from_grid_coords(0, 1, r), 4);
        assert_eq!(index_from_grid_coords(3, 2, r), 11);
        assert_eq!(grid_coords_from_index(6, r), (2, 1));
    }

    #[test]
    fn test_center_point_maps_to_center_cell() {
        for (x, y) in [(50, 50), (51, 37), (10, 4)] {
            let r = res(x, y);
            let expected = index_from_grid_coords(x / 2, y / 2, r);
            assert_eq!(index_from_world_coords(0.0, 0.0, r), Some(expected));
        }
    }

    #[test]
    fn test_world_position_resolves_to_same_cell() {
        let r = res(10, 6);
        for index in 0..r.cell_count() {
            let (wx, wz) = world_position(index, r);
            // Cubes are centered on `world_position`, but lookups cover
            // `[pos, pos + 1)`, so the offset lands inside the cell
            assert_eq!(index_from_world_coords(wx + 0.5, wz + 0.5, r), Some(index));
        }
    }

    #[test]
    fn test_points_outside_footprint_are_rejected() {
        let r = res(10, 10);
        assert_eq!(index_from_world_coords(100.0, 0.0, r), None);
        assert_eq!(index_from_world_coords(0.0, -100.0, r), None);
        // Just past the last column must not wrap onto the next row
        assert_eq!(index_from_world_coords(5.0, 0.0, r), None);
        assert_eq!(index_from_world_coords(-5.01, 0.0, r), None);
        assert_eq!(index_from_world_coords(f32::NAN, 0.0, r), None);
        assert_eq!(index_from_world_coords(0.0, f32::INFINITY, r), None);
    }

    #[test]
    fn test_footprint_edges_are_inclusive_below() {
        let r = res(10, 10);
        assert_eq!(index_from_world_coords(-5.0, -5.0, r), Some(0));
        assert_eq!(index_from_world_coords(4.99, 4.99, r), Some(99));
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(x in 1usize..200, y in 1usize..200, seed in any::<usize>()) {
            let r = res(x, y);
            let index = seed % r.cell_count();
            let (col, row) = grid_coords_from_index(index, r);
            prop_assert!(col < x && row < y);
            prop_assert_eq!(index_from_grid_coords(col, row, r), index);
        }

        #[test]
        fn prop_world_lookup_stays_in_grid(
            x in 1usize..100,
            y in 1usize..100,
            wx in -500.0f32..500.0,
            wz in -500.0f32..500.0,
        ) {
            let r = res(x, y);
            if let Some(index) = index_from_world_coords(wx, wz, r) {
                prop_assert!(index < r.cell_count());
            }
        }
    }
}
