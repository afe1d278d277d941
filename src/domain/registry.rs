//! The authoritative, indexed collection of every cell in a run.

use rand::Rng;

use super::{
    Cell, CellEvent, CellState, GridError, Resolution,
    grid_index::index_from_world_coords,
};

/// CellRegistry owns all cells of a simulation run in index order.
///
/// Every mutation goes through [`CellRegistry::born`] / [`CellRegistry::die`],
/// which queue a [`CellEvent`] for the presentation layer to drain.
#[derive(Clone, Debug)]
pub struct CellRegistry {
    resolution: Resolution,
    cells: Vec<Cell>,
    events: Vec<CellEvent>,
}

impl CellRegistry {
    /// Create a registry with every cell dead
    pub fn new(resolution: Resolution) -> Self {
        Self::populate(resolution, |_| CellState::Dead)
    }

    /// Create a registry where each cell starts alive with probability `density`
    pub fn with_random_population<R: Rng>(resolution: Resolution, density: f64, rng: &mut R) -> Self {
        let density = density.clamp(0.0, 1.0);
        Self::populate(resolution, |_| {
            if rng.random_bool(density) {
                CellState::Alive
            } else {
                CellState::Dead
            }
        })
    }

    /// Build every cell row by row, then compute adjacency once the whole
    /// population exists.
    fn populate(resolution: Resolution, mut initial: impl FnMut(usize) -> CellState) -> Self {
        let mut cells = Vec::with_capacity(resolution.cell_count());
        for row in 0..resolution.y() {
            for col in 0..resolution.x() {
                let index = row * resolution.x() + col;
                cells.push(Cell::new(index, resolution, initial(index)));
            }
        }

        cells.iter_mut().for_each(Cell::compute_neighbor_indexes);

        Self {
            resolution,
            cells,
            events: Vec::new(),
        }
    }

    pub const fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Full population, in index order
    pub fn all(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Result<&Cell, GridError> {
        self.cells.get(index).ok_or(GridError::OutOfRangeIndex {
            index,
            size: self.cells.len(),
        })
    }

    /// Resolve the cell under a world-space point on the grid plane
    pub fn cell_at_world_coords(&self, x: f32, z: f32) -> Result<&Cell, GridError> {
        let index = index_from_world_coords(x, z, self.resolution)
            .ok_or(GridError::OutsideGrid { x, z })?;
        self.cell_at(index)
    }

    /// Adjacent cells of the cell at `index`
    pub fn neighbors_of(&self, index: usize) -> Result<impl Iterator<Item = &Cell> + '_, GridError> {
        let cell = self.cell_at(index)?;
        Ok(cell.neighbors(self))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn born(&mut self, index: usize) -> Result<(), GridError> {
        let event = self.cell_at_mut(index)?.born();
        self.events.push(event);
        Ok(())
    }

    pub fn die(&mut self, index: usize) -> Result<(), GridError> {
        let event = self.cell_at_mut(index)?.die();
        self.events.push(event);
        Ok(())
    }

    /// Take every state change recorded since the last drain
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CellEvent> {
        self.events.drain(..)
    }

    pub fn pending_events(&self) -> &[CellEvent] {
        &self.events
    }

    /// Kill every live cell
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_alive()) {
            self.events.push(cell.die());
        }
    }

    /// Reassign every cell at random, emitting events only for cells that flip
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for cell in self.cells.iter_mut() {
            let alive = rng.random_bool(density);
            if alive != cell.is_alive() {
                let event = if alive { cell.born() } else { cell.die() };
                self.events.push(event);
            }
        }
    }

    fn cell_at_mut(&mut self, index: usize) -> Result<&mut Cell, GridError> {
        let size = self.cells.len();
        self.cells
            .get_mut(index)
            .ok_or(GridError::OutOfRangeIndex { index, size })
    }
}
