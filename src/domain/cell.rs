use super::{CellRegistry, Resolution};

/// CellState is the alive/dead value carried by every cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: usize) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

/// State change emitted by `born`/`die` for the presentation layer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CellEvent {
    pub index: usize,
    pub state: CellState,
}

/// A single cell of the grid: its stable index, its state and the indices of
/// its (non-wrapping) neighbors.
#[derive(Clone, Debug)]
pub struct Cell {
    index: usize,
    resolution: Resolution,
    state: CellState,
    neighbor_indexes: Vec<usize>,
}

impl Cell {
    /// Create a cell with no adjacency yet. The registry fills it in once the
    /// whole grid exists.
    pub(crate) fn new(index: usize, resolution: Resolution, state: CellState) -> Self {
        Self {
            index,
            resolution,
            state,
            neighbor_indexes: Vec::new(),
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub const fn state(&self) -> CellState {
        self.state
    }

    pub const fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    /// Indices of the adjacent cells; empty until adjacency is computed
    pub fn neighbor_indexes(&self) -> &[usize] {
        &self.neighbor_indexes
    }

    /// Set the cell alive. Calling it on a live cell only re-emits the event.
    pub fn born(&mut self) -> CellEvent {
        self.set_state(CellState::Alive)
    }

    /// Set the cell dead. Calling it on a dead cell only re-emits the event.
    pub fn die(&mut self) -> CellEvent {
        self.set_state(CellState::Dead)
    }

    fn set_state(&mut self, state: CellState) -> CellEvent {
        self.state = state;
        CellEvent {
            index: self.index,
            state,
        }
    }

    pub const fn is_first_row(&self) -> bool {
        self.index / self.resolution.x() == 0
    }

    pub const fn is_last_row(&self) -> bool {
        self.index / self.resolution.x() == self.resolution.y() - 1
    }

    pub const fn is_first_col(&self) -> bool {
        self.index % self.resolution.x() == 0
    }

    pub const fn is_last_col(&self) -> bool {
        self.index % self.resolution.x() == self.resolution.x() - 1
    }

    /// Fill `neighbor_indexes` from the boundary predicates. Directions
    /// falling off the grid are skipped, so edges get 5 neighbors and corners 3.
    pub fn compute_neighbor_indexes(&mut self) {
        let i = self.index;
        let x = self.resolution.x();
        let (first_row, last_row) = (self.is_first_row(), self.is_last_row());
        let (first_col, last_col) = (self.is_first_col(), self.is_last_col());

        let mut indexes = Vec::with_capacity(8);

        if !first_row {
            indexes.push(i - x);
            if !first_col {
                indexes.push(i - x - 1);
            }
            if !last_col {
                indexes.push(i - x + 1);
            }
        }

        if !last_row {
            indexes.push(i + x);
            if !first_col {
                indexes.push(i + x - 1);
            }
            if !last_col {
                indexes.push(i + x + 1);
            }
        }

        if !first_col {
            indexes.push(i - 1);
        }
        if !last_col {
            indexes.push(i + 1);
        }

        self.neighbor_indexes = indexes;
    }

    /// Adjacent cells resolved through the registry.
    ///
    /// `registry` must be the one this cell was built in; neighbor indexes
    /// are only meaningful for a grid of the same resolution.
    pub fn neighbors<'a>(&'a self, registry: &'a CellRegistry) -> impl Iterator<Item = &'a Cell> + 'a {
        debug_assert_eq!(
            registry.resolution(),
            self.resolution,
            "cell {} resolved against a registry of another size",
            self.index
        );
        self.neighbor_indexes
            .iter()
            .filter_map(move |&i| registry.cell_at(i).ok())
    }

    pub fn alive_neighbors<'a>(&'a self, registry: &'a CellRegistry) -> impl Iterator<Item = &'a Cell> + 'a {
        self.neighbors(registry).filter(|cell| cell.is_alive())
    }

    pub fn alive_neighbor_count(&self, registry: &CellRegistry) -> usize {
        self.alive_neighbors(registry).count()
    }

    /// Live cell with fewer than 2 or more than 3 live neighbors
    pub fn must_die(&self, registry: &CellRegistry) -> bool {
        self.is_alive() && !self.state.evolve(self.alive_neighbor_count(registry)).is_alive()
    }

    /// Dead cell with exactly 3 live neighbors
    pub fn must_be_born(&self, registry: &CellRegistry) -> bool {
        !self.is_alive() && self.state.evolve(self.alive_neighbor_count(registry)).is_alive()
    }
}
