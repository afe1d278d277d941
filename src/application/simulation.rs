use log::{debug, error, info, trace};
use rand::{SeedableRng, rngs::StdRng};

use crate::domain::{CellRegistry, Resolution, StepAlgorithm, presets, step};
use super::{ConfigError, SimulationConfig};

/// Simulation orchestrates one run of the automaton.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    pub registry: CellRegistry,
    pub algorithm: StepAlgorithm,
    pub is_running: bool,
    pub generation: u64,
    pub step_timer: f32,
    pub step_interval: f32,
    pub last_step_time_ms: f32,
    density: f64,
    rng: StdRng,
}

impl Simulation {
    /// Build the initial population described by `config`
    pub fn new(config: &SimulationConfig, resolution: Resolution) -> Result<Self, ConfigError> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let registry = match &config.pattern {
            Some(name) => {
                let pattern = presets::find(name)
                    .ok_or_else(|| ConfigError::UnknownPattern(name.clone()))?;
                let mut registry = CellRegistry::new(resolution);
                pattern.place_centered(&mut registry)?;
                info!("Placed {}", pattern.summary());
                registry
            }
            None => CellRegistry::with_random_population(resolution, config.initial_density, &mut rng),
        };

        info!(
            "Grid {}x{} seeded with {} live cells (seed {})",
            resolution.x(),
            resolution.y(),
            registry.alive_count(),
            seed
        );

        Ok(Self {
            registry,
            algorithm: StepAlgorithm::default(),
            is_running: true,
            generation: 0,
            step_timer: 0.0,
            step_interval: config.step_interval_secs,
            last_step_time_ms: 0.0,
            density: config.initial_density,
            rng,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Switch between serial and parallel evaluation
    pub fn cycle_algorithm(mut self) -> Self {
        self.algorithm = self.algorithm.next();
        info!("Step algorithm: {}", self.algorithm.name());
        self
    }

    /// Kill every cell and reset generation counter
    pub fn clear(mut self) -> Self {
        self.registry.clear();
        self.generation = 0;
        self
    }

    /// Reseed at the configured density and reset generation counter
    pub fn randomize(mut self) -> Self {
        self.registry.randomize(self.density, &mut self.rng);
        self.generation = 0;
        self
    }

    /// Run one generation immediately
    pub fn step(mut self) -> Self {
        let start = std::time::Instant::now();

        match step::advance(&mut self.registry, self.algorithm) {
            Ok(report) => {
                self.generation += 1;
                debug!(
                    "Generation {}: {} died, {} born",
                    self.generation, report.died, report.born
                );
            }
            Err(e) => error!("Skipping generation {}: {}", self.generation + 1, e),
        }

        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self
    }

    /// Advance the step timer by one frame, stepping once the interval elapses
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.step_timer += delta_time;

        if self.step_timer >= self.step_interval {
            self.step_timer = 0.0;
            self = self.step();
        }

        self
    }

    /// Resurrect the cell under a pointer hit on the grid plane.
    /// Returns the index of the cell brought back to life, if any.
    pub fn resurrect_at(&mut self, point: Option<(f32, f32)>) -> Option<usize> {
        let (x, z) = point?;

        let index = match self.registry.cell_at_world_coords(x, z) {
            Ok(cell) if !cell.is_alive() => cell.index(),
            Ok(_) => return None,
            Err(e) => {
                trace!("Pointer ignored: {}", e);
                return None;
            }
        };

        self.registry.born(index).ok()?;
        Some(index)
    }
}
