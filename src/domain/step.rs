//! Synchronous generation advance.
//!
//! A step is split in two passes. The planning pass only holds a shared
//! borrow of the registry, so every cell is judged against the same
//! pre-step state; the apply pass then kills and births in bulk.

use rayon::prelude::*;

use super::{CellRegistry, GridError};

/// Evaluation strategy for the planning pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepAlgorithm {
    /// Cell-by-cell, serial
    Serial,
    /// Cell-by-cell across the rayon pool
    #[default]
    Parallel,
}

impl StepAlgorithm {
    pub fn all() -> Vec<StepAlgorithm> {
        vec![StepAlgorithm::Serial, StepAlgorithm::Parallel]
    }

    /// Display name for the HUD
    pub fn name(&self) -> &'static str {
        match self {
            StepAlgorithm::Serial => "Serial",
            StepAlgorithm::Parallel => "Parallel",
        }
    }

    /// Cycle to the next algorithm
    pub fn next(self) -> Self {
        match self {
            StepAlgorithm::Serial => StepAlgorithm::Parallel,
            StepAlgorithm::Parallel => StepAlgorithm::Serial,
        }
    }
}

/// Indices selected by the planning pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepPlan {
    pub to_die: Vec<usize>,
    pub to_born: Vec<usize>,
}

/// Counts of cells changed by one applied step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub died: usize,
    pub born: usize,
}

/// First pass, serial
pub fn plan(registry: &CellRegistry) -> StepPlan {
    let to_die = registry
        .all()
        .iter()
        .filter(|cell| cell.must_die(registry))
        .map(|cell| cell.index())
        .collect();
    let to_born = registry
        .all()
        .iter()
        .filter(|cell| cell.must_be_born(registry))
        .map(|cell| cell.index())
        .collect();

    StepPlan { to_die, to_born }
}

/// First pass, parallel. Indexed collection keeps index order, so the plan
/// is identical to [`plan`].
pub fn plan_parallel(registry: &CellRegistry) -> StepPlan {
    let (to_die, to_born): (Vec<usize>, Vec<usize>) = rayon::join(
        || {
            registry
                .all()
                .par_iter()
                .filter(|cell| cell.must_die(registry))
                .map(|cell| cell.index())
                .collect()
        },
        || {
            registry
                .all()
                .par_iter()
                .filter(|cell| cell.must_be_born(registry))
                .map(|cell| cell.index())
                .collect()
        },
    );

    StepPlan { to_die, to_born }
}

/// Second pass: deaths first, then births
pub fn apply(registry: &mut CellRegistry, plan: &StepPlan) -> Result<StepReport, GridError> {
    for &index in &plan.to_die {
        registry.die(index)?;
    }
    for &index in &plan.to_born {
        registry.born(index)?;
    }

    Ok(StepReport {
        died: plan.to_die.len(),
        born: plan.to_born.len(),
    })
}

/// Advance the whole registry by one generation
pub fn advance(registry: &mut CellRegistry, algorithm: StepAlgorithm) -> Result<StepReport, GridError> {
    let step_plan = match algorithm {
        StepAlgorithm::Serial => plan(registry),
        StepAlgorithm::Parallel => plan_parallel(registry),
    };
    apply(registry, &step_plan)
}
