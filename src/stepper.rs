//! Stepping state machine for driving one simulation.
//!
//! The stepper owns a grid and an RNG and advances exactly one random open
//! per call. Scheduling is the driver's business: a timer, an event loop,
//! or plain manual calls all work, and the core never touches a clock.

use rand::Rng;

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Opened a cell; the grid does not yet percolate.
    Opened { row: usize, col: usize },
    /// Opened the cell that first completed a top-to-bottom path.
    Percolated { row: usize, col: usize },
}

pub struct SimulationStepper<R: Rng> {
    grid: PercolationGrid,
    rng: R,
    percolated: bool,
}

impl<R: Rng> SimulationStepper<R> {
    /// Create a stepper over a fresh fully closed grid.
    pub fn new(grid_size: usize, rng: R) -> Result<Self> {
        Ok(SimulationStepper {
            grid: PercolationGrid::new(grid_size)?,
            rng,
            percolated: false,
        })
    }

    /// Open one random cell. Errors with `InvalidState` once the grid has
    /// percolated; the driver is expected to stop stepping (or `reset`).
    pub fn advance_one_step(&mut self) -> Result<StepOutcome> {
        if self.percolated {
            return Err(PercolationError::InvalidState(
                "simulation has already percolated",
            ));
        }
        let (row, col) = self.grid.open_random(&mut self.rng)?;
        if self.grid.percolates() {
            self.percolated = true;
            Ok(StepOutcome::Percolated { row, col })
        } else {
            Ok(StepOutcome::Opened { row, col })
        }
    }

    /// Step until percolation, returning how many cells this call opened.
    pub fn run_to_completion(&mut self) -> Result<u64> {
        let mut steps = 0;
        while !self.percolated {
            self.advance_one_step()?;
            steps += 1;
        }
        Ok(steps)
    }

    /// Replace the grid with a fresh fully closed one of the same size.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = PercolationGrid::new(self.grid.size())?;
        self.percolated = false;
        Ok(())
    }

    /// Whether the grid has percolated.
    pub fn is_percolated(&self) -> bool {
        self.percolated
    }

    /// Read-only access to the grid for rendering queries.
    pub fn grid(&self) -> &PercolationGrid {
        &self.grid
    }

    /// Mutable access for connectivity queries (`is_full` compresses paths).
    pub fn grid_mut(&mut self) -> &mut PercolationGrid {
        &mut self.grid
    }
}
