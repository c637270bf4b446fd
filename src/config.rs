//! Simulation configuration.
//!
//! An explicit value object handed to the drivers; there is no process-wide
//! configuration state.

use std::time::Duration;

use crate::error::{PercolationError, Result};

/// Pacing constant for automatic stepping: the default delay between steps
/// is `PAUSE_CONSTANT / n^2` milliseconds, so larger grids animate
/// proportionally faster.
const PAUSE_CONSTANT: u64 = 25_000;

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_TRIALS: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid dimension (n for an n-by-n grid).
    pub grid_size: usize,
    /// Number of independent trials for threshold estimation.
    pub trials: usize,
    /// Delay between automatic steps; purely a presentation concern.
    pub step_delay: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            grid_size: DEFAULT_GRID_SIZE,
            trials: DEFAULT_TRIALS,
            step_delay: default_step_delay(DEFAULT_GRID_SIZE),
        }
    }
}

impl SimulationConfig {
    /// Enforce the positive-integer constraints on grid size and trials.
    pub fn validated(self) -> Result<Self> {
        if self.grid_size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive",
            ));
        }
        if self.trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be positive",
            ));
        }
        Ok(self)
    }
}

/// Default pacing for a grid of dimension `grid_size`, floored at 1 ms.
pub fn default_step_delay(grid_size: usize) -> Duration {
    let cells = (grid_size * grid_size) as u64;
    Duration::from_millis((PAUSE_CONSTANT / cells.max(1)).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default().validated().unwrap();
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.trials, 50);
    }

    #[test]
    fn test_zero_fields_rejected() {
        let zero_grid = SimulationConfig {
            grid_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_grid.validated(),
            Err(PercolationError::InvalidArgument(_))
        ));

        let zero_trials = SimulationConfig {
            trials: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_trials.validated(),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_step_delay_scales_with_grid() {
        assert_eq!(default_step_delay(20), Duration::from_millis(62));
        assert_eq!(default_step_delay(5), Duration::from_millis(1000));
        // Floors at 1 ms for very large grids.
        assert_eq!(default_step_delay(1000), Duration::from_millis(1));
    }
}
