//! Percolation simulation on an n-by-n grid.
//!
//! Cells start blocked and are opened one at a time; the grid percolates
//! when an open path connects the top row to the bottom row. Connectivity
//! is tracked by weighted quick-union with a virtual top node, and a Monte
//! Carlo driver estimates the percolation threshold over many independent
//! trials.

pub mod config;
pub mod error;
pub mod grid;
pub mod stats;
pub mod stepper;
pub mod union_find;

pub use config::SimulationConfig;
pub use error::PercolationError;
pub use grid::PercolationGrid;
pub use stats::ThresholdEstimator;
pub use stepper::{SimulationStepper, StepOutcome};
pub use union_find::UnionFind;
