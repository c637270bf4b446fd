//! Monte Carlo estimation of the percolation threshold.
//!
//! Runs independent trials, each opening random cells on a fresh grid until
//! it percolates, and records the fraction of cells open at that moment.
//! The mean, standard deviation and 95% confidence interval over those
//! per-trial fractions estimate the percolation threshold.

use log::debug;
use rand::Rng;

use crate::error::{PercolationError, Result};
use crate::grid::PercolationGrid;

/// Critical value for a 95% confidence interval under the normal
/// approximation.
const CONFIDENCE_95: f64 = 1.96;

pub struct ThresholdEstimator {
    grid_size: usize,
    samples: Vec<f64>,
}

impl ThresholdEstimator {
    /// Run `trials` independent trials on fresh grids of dimension
    /// `grid_size`, using the thread RNG.
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        Self::with_rng(grid_size, trials, &mut rand::thread_rng())
    }

    /// Like [`ThresholdEstimator::new`], with a caller-supplied RNG so runs
    /// can be seeded for reproducibility.
    pub fn with_rng<R: Rng>(grid_size: usize, trials: usize, rng: &mut R) -> Result<Self> {
        if grid_size == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive",
            ));
        }
        if trials == 0 {
            return Err(PercolationError::InvalidArgument(
                "trial count must be positive",
            ));
        }

        let mut samples = Vec::with_capacity(trials);
        for trial in 0..trials {
            let mut grid = PercolationGrid::new(grid_size)?;
            let mut opens = 0u64;
            while !grid.percolates() {
                grid.open_random(rng)?;
                opens += 1;
            }
            let sample = opens as f64 / grid.cell_count() as f64;
            debug!(
                "trial {}/{}: percolated after {} opens (fraction {:.5})",
                trial + 1,
                trials,
                opens,
                sample
            );
            samples.push(sample);
        }

        Ok(ThresholdEstimator { grid_size, samples })
    }

    /// Grid dimension the trials ran on.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Number of trials recorded.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// Per-trial open fractions, each in (0, 1].
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn require_samples(&self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(PercolationError::InvalidState("no samples recorded"));
        }
        Ok(())
    }

    /// Arithmetic mean of the per-trial open fractions.
    pub fn mean(&self) -> Result<f64> {
        self.require_samples()?;
        Ok(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Standard deviation of the samples, dividing by the sample count
    /// (population form, not count - 1). Exactly 0 for a single trial.
    pub fn stddev(&self) -> Result<f64> {
        let mean = self.mean()?;
        let sum_sq: f64 = self.samples.iter().map(|s| (s - mean) * (s - mean)).sum();
        Ok((sum_sq / self.samples.len() as f64).sqrt())
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> Result<f64> {
        Ok(self.mean()? - self.half_interval()?)
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> Result<f64> {
        Ok(self.mean()? + self.half_interval()?)
    }

    fn half_interval(&self) -> Result<f64> {
        Ok(CONFIDENCE_95 * self.stddev()? / (self.samples.len() as f64).sqrt())
    }
}
