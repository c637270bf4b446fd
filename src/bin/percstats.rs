//! percstats - Monte Carlo percolation threshold statistics
//!
//! Runs repeated independent trials, each opening random cells on a fresh
//! grid until it percolates, and reports the mean, standard deviation and
//! 95% confidence interval of the per-trial open fraction.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::config::SimulationConfig;
use percolate::stats::ThresholdEstimator;

/// Parse a positive integer, rejecting 0 with a clear message.
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("invalid number: {e}"))?;
    if n == 0 {
        return Err("value must be positive".to_string());
    }
    Ok(n)
}

#[derive(Parser, Debug)]
#[clap(
    name = "percstats",
    about = "Monte Carlo percolation threshold statistics"
)]
struct Args {
    /// Grid dimension (n for an n-by-n grid)
    #[clap(short = 'n', long = "grid-size", default_value = "20", value_parser = parse_positive)]
    grid_size: usize,

    /// Number of independent trials
    #[clap(short = 't', long = "trials", default_value = "50", value_parser = parse_positive)]
    trials: usize,

    /// Seed for the random source (default: nondeterministic)
    #[clap(long = "seed")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimulationConfig {
        grid_size: args.grid_size,
        trials: args.trials,
        ..Default::default()
    }
    .validated()?;

    let estimator = match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            ThresholdEstimator::with_rng(config.grid_size, config.trials, &mut rng)?
        }
        None => ThresholdEstimator::new(config.grid_size, config.trials)?,
    };

    println!("grid size: {0}x{0}", estimator.grid_size());
    println!("trials: {}", estimator.trials());
    println!("mean: {:.5}", estimator.mean()?);
    println!("standard deviation: {:.5}", estimator.stddev()?);
    println!(
        "95% confidence interval: [{:.5}, {:.5}]",
        estimator.confidence_lo()?,
        estimator.confidence_hi()?
    );
    Ok(())
}
