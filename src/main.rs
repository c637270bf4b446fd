//! percolate - simulate percolation on an n-by-n grid
//!
//! Opens random cells until the grid percolates (or a step limit is hit),
//! optionally pacing steps for watchable progress and dumping an ASCII view
//! of the final grid.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use percolate::config::{default_step_delay, SimulationConfig};
use percolate::grid::PercolationGrid;
use percolate::stepper::{SimulationStepper, StepOutcome};

/// Parse a positive integer, rejecting 0 with a clear message.
fn parse_positive(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("invalid number: {e}"))?;
    if n == 0 {
        return Err("value must be positive".to_string());
    }
    Ok(n)
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension (n for an n-by-n grid)
    #[clap(short = 'n', long = "grid-size", default_value = "20", value_parser = parse_positive)]
    grid_size: usize,

    /// Open at most this many cells, then stop (default: run until percolation)
    #[clap(short = 's', long = "steps")]
    steps: Option<u64>,

    /// Delay between steps in milliseconds (default: 25000/n^2, at least 1)
    #[clap(short = 'd', long = "delay")]
    delay_ms: Option<u64>,

    /// Seed for the random source (default: nondeterministic)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Print an ASCII view of the grid after the run
    #[clap(long = "show-grid")]
    show_grid: bool,

    /// Quiet mode (no per-step output, no pacing)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = SimulationConfig {
        grid_size: args.grid_size,
        trials: 1,
        step_delay: args
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| default_step_delay(args.grid_size)),
    }
    .validated()?;

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut stepper = SimulationStepper::new(config.grid_size, rng)?;

    let mut steps = 0u64;
    loop {
        if let Some(limit) = args.steps {
            if steps >= limit {
                break;
            }
        }
        match stepper.advance_one_step()? {
            StepOutcome::Opened { row, col } => {
                steps += 1;
                if !args.quiet {
                    eprintln!("opened ({row}, {col})");
                    thread::sleep(config.step_delay);
                }
            }
            StepOutcome::Percolated { row, col } => {
                steps += 1;
                if !args.quiet {
                    eprintln!("opened ({row}, {col}) - percolated");
                }
                break;
            }
        }
    }

    if args.show_grid {
        render(stepper.grid_mut())?;
    }

    let grid = stepper.grid();
    println!("grid: {0}x{0}", grid.size());
    println!(
        "opened: {} of {} cells ({:.5})",
        grid.open_count(),
        grid.cell_count(),
        grid.open_fraction()
    );
    println!("percolates: {}", stepper.is_percolated());
    Ok(())
}

/// Dump the grid to stdout: '#' blocked, '.' open, '~' open and full, '@'
/// the last-opened cell once the grid percolates. Uses only the grid's
/// read-only query surface.
fn render(grid: &mut PercolationGrid) -> Result<()> {
    let percolated = grid.percolates();
    let last = grid.last_opened();
    for row in 1..=grid.size() {
        let mut line = String::with_capacity(grid.size());
        for col in 1..=grid.size() {
            let cell = if percolated && last == Some((row, col)) {
                '@'
            } else if grid.is_open(row, col)? && grid.is_full(row, col)? {
                '~'
            } else if grid.is_open(row, col)? {
                '.'
            } else {
                '#'
            };
            line.push(cell);
        }
        println!("{line}");
    }
    Ok(())
}
