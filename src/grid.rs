//! Percolation grid model.
//!
//! An n-by-n grid of cells that start blocked and are opened one at a time.
//! Connectivity is tracked by a [`UnionFind`] over n*n+1 elements where
//! element 0 is a virtual top node: every opened cell in row 1 is unioned
//! with it, so "full" (reachable from the top edge) is a single connectivity
//! query instead of an O(n) scan over the first row.
//!
//! The grid exposes only read-only state (open/full per cell, last opened
//! cell, percolation status) for an external renderer; it draws nothing
//! itself.

use rand::Rng;

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// Union-find element reserved for the virtual top node.
const TOP: usize = 0;

pub struct PercolationGrid {
    size: usize,
    connectivity: UnionFind,
    /// Open flags, indexed 1..=n*n; index 0 is unused padding so cell
    /// indices line up with the union-find universe.
    open: Vec<bool>,
    open_count: usize,
    last_opened: Option<(usize, usize)>,
}

impl PercolationGrid {
    /// Create an n-by-n grid with all cells blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be positive",
            ));
        }
        Ok(PercolationGrid {
            size: n,
            connectivity: UnionFind::new(n * n + 1)?,
            open: vec![false; n * n + 1],
            open_count: 0,
            last_opened: None,
        })
    }

    /// Grid dimension n.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (n squared).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Number of cells currently open.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Fraction of cells currently open, in [0, 1].
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.cell_count() as f64
    }

    /// Coordinates of the most recently opened cell, if any.
    pub fn last_opened(&self) -> Option<(usize, usize)> {
        self.last_opened
    }

    fn check_cell(&self, row: usize, col: usize) -> Result<()> {
        if row == 0 || row > self.size || col == 0 || col > self.size {
            return Err(PercolationError::CellOutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Linear index of (row, col) in the union-find universe. The caller
    /// has already bounds-checked the coordinates.
    fn index(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.size + col
    }

    /// Open cell (row, col), wiring it to the virtual top (row 1) and to
    /// every already-open neighbor. Re-opening an open cell is harmless:
    /// the unions re-run as no-ops and `last_opened` still updates.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_cell(row, col)?;
        let index = self.index(row, col);

        if !self.open[index] {
            self.open[index] = true;
            self.open_count += 1;
        }

        // Row 1 connects straight to the virtual top.
        if row == 1 {
            self.connectivity.union(index, TOP)?;
        }
        if row > 1 && self.open[index - self.size] {
            self.connectivity.union(index, index - self.size)?;
        }
        if row < self.size && self.open[index + self.size] {
            self.connectivity.union(index, index + self.size)?;
        }
        if col > 1 && self.open[index - 1] {
            self.connectivity.union(index, index - 1)?;
        }
        if col < self.size && self.open[index + 1] {
            self.connectivity.union(index, index + 1)?;
        }

        self.last_opened = Some((row, col));
        Ok(())
    }

    /// Open a uniformly random closed cell via rejection sampling and
    /// return its coordinates.
    ///
    /// Errors with `InvalidState` when every cell is already open; without
    /// the guard the sampling loop would never terminate.
    pub fn open_random<R: Rng>(&mut self, rng: &mut R) -> Result<(usize, usize)> {
        if self.open_count == self.cell_count() {
            return Err(PercolationError::InvalidState(
                "every cell is already open",
            ));
        }
        loop {
            let row = rng.gen_range(1..=self.size);
            let col = rng.gen_range(1..=self.size);
            if !self.open[self.index(row, col)] {
                self.open(row, col)?;
                return Ok((row, col));
            }
        }
    }

    /// Whether cell (row, col) is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        self.check_cell(row, col)?;
        Ok(self.open[self.index(row, col)])
    }

    /// Whether cell (row, col) is connected to the virtual top node.
    ///
    /// The cell's own open state is not consulted: only open cells ever get
    /// unioned, so a closed cell can never reach the top.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        self.check_cell(row, col)?;
        let index = self.index(row, col);
        let root = self.connectivity.find_root(index);
        let top = self.connectivity.find_root(TOP);
        Ok(root == top)
    }

    /// Whether an open path connects the top row to the bottom row. Scans
    /// the bottom row, so O(n) per call.
    pub fn percolates(&mut self) -> bool {
        let top = self.connectivity.find_root(TOP);
        for col in 1..=self.size {
            let index = self.index(self.size, col);
            if self.connectivity.find_root(index) == top {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            PercolationGrid::new(0),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_fresh_grid_is_closed() {
        let mut grid = PercolationGrid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.open_count(), 0);
        assert_eq!(grid.last_opened(), None);
        assert!(!grid.percolates());
        for row in 1..=4 {
            for col in 1..=4 {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_coordinates_out_of_range() {
        let mut grid = PercolationGrid::new(3).unwrap();
        assert_eq!(
            grid.open(0, 1).err(),
            Some(PercolationError::CellOutOfRange {
                row: 0,
                col: 1,
                size: 3
            })
        );
        assert!(grid.open(1, 4).is_err());
        assert!(grid.is_open(4, 1).is_err());
        assert!(grid.is_full(1, 0).is_err());
        // Failed opens must not mutate anything.
        assert_eq!(grid.open_count(), 0);
        assert_eq!(grid.last_opened(), None);
    }

    #[test]
    fn test_open_marks_cell_and_last_opened() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(2, 3).unwrap();
        assert!(grid.is_open(2, 3).unwrap());
        assert_eq!(grid.open_count(), 1);
        assert_eq!(grid.last_opened(), Some((2, 3)));
    }

    #[test]
    fn test_top_row_is_full_when_opened() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(1, 2).unwrap();
        assert!(grid.is_full(1, 2).unwrap());
        assert!(!grid.is_full(2, 2).unwrap());
    }

    #[test]
    fn test_single_cell_grid_percolates_immediately() {
        let mut grid = PercolationGrid::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn test_vertical_path_percolates() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(1, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert!(!grid.percolates());
        grid.open(3, 2).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(3, 2).unwrap());
    }

    #[test]
    fn test_isolated_bottom_cell_does_not_percolate() {
        let mut grid = PercolationGrid::new(3).unwrap();
        grid.open(3, 1).unwrap();
        grid.open(1, 3).unwrap();
        assert!(!grid.percolates());
        assert!(!grid.is_full(3, 1).unwrap());
    }

    #[test]
    fn test_reopen_is_idempotent() {
        let mut grid = PercolationGrid::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        let count = grid.open_count();
        let percolated = grid.percolates();

        grid.open(1, 1).unwrap();
        assert_eq!(grid.open_count(), count);
        assert_eq!(grid.percolates(), percolated);
        assert!(grid.is_open(1, 1).unwrap());
        assert!(grid.is_full(1, 1).unwrap());
        assert_eq!(grid.last_opened(), Some((1, 1)));
    }

    #[test]
    fn test_open_random_picks_closed_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = PercolationGrid::new(3).unwrap();
        for opened in 1..=9 {
            let (row, col) = grid.open_random(&mut rng).unwrap();
            assert!(grid.is_open(row, col).unwrap());
            assert_eq!(grid.open_count(), opened);
        }
    }

    #[test]
    fn test_open_random_on_full_grid_fails() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = PercolationGrid::new(2).unwrap();
        for row in 1..=2 {
            for col in 1..=2 {
                grid.open(row, col).unwrap();
            }
        }
        assert!(matches!(
            grid.open_random(&mut rng),
            Err(PercolationError::InvalidState(_))
        ));
    }

    #[test]
    fn test_seeded_open_sequence_is_reproducible() {
        let run = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = PercolationGrid::new(5).unwrap();
            let mut opened = Vec::new();
            while !grid.percolates() {
                opened.push(grid.open_random(&mut rng).unwrap());
            }
            opened
        };
        assert_eq!(run(42), run(42));
        assert!(!run(42).is_empty());
    }
}
