//! Weighted quick-union with path halving.
//!
//! Element 0 is pinned: whenever a union involves the tree rooted at 0, the
//! other tree attaches under it regardless of size. The percolation grid
//! reserves element 0 as the virtual top node and relies on it staying the
//! representative of everything connected to the top edge.

use crate::error::{PercolationError, Result};

/// Union-Find (disjoint sets) over a fixed universe of `0..n` elements.
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton sets.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "union-find universe size must be positive",
            ));
        }
        Ok(UnionFind {
            parent: (0..n).collect(),
            size: vec![1; n],
        })
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.parent.len() {
            return Err(PercolationError::IndexOutOfRange {
                index: i,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Walk to the root of `i`, halving the path along the way. The caller
    /// has already bounds-checked `i`.
    pub(crate) fn find_root(&mut self, mut i: usize) -> usize {
        debug_assert!(i < self.parent.len());
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    /// Find the representative element for `i`.
    pub fn find(&mut self, i: usize) -> Result<usize> {
        self.check(i)?;
        Ok(self.find_root(i))
    }

    /// Check if two elements are in the same set.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.find_root(p) == self.find_root(q))
    }

    /// Merge the sets containing `p` and `q`. No-op if already connected.
    pub fn union(&mut self, p: usize, q: usize) -> Result<()> {
        self.check(p)?;
        self.check(q)?;

        let i = self.find_root(p);
        let j = self.find_root(q);
        if i == j {
            return Ok(());
        }

        // Root 0 always wins so the virtual-top representative survives
        // size tie-breaking.
        if i == 0 {
            self.parent[j] = i;
            self.size[0] += self.size[j];
        } else if j == 0 {
            self.parent[i] = j;
            self.size[0] += self.size[i];
        } else if self.size[i] < self.size[j] {
            self.parent[i] = j;
            self.size[j] += self.size[i];
        } else {
            self.parent[j] = i;
            self.size[i] += self.size[j];
        }
        Ok(())
    }
}
