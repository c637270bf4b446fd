//! Error types for the percolation core.
//!
//! Every variant indicates caller error (bad input or a call in the wrong
//! state), raised synchronously before any state mutation. Nothing here is
//! transient, retried, or silently swallowed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A construction argument violated its positive-integer constraint.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A raw union-find index was outside the universe.
    #[error("index {index} out of range for universe of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A grid coordinate was outside [1, n].
    #[error("cell ({row}, {col}) out of range for {size}x{size} grid")]
    CellOutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },

    /// An operation was called in a state where it cannot make progress.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

pub type Result<T> = std::result::Result<T, PercolationError>;
